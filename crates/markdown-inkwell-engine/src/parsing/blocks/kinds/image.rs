use std::num::NonZeroU32;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::ImageRef;

/// Image line syntax: `![alt](path)` optionally followed by `|<digits>px`.
///
/// The whole line (ignoring surrounding whitespace) must be the reference.
pub struct ImageSyntax;

impl ImageSyntax {
    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"^!\[[^\]]*\]\(([^)]+)\)(?:\|(\d+)px)?$").expect("Invalid image regex")
        })
    }

    pub fn classify(line: &str) -> Option<ImageRef> {
        let caps = Self::pattern().captures(line.trim())?;
        let path = caps.get(1)?.as_str().to_string();
        let width_px = caps
            .get(2)
            .and_then(|digits| digits.as_str().parse::<NonZeroU32>().ok());

        Some(ImageRef {
            path,
            width_px,
            raw: line.to_string(),
        })
    }
}
