use crate::parsing::inline::{Span, tokenize};

use super::{
    kinds::{Heading, ImageSyntax, ListSyntax},
    types::{HeadingLevel, ImageRef, ListItem},
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of segmenting: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only line.
    Blank,
    Image(ImageRef),
    Heading {
        level: HeadingLevel,
        spans: Vec<Span>,
    },
    ListItem(ListItem),
    Text(Vec<Span>),
}

/// Classifies individual lines for the block segmenting phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line (without its terminator) into a [`LineClass`].
    ///
    /// Rules apply in order: image line, heading, list item, text. Blank
    /// lines never match any of the others.
    pub fn classify(&self, line: &str) -> LineClass {
        if line.trim().is_empty() {
            return LineClass::Blank;
        }

        if let Some(image) = ImageSyntax::classify(line) {
            return LineClass::Image(image);
        }

        if let Some((level, rest)) = Heading::classify(line) {
            return LineClass::Heading {
                level,
                spans: tokenize(rest),
            };
        }

        if let Some(list) = ListSyntax::classify(line) {
            let (prefix, rest) = line.split_at(list.prefix_len);
            return LineClass::ListItem(ListItem {
                indent_level: list.indent_level,
                marker: list.marker,
                prefix: prefix.to_string(),
                spans: tokenize(rest),
            });
        }

        LineClass::Text(tokenize(line))
    }
}
