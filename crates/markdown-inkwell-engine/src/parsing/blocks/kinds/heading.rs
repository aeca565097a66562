use crate::parsing::blocks::types::HeadingLevel;

/// ATX-style heading syntax, restricted to `# `, `## ` and `### `.
///
/// Exactly one space separates the hashes from the text; deeper or unspaced
/// prefixes are ordinary paragraph text.
pub struct Heading;

impl Heading {
    pub const MARK: char = '#';

    /// Splits a heading line into its level and the text after the prefix.
    pub fn classify(line: &str) -> Option<(HeadingLevel, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARK as u8).count();
        let level = HeadingLevel::new(u8::try_from(hashes).ok()?)?;
        let rest = line[hashes..].strip_prefix(' ')?;
        Some((level, rest))
    }

    pub fn prefix(level: HeadingLevel) -> String {
        let mut prefix = Self::MARK.to_string().repeat(level.get() as usize);
        prefix.push(' ');
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("## Section", 2, "Section")]
    #[case("### Sub", 3, "Sub")]
    #[case("# ", 1, "")]
    #[case("#  two spaces", 1, " two spaces")]
    fn recognizes_levels(#[case] line: &str, #[case] level: u8, #[case] rest: &str) {
        let (got_level, got_rest) = Heading::classify(line).unwrap();
        assert_eq!(got_level.get(), level);
        assert_eq!(got_rest, rest);
    }

    #[rstest]
    #[case("#### Too deep")]
    #[case("#NoSpace")]
    #[case(" # indented")]
    #[case("plain")]
    #[case("")]
    fn rejects_other_lines(#[case] line: &str) {
        assert!(Heading::classify(line).is_none());
    }

    #[test]
    fn prefix_round_trips() {
        let level = HeadingLevel::new(3).unwrap();
        assert_eq!(Heading::prefix(level), "### ");
    }
}
