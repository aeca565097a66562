use crate::parsing::blocks::types::ListMarker;

/// Facts about a list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine {
    pub indent_level: usize,
    pub marker: ListMarker,
    /// Byte length of leading whitespace, marker and separator.
    pub prefix_len: usize,
}

/// List item syntax: `- `, `* ` or `<digits>. ` after optional indentation.
pub struct ListSyntax;

impl ListSyntax {
    pub const DASH: u8 = b'-';
    pub const ASTERISK: u8 = b'*';
    pub const ORDINAL_DOT: u8 = b'.';
    /// Spaces that make up one indent unit.
    pub const INDENT_SPACES: &'static str = "    ";

    pub fn classify(line: &str) -> Option<ListLine> {
        let b = line.as_bytes();
        let ws = b.iter().take_while(|&&c| Self::is_blank(c)).count();

        let (marker, marker_len) = match b.get(ws)? {
            &Self::DASH => (ListMarker::Dash, 1),
            &Self::ASTERISK => (ListMarker::Asterisk, 1),
            c if c.is_ascii_digit() => {
                let digits = b[ws..].iter().take_while(|c| c.is_ascii_digit()).count();
                if b.get(ws + digits) != Some(&Self::ORDINAL_DOT) {
                    return None;
                }
                let number = line[ws..ws + digits].to_string();
                (ListMarker::Numbered(number), digits + 1)
            }
            _ => return None,
        };

        let after_marker = ws + marker_len;
        let gap = b[after_marker..]
            .iter()
            .take_while(|&&c| Self::is_blank(c))
            .count();
        if gap == 0 {
            return None;
        }

        Some(ListLine {
            indent_level: Self::indent_level(&line[..ws]),
            marker,
            prefix_len: after_marker + gap,
        })
    }

    /// Counts indent units: each tab is one unit and so is each full run of
    /// four spaces. Counting stops at the first partial run of spaces.
    pub fn indent_level(leading: &str) -> usize {
        let mut level = 0;
        let mut rest = leading;
        loop {
            if let Some(r) = rest.strip_prefix('\t') {
                rest = r;
            } else if let Some(r) = rest.strip_prefix(Self::INDENT_SPACES) {
                rest = r;
            } else {
                return level;
            }
            level += 1;
        }
    }

    fn is_blank(c: u8) -> bool {
        c == b' ' || c == b'\t'
    }
}
