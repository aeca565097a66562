/// Byte cursor over one line.
///
/// All delimiters are ASCII, so every position a construct starts or ends at
/// is also a char boundary of the scanned line.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    line: &'a str,
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line, at: 0 }
    }

    pub fn pos(&self) -> usize {
        self.at
    }

    pub fn eof(&self) -> bool {
        self.at >= self.line.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Byte `ahead` positions past the cursor.
    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.line.as_bytes().get(self.at + ahead).copied()
    }

    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Offset from the cursor of the first `pat` found at least `skip` bytes ahead.
    pub fn find_from(&self, skip: usize, pat: &[u8]) -> Option<usize> {
        let haystack = self.rest().get(skip..)?;
        if pat.is_empty() {
            return None;
        }
        haystack
            .windows(pat.len())
            .position(|w| w == pat)
            .map(|found| found + skip)
    }

    /// Text between two offsets from the cursor.
    pub fn slice_ahead(&self, from: usize, to: usize) -> &'a str {
        &self.line[self.at + from..self.at + to]
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.at += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.at = (self.at + n).min(self.line.len());
    }

    fn rest(&self) -> &'a [u8] {
        self.line.as_bytes().get(self.at..).unwrap_or_default()
    }
}
