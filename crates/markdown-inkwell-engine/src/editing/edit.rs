use std::ops::Range;

use xi_rope::{Delta, Rope, RopeInfo, delta::Builder};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit range {range:?} is outside the document (length {len})")]
    OutOfBounds { range: Range<usize>, len: usize },
    #[error("Edit offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}

/// Replaces a byte range of the document with new text.
///
/// Inserts have an empty range, deletes have empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub text: String,
}

/// Result of applying a [`TextEdit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte range of the inserted text in the new document.
    pub changed: Range<usize>,
    /// Caret position just after the inserted text.
    pub caret: usize,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            text: text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            text: String::new(),
        }
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// Checks the edit against `buffer` and compiles it to a delta.
    pub fn compile(&self, buffer: &Rope) -> Result<Delta<RopeInfo>, EditError> {
        let len = buffer.len();
        if self.range.start > self.range.end || self.range.end > len {
            return Err(EditError::OutOfBounds {
                range: self.range.clone(),
                len,
            });
        }

        for offset in [self.range.start, self.range.end] {
            if !buffer.is_codepoint_boundary(offset) {
                return Err(EditError::NotCharBoundary(offset));
            }
        }

        let mut builder = Builder::new(len);
        builder.replace(self.range.clone(), Rope::from(self.text.as_str()));
        Ok(builder.build())
    }

    /// Applies the edit, returning the new buffer and the patch describing it.
    pub fn apply(&self, buffer: &Rope) -> Result<(Rope, Patch), EditError> {
        let delta = self.compile(buffer)?;
        let start = self.range.start;
        let end = start + self.text.len();
        Ok((
            delta.apply(buffer),
            Patch {
                changed: start..end,
                caret: end,
            },
        ))
    }
}
