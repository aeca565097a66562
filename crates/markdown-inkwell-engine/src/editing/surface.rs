use super::edit::TextEdit;
use crate::render::StyledTree;

/// Where a change notification from the surface came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Raised by the surface rewriting itself with rendered content.
    Programmatic,
    /// A user change the surface saw while it was being rewritten.
    ///
    /// The edit uses source-text offsets, like
    /// [`LiveController::apply_edit`](super::LiveController::apply_edit).
    User(TextEdit),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaretError {
    #[error("Caret offset {offset} is past the end of the document (length {len})")]
    OutOfRange { offset: usize, len: usize },
}

/// The widget a [`LiveController`](super::LiveController) renders into.
///
/// Offsets are byte offsets into the surface's displayed text.
pub trait EditSurface {
    fn caret_offset(&self) -> usize;

    /// Replaces the displayed content with `tree`.
    ///
    /// Every change notification the surface raises while doing so must be
    /// passed to `echo` instead of being reported as an edit.
    fn replace_content(&mut self, tree: &StyledTree, echo: &mut dyn FnMut(ChangeOrigin));

    fn set_caret(&mut self, offset: usize) -> Result<(), CaretError>;

    /// Offset of the end of the displayed content.
    fn end_offset(&self) -> usize;
}
