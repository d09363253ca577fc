//! Error types for rebuf-rename.

use std::ops::Range;

/// Errors that can occur while rewriting a translation unit.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("Overlapping edits at bytes {first:?} and {second:?}")]
    OverlappingEdits {
        first: Range<usize>,
        second: Range<usize>,
    },

    #[error("Edit span {span:?} is outside the {len}-byte source")]
    SpanOutOfBounds { span: Range<usize>, len: usize },
}
