//! Scheduled byte-range replacements and their application.

use std::ops::Range;

use crate::error::RenameError;

/// Replace the bytes in `span` of the original source with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Range<usize>,
    pub text: String,
}

/// Edits collected during a walk, applied in one pass at the end.
#[derive(Debug, Default)]
pub struct EditSet {
    edits: Vec<Edit>,
}

impl EditSet {
    pub fn push(&mut self, span: Range<usize>, text: impl Into<String>) {
        self.edits.push(Edit {
            span,
            text: text.into(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Splice every edit into `source`.
    ///
    /// Edits are applied from the highest start offset down, so the recorded
    /// offsets of the ones not yet applied stay valid.
    ///
    /// # Errors
    /// Returns `RenameError::OverlappingEdits` if two spans intersect and
    /// `RenameError::SpanOutOfBounds` if a span does not fit `source`. Nothing
    /// is written in either case.
    pub fn apply(self, source: &str) -> Result<String, RenameError> {
        let edits = self.validated(source.len(), |offset| source.is_char_boundary(offset))?;
        let mut output = source.to_string();
        for edit in &edits {
            output.replace_range(edit.span.clone(), &edit.text);
        }
        Ok(output)
    }

    /// Splice every edit into raw bytes.
    ///
    /// Bytes outside the edited spans are copied unchanged, whatever their
    /// encoding.
    ///
    /// # Errors
    /// Same as [`EditSet::apply`], without the char-boundary check.
    pub fn apply_bytes(self, source: &[u8]) -> Result<Vec<u8>, RenameError> {
        let edits = self.validated(source.len(), |_| true)?;
        let mut output = source.to_vec();
        for edit in edits {
            output.splice(edit.span, edit.text.into_bytes());
        }
        Ok(output)
    }

    /// Sort descending by start, then reject overlaps and spans that do not
    /// fit a source of `len` bytes.
    fn validated(
        mut self,
        len: usize,
        is_boundary: impl Fn(usize) -> bool,
    ) -> Result<Vec<Edit>, RenameError> {
        self.edits
            .sort_by(|a, b| b.span.start.cmp(&a.span.start).then(b.span.end.cmp(&a.span.end)));

        for pair in self.edits.windows(2) {
            let (later, earlier) = (&pair[0], &pair[1]);
            if earlier.span.end > later.span.start {
                return Err(RenameError::OverlappingEdits {
                    first: earlier.span.clone(),
                    second: later.span.clone(),
                });
            }
        }
        if let Some(edit) = self.edits.iter().find(|e| {
            e.span.start > e.span.end
                || e.span.end > len
                || !is_boundary(e.span.start)
                || !is_boundary(e.span.end)
        }) {
            return Err(RenameError::SpanOutOfBounds {
                span: edit.span.clone(),
                len,
            });
        }
        Ok(self.edits)
    }
}
