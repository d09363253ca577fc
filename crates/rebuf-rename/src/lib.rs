//! # rebuf-rename
//!
//! Scope-aware renaming of C pointer and array declarations.
//!
//! Every local variable or parameter whose declarator has pointer or array
//! shape is renamed to a sequential canonical name (`buffer1`, `buffer2`, ...)
//! at its declaration and at every reference that resolves to it. Everything
//! else in the file, including whitespace and comments, is reproduced byte
//! for byte.
//!
//! The pipeline is: parse with ast-grep's C grammar, walk the tree with a
//! scope stack while scheduling edits, then splice the edits into the
//! original text from the end backwards.
//!
//! ```
//! let rewrite = rebuf_rename::rename_buffers("void g(int arr[10]) { arr[0] = 1; }")?;
//! assert_eq!(rewrite.output, "void g(int buffer1[10]) { buffer1[0] = 1; }");
//! # Ok::<(), rebuf_rename::RenameError>(())
//! ```

pub mod declarator;
pub mod edits;
mod error;
pub mod parser;
pub mod recovery;
pub mod scope;
pub mod span;
pub mod walker;

#[cfg(test)]
mod tests;

pub use error::RenameError;
pub use parser::{is_c_source, parse_c};
pub use scope::DEFAULT_PREFIX;
pub use walker::RenamedBinding;

use scope::BufferNamer;
use walker::Renamer;

/// Knobs for a rewrite session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Prefix for synthesized names; numbering always starts at 1.
    pub prefix: String,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Result of rewriting one translation unit.
///
/// `O` is `String` for text input and `Vec<u8>` for raw bytes.
#[derive(Debug, Clone)]
pub struct Rewrite<O = String> {
    pub output: O,
    /// Buffer declarations in the order their names were assigned.
    pub bindings: Vec<RenamedBinding>,
    /// Declaration plus reference occurrences that were rewritten.
    pub edit_count: usize,
}

/// Rewrite `source` with the default `buffer` prefix.
///
/// # Errors
/// Returns `RenameError` only if the collected edits are inconsistent, which
/// the walker never produces for parser output.
pub fn rename_buffers(source: &str) -> Result<Rewrite, RenameError> {
    rename_buffers_with(source, &RenameOptions::default())
}

/// Rewrite `source` using `options`.
///
/// # Errors
/// See [`rename_buffers`].
pub fn rename_buffers_with(source: &str, options: &RenameOptions) -> Result<Rewrite, RenameError> {
    let (edits, bindings) = collect(source, options);
    let edit_count = edits.len();
    let output = edits.apply(source)?;
    tracing::debug!(buffers = bindings.len(), edits = edit_count, "rewrite complete");

    Ok(Rewrite {
        output,
        bindings,
        edit_count,
    })
}

/// Rewrite raw bytes that need not be UTF-8.
///
/// The tree is built from a copy where every byte of an invalid UTF-8
/// sequence becomes `?`. The copy has the same length, so its spans index
/// `source` directly and the edits are spliced into the original bytes.
/// Identifiers are ASCII, so no edit ever touches a replaced byte.
///
/// # Errors
/// See [`rename_buffers`].
pub fn rewrite_bytes(
    source: &[u8],
    options: &RenameOptions,
) -> Result<Rewrite<Vec<u8>>, RenameError> {
    let text = sanitize(source);
    let (edits, bindings) = collect(&text, options);
    let edit_count = edits.len();
    let output = edits.apply_bytes(source)?;
    tracing::debug!(buffers = bindings.len(), edits = edit_count, "rewrite complete");

    Ok(Rewrite {
        output,
        bindings,
        edit_count,
    })
}

/// Byte-oriented entry point returning only the rewritten bytes.
///
/// # Errors
/// See [`rename_buffers`].
pub fn rename_bytes(source: &[u8], options: &RenameOptions) -> Result<Vec<u8>, RenameError> {
    rewrite_bytes(source, options).map(|rewrite| rewrite.output)
}

fn collect(source: &str, options: &RenameOptions) -> (edits::EditSet, Vec<RenamedBinding>) {
    let tree = parse_c(source);
    let mut renamer = Renamer::new(BufferNamer::new(options.prefix.as_str()));
    renamer.run(&tree.root());
    renamer.finish()
}

/// Same-length UTF-8 copy of `source` with invalid bytes replaced by `?`.
fn sanitize(source: &[u8]) -> String {
    let mut text = String::with_capacity(source.len());
    for chunk in source.utf8_chunks() {
        text.push_str(chunk.valid());
        text.extend(std::iter::repeat_n('?', chunk.invalid().len()));
    }
    text
}
