//! ast-grep wrapper for the C grammar and C file detection.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_c`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Whether a path looks like a C source or header file.
#[must_use]
pub fn is_c_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "c" | "h"))
}

/// Parse one C translation unit.
///
/// tree-sitter never fails outright: unparseable regions come back as
/// `ERROR` nodes, which the walker recurses into like any other node.
#[must_use]
pub fn parse_c(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::C.ast_grep(source)
}
