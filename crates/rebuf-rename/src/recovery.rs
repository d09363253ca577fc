//! Recovery for function definitions written without a return type.
//!
//! tree-sitter reads `NAME(char *p, int n[]) { ... }` at the top of a file as
//! an expression statement holding a call, followed by a free-standing
//! compound statement. No declarator nodes exist for the "parameters", so they
//! are recovered from the raw argument-list text instead.
//!
//! Detection is a heuristic on the shape of the first two top-level
//! constructs. Legitimate code with that shape is treated the same way.

use std::ops::Range;
use std::sync::OnceLock;

use ast_grep_core::Node;
use regex::Regex;

/// A `*` before an identifier, and an identifier before a `[`.
const PARAMETER_PATTERNS: [&str; 2] = [
    r"\*\s*([A-Za-z_][A-Za-z0-9_]*)",
    r"([A-Za-z_][A-Za-z0-9_]*)\s*\[",
];

static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn patterns() -> &'static [Regex] {
    PATTERNS.get_or_init(|| {
        PARAMETER_PATTERNS
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(error) => {
                    tracing::error!(%pattern, %error, "parameter pattern failed to compile");
                    None
                }
            })
            .collect()
    })
}

/// The misparsed pieces of an implicit-return-type function definition.
pub struct ImplicitFunction<'r, D: ast_grep_core::Doc> {
    /// The call's `argument_list`, parentheses included.
    pub arguments: Node<'r, D>,
    pub body: Node<'r, D>,
    /// Top-level constructs after the body.
    pub rest: Vec<Node<'r, D>>,
}

/// A parameter name recovered from argument-list text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParameter {
    pub name: String,
    /// Absolute byte span in the original source.
    pub span: Range<usize>,
}

/// Match the `call-statement, block` shape at the start of a translation unit.
pub fn detect<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>) -> Option<ImplicitFunction<'r, D>> {
    if root.kind().as_ref() != "translation_unit" {
        return None;
    }
    let mut constructs = root
        .children()
        .filter(|c| c.is_named() && c.kind().as_ref() != "comment");

    let first = constructs.next()?;
    let body = constructs.next()?;
    if first.kind().as_ref() != "expression_statement"
        || body.kind().as_ref() != "compound_statement"
    {
        return None;
    }
    let call = first.children().find(Node::is_named)?;
    if call.kind().as_ref() != "call_expression" {
        return None;
    }
    let arguments = call.field("arguments")?;

    Some(ImplicitFunction {
        arguments,
        body,
        rest: constructs.collect(),
    })
}

/// Pointer and array parameter names in an argument list, in source order.
///
/// `arguments` is the text of the list including its parentheses and
/// `offset` its start in the original source.
#[must_use]
pub fn buffer_parameters(arguments: &str, offset: usize) -> Vec<TextParameter> {
    let (content, offset) = match arguments
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
    {
        Some(inner) => (inner, offset + 1),
        None => (arguments, offset),
    };

    let mut found: Vec<TextParameter> = patterns()
        .iter()
        .flat_map(|pattern| pattern.captures_iter(content))
        .filter_map(|captures| captures.get(1))
        .map(|name| TextParameter {
            name: name.as_str().to_string(),
            span: offset + name.start()..offset + name.end(),
        })
        .collect();

    // `*p[]` matches both patterns on the same identifier.
    found.sort_by_key(|param| param.span.start);
    found.dedup_by_key(|param| param.span.start);
    found
}
