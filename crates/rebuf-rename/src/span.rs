//! Portable node identity keyed by kind and byte span.

use std::ops::Range;

use ast_grep_core::Node;

/// Identity of a syntax node that does not depend on parser internals.
///
/// Two nodes with the same kind and byte span are the same node for the
/// purposes of declaration-site bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub kind: String,
    pub span: Range<usize>,
}

impl NodeKey {
    pub fn of<D: ast_grep_core::Doc>(node: &Node<D>) -> Self {
        Self {
            kind: node.kind().into_owned(),
            span: node.range(),
        }
    }
}
