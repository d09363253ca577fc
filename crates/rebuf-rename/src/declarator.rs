//! Declarator classification.
//!
//! Only the syntactic shape of a declarator is consulted. A typedef'd pointer
//! type (`typedef char *str; str s;`) is a plain declarator here.

use ast_grep_core::Node;

/// Storage shape of a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Pointer, array, or any nesting of the two.
    Buffer,
    Plain,
}

/// A classified declarator: the identifier it binds and its shape.
pub struct Declarator<'r, D: ast_grep_core::Doc> {
    pub ident: Node<'r, D>,
    pub shape: Shape,
}

/// First `identifier` in depth-first order, including `node` itself.
///
/// A declarator binds at most one identifier, and it always precedes any
/// identifiers in array size expressions.
pub fn find_identifier<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    if node.kind().as_ref() == "identifier" {
        return Some(node.clone());
    }
    node.children().find_map(|child| find_identifier(&child))
}

/// Whether any node in the subtree is a pointer or array declarator.
///
/// Searching the whole subtree catches `(*p)[4]`, `*argv[]` and
/// parenthesized wrappers alike.
pub fn has_pointer_or_array<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    matches!(
        node.kind().as_ref(),
        "pointer_declarator" | "array_declarator"
    ) || node.children().any(|child| has_pointer_or_array(&child))
}

/// Whether the declarator names a function rather than an object.
///
/// `char *f(int)` declares a function returning a pointer, while
/// `char (*f)(int)` declares a pointer to a function. What decides it is
/// whether the function declarator wraps the identifier directly.
pub fn declares_function<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    match node.kind().as_ref() {
        "function_declarator" => node
            .field("declarator")
            .is_some_and(|inner| names_directly(&inner)),
        "pointer_declarator" | "array_declarator" => node
            .field("declarator")
            .is_some_and(|inner| declares_function(&inner)),
        "parenthesized_declarator" | "attributed_declarator" => node
            .children()
            .filter(Node::is_named)
            .any(|inner| declares_function(&inner)),
        _ => false,
    }
}

fn names_directly<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    match node.kind().as_ref() {
        "identifier" => true,
        "parenthesized_declarator" | "attributed_declarator" => node
            .children()
            .filter(Node::is_named)
            .any(|inner| names_directly(&inner)),
        _ => false,
    }
}

/// Classify a declarator. `None` for abstract declarators with no name.
pub fn classify<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Declarator<'r, D>> {
    let ident = find_identifier(node)?;
    let shape = if has_pointer_or_array(node) {
        Shape::Buffer
    } else {
        Shape::Plain
    };
    Some(Declarator { ident, shape })
}
