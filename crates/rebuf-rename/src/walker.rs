//! Scope-aware tree walk that schedules buffer renames.
//!
//! Every identifier is either the declaration occurrence of a binding (seen
//! once, when its declarator is classified) or a reference occurrence,
//! resolved through the scope stack at the point it is visited.

use std::collections::HashSet;
use std::ops::Range;

use ast_grep_core::Node;

use crate::declarator::{self, Shape};
use crate::edits::EditSet;
use crate::recovery::{self, ImplicitFunction};
use crate::scope::{BufferNamer, ScopeStack};
use crate::span::NodeKey;

/// A declaration that received a buffer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedBinding {
    pub original: String,
    pub renamed: String,
    /// Span of the declaration occurrence in the original source.
    pub span: Range<usize>,
}

/// State for one translation-unit rewrite.
pub struct Renamer {
    scopes: ScopeStack,
    namer: BufferNamer,
    declared: HashSet<NodeKey>,
    edits: EditSet,
    bindings: Vec<RenamedBinding>,
}

impl Renamer {
    #[must_use]
    pub fn new(namer: BufferNamer) -> Self {
        Self {
            scopes: ScopeStack::default(),
            namer,
            declared: HashSet::new(),
            edits: EditSet::default(),
            bindings: Vec::new(),
        }
    }

    /// Walk a whole translation unit, taking the recovery path if its first
    /// constructs have the implicit-return-type shape.
    pub fn run<D: ast_grep_core::Doc>(&mut self, root: &Node<D>) {
        match recovery::detect(root) {
            Some(function) => self.implicit_function(&function),
            None => self.walk(root),
        }
    }

    #[must_use]
    pub fn finish(self) -> (EditSet, Vec<RenamedBinding>) {
        (self.edits, self.bindings)
    }

    fn walk<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        match node.kind().as_ref() {
            "function_definition" => self.function_definition(node),
            "compound_statement" | "for_statement" | "function_declarator" => {
                // A function_declarator reached here is a prototype or a
                // function-pointer type; its parameters get their own scope.
                self.scopes.push();
                self.walk_children(node);
                self.scopes.pop();
            }
            "declaration" => self.declaration(node),
            "parameter_declaration" => {
                if let Some(decl) = node.field("declarator") {
                    self.declare(&decl);
                }
            }
            "identifier" => self.reference(node),
            kind => {
                if kind == "ERROR" {
                    tracing::debug!(span = ?node.range(), "walking unparsed region generically");
                }
                self.walk_children(node);
            }
        }
    }

    fn walk_children<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        for child in node.children() {
            self.walk(&child);
        }
    }

    fn function_definition<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        self.scopes.push();
        if let Some(params) = node.field("declarator").and_then(|d| parameter_list(&d)) {
            for param in params.children() {
                if param.kind().as_ref() == "parameter_declaration" {
                    self.walk(&param);
                }
            }
        }
        if let Some(body) = node.field("body") {
            self.walk(&body);
        }
        self.scopes.pop();
    }

    fn declaration<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        for child in node.children().filter(Node::is_named) {
            match child.kind().as_ref() {
                "init_declarator" => {
                    if let Some(decl) = child.field("declarator") {
                        self.declare(&decl);
                    }
                    // Point of declaration precedes the initializer.
                    if let Some(value) = child.field("value") {
                        self.walk(&value);
                    }
                }
                "identifier"
                | "pointer_declarator"
                | "array_declarator"
                | "parenthesized_declarator"
                | "attributed_declarator"
                | "function_declarator" => self.declare(&child),
                _ => self.walk(&child),
            }
        }
    }

    /// Bind the name a declarator introduces in the innermost scope, then walk
    /// the rest of the declarator for references in size expressions and
    /// nested parameter lists.
    ///
    /// Function prototypes bind nothing: `char *name(char *s);` is walked only
    /// so its parameters get a prototype scope.
    fn declare<D: ast_grep_core::Doc>(&mut self, decl: &Node<D>) {
        if declarator::declares_function(decl) {
            self.walk(decl);
            return;
        }
        let Some(classified) = declarator::classify(decl) else {
            self.walk(decl);
            return;
        };
        let ident = classified.ident;
        let name = ident.text();
        match classified.shape {
            Shape::Buffer => self.bind_buffer(&name, ident.range()),
            Shape::Plain => self.scopes.bind(&name, None),
        }
        self.declared.insert(NodeKey::of(&ident));
        self.walk(decl);
    }

    /// Assign the next buffer name to `name`, bind it in the innermost scope,
    /// and rewrite the declaration occurrence at `span`.
    fn bind_buffer(&mut self, name: &str, span: Range<usize>) {
        let renamed = self.namer.next_name();
        tracing::trace!(%name, %renamed, ?span, depth = self.scopes.depth(), "bound buffer");
        self.scopes.bind(name, Some(renamed.clone()));
        self.edits.push(span.clone(), renamed.clone());
        self.bindings.push(RenamedBinding {
            original: name.to_string(),
            renamed,
            span,
        });
    }

    fn reference<D: ast_grep_core::Doc>(&mut self, node: &Node<D>) {
        if self.declared.contains(&NodeKey::of(node)) {
            return;
        }
        if let Some(renamed) = self.scopes.resolve(&node.text()) {
            let renamed = renamed.to_string();
            self.edits.push(node.range(), renamed);
        }
    }

    /// Seed a parameter scope from the argument-list text, walk the block as
    /// the function body, then carry on with the rest of the file.
    ///
    /// The misparsed call itself is never walked: its argument identifiers
    /// already received edits from the text scan.
    fn implicit_function<D: ast_grep_core::Doc>(&mut self, function: &ImplicitFunction<D>) {
        let arguments = function.arguments.text();
        tracing::debug!(
            arguments = %arguments,
            "top-level call followed by a block; treating it as a definition without a return type"
        );

        self.scopes.push();
        for param in recovery::buffer_parameters(&arguments, function.arguments.range().start) {
            self.bind_buffer(&param.name, param.span);
        }
        self.walk(&function.body);
        self.scopes.pop();

        for node in &function.rest {
            self.walk(node);
        }
    }
}

/// The `parameter_list` of a function definition's declarator.
///
/// The function declarator may sit under pointer or parenthesized wrappers,
/// as in `char *name(char *s)`.
fn parameter_list<'r, D: ast_grep_core::Doc>(decl: &Node<'r, D>) -> Option<Node<'r, D>> {
    if decl.kind().as_ref() == "function_declarator" {
        return decl.field("parameters");
    }
    decl.field("declarator")
        .and_then(|inner| parameter_list(&inner))
}
