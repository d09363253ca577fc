//! Lexical scopes and the session-wide buffer counter.

/// Default prefix for synthesized names.
pub const DEFAULT_PREFIX: &str = "buffer";

/// One lexical scope: spellings bound in it, in declaration order.
///
/// A binding of `None` is a plain declaration. It is kept so that it shadows
/// any outer buffer with the same spelling.
#[derive(Debug, Default)]
pub struct Scope {
    bindings: Vec<(String, Option<String>)>,
}

impl Scope {
    fn get(&self, name: &str) -> Option<&Option<String>> {
        // Last binding wins when a scope redeclares a name.
        self.bindings
            .iter()
            .rev()
            .find(|(spelling, _)| spelling == name)
            .map(|(_, renamed)| renamed)
    }
}

/// Stack of active scopes. Index 0 is file scope and is never popped.
#[derive(Debug)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }
}

impl ScopeStack {
    pub fn push(&mut self) {
        self.scopes.push(Scope::default());
    }

    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Bind `name` in the innermost scope.
    pub fn bind(&mut self, name: &str, renamed: Option<String>) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.bindings.push((name.to_string(), renamed));
        }
    }

    /// Resolve `name` innermost to outermost.
    ///
    /// Returns the buffer name when the nearest binding is a buffer, `None`
    /// when it is plain or the name is unbound.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .and_then(Option::as_deref)
    }
}

/// Monotonic counter plus naming policy for one rewrite session.
///
/// Never reset per scope; every call hands out the next number.
#[derive(Debug)]
pub struct BufferNamer {
    prefix: String,
    issued: usize,
}

impl BufferNamer {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            issued: 0,
        }
    }

    pub fn next_name(&mut self) -> String {
        self.issued += 1;
        format!("{}{}", self.prefix, self.issued)
    }
}

impl Default for BufferNamer {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}
