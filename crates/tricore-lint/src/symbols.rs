//! Symbol bookkeeping for one document.
//!
//! Labels and symbol directives add definitions, `.extern`-style directives
//! add external declarations, and instruction operands add pending
//! references. References are resolved once the whole document has been
//! scanned, so forward references are fine.

use std::collections::HashSet;

/// A symbol reference that was unknown when it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReference {
    /// Zero-based line of the referencing instruction.
    pub line: usize,
    /// The referenced name, as written.
    pub name: String,
}

/// Defined, external and referenced symbols of a document.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    defined: HashSet<String>,
    external: HashSet<String>,
    pending: Vec<PendingReference>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a label or symbol definition.
    pub fn define(&mut self, name: &str) {
        self.defined.insert(name.to_string());
    }

    /// Records a symbol declared as provided elsewhere.
    pub fn declare_external(&mut self, name: &str) {
        self.external.insert(name.to_string());
    }

    /// Returns true if `name` is defined or declared external.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.defined.contains(name) || self.external.contains(name)
    }

    /// Records a reference from `line`, unless the name is already known.
    pub fn reference(&mut self, line: usize, name: &str) {
        if !self.is_known(name) {
            self.pending.push(PendingReference {
                line,
                name: name.to_string(),
            });
        }
    }

    /// Number of defined symbols.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.defined.len()
    }

    /// Pending references still unknown, in the order they were recorded.
    pub fn unresolved(&self) -> impl Iterator<Item = &PendingReference> {
        self.pending
            .iter()
            .filter(|reference| !self.is_known(&reference.name))
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolTable;

    #[test]
    fn forward_references_resolve_after_definition() {
        let mut symbols = SymbolTable::new();
        symbols.reference(0, "later");
        symbols.define("later");
        assert_eq!(symbols.unresolved().count(), 0);
    }

    #[test]
    fn external_declarations_satisfy_references() {
        let mut symbols = SymbolTable::new();
        symbols.declare_external("printf");
        symbols.reference(3, "printf");
        assert!(symbols.is_known("printf"));
        assert_eq!(symbols.unresolved().count(), 0);
        assert_eq!(symbols.defined_count(), 0);
    }

    #[test]
    fn unresolved_keeps_reference_order_and_lines() {
        let mut symbols = SymbolTable::new();
        symbols.reference(5, "b");
        symbols.reference(2, "a");
        symbols.reference(7, "b");
        let unresolved: Vec<_> = symbols
            .unresolved()
            .map(|reference| (reference.line, reference.name.as_str()))
            .collect();
        assert_eq!(unresolved, [(5, "b"), (2, "a"), (7, "b")]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut symbols = SymbolTable::new();
        symbols.define("Main");
        symbols.reference(0, "main");
        assert_eq!(symbols.unresolved().count(), 1);
    }
}
