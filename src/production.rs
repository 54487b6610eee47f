//! The production-rewriting engine: advances a symbol sequence through
//! generations of substitution.
//!
//! Build a [`ProductionTable`] with [`rule`](ProductionTable::rule), then call
//! [`step`](ProductionTable::step) for one generation or
//! [`nth_step`](ProductionTable::nth_step) for many. Atoms without a rule are
//! terminal: they map to themselves.

use crate::atom::{Atom, SymbolSequence};
use std::collections::HashMap;

/// A mapping from [`Atom`] to its replacement [`SymbolSequence`].
///
/// Keys are unique; a lookup miss means the atom is terminal for the
/// generation being computed. The table is pure data, built once by insertion
/// and then only read.
#[derive(Clone, Debug, Default)]
pub struct ProductionTable {
    rules: HashMap<Atom, SymbolSequence>,
}

impl ProductionTable {
    /// Creates an empty table (every atom is terminal).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule in one step (builder pattern). The replacement accepts a
    /// bare [`Atom`], a string of character atoms, or a full sequence.
    ///
    /// ```
    /// use lsys_pen::{Atom, ProductionTable};
    ///
    /// let algae = ProductionTable::new()
    ///     .rule(Atom::Char('A'), "AB")
    ///     .rule(Atom::Char('B'), "A");
    /// ```
    pub fn rule(mut self, key: Atom, replacement: impl Into<SymbolSequence>) -> Self {
        self.insert(key, replacement);
        self
    }

    /// Adds or replaces a rule.
    pub fn insert(&mut self, key: Atom, replacement: impl Into<SymbolSequence>) {
        self.rules.insert(key, replacement.into());
    }

    /// The replacement registered for `atom`, if any.
    pub fn lookup(&self, atom: &Atom) -> Option<&SymbolSequence> {
        self.rules.get(atom)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites `sequence` by one generation.
    ///
    /// Each atom is replaced by its rule's right-hand side, spliced in place
    /// (one level of flattening, never nested); atoms without a rule carry
    /// over unchanged. Output order exactly matches in-place substitution of
    /// the input order. An empty input yields an empty output.
    pub fn step(&self, sequence: &SymbolSequence) -> SymbolSequence {
        let mut out = SymbolSequence::new();
        for atom in sequence {
            match self.rules.get(atom) {
                Some(replacement) => out.extend_from(replacement),
                None => out.push(atom.clone()),
            }
        }
        out
    }

    /// Applies [`step`](Self::step) `n` times to `initial`.
    ///
    /// `n = 0` returns the initial state unchanged, normalized to a sequence.
    /// Iterative on purpose: generation counts in the thousands must not be
    /// limited by call-stack depth. Sequence length typically grows
    /// exponentially with `n`; the engine imposes no cap, so the caller picks
    /// an `n` that keeps the result memory-bounded.
    pub fn nth_step(&self, initial: impl Into<SymbolSequence>, n: usize) -> SymbolSequence {
        let mut current = initial.into();
        for _ in 0..n {
            current = self.step(&current);
        }
        current
    }
}
