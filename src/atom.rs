//! Symbol tokens and the sequences the rewriting engine and pen interpreter share.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An indivisible grammar token.
///
/// Production tables routinely mix token kinds: single characters for the
/// classic drawing alphabet, short names or numbers for bookkeeping symbols,
/// whole string literals for compactly written rules. A closed sum type keeps
/// all of them usable as keys in one table, with structural equality and
/// hashing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Atom {
    /// A single character, e.g. `'F'` or `'+'`.
    Char(char),
    /// A short symbolic name, e.g. `"leaf"`.
    Name(String),
    /// An integer token, e.g. the `0`/`1` of the binary-tree grammar.
    Int(i64),
    /// A literal string treated as one opaque token.
    Str(String),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Char(c) => write!(f, "{c}"),
            Atom::Name(s) => write!(f, "{s}"),
            Atom::Int(n) => write!(f, "{n}"),
            Atom::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<char> for Atom {
    fn from(c: char) -> Self {
        Atom::Char(c)
    }
}

impl From<i64> for Atom {
    fn from(n: i64) -> Self {
        Atom::Int(n)
    }
}

/// An ordered sequence of [`Atom`]s.
///
/// This is the currency of the whole crate: the rewriting engine consumes and
/// produces it each generation, and the interpreter walks it symbol by symbol.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolSequence(Vec<Atom>);

impl SymbolSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from a printable string, one [`Atom::Char`] per
    /// character. The inverse of [`Display`](fmt::Display) for sequences made
    /// purely of character atoms, which makes rule strings and test fixtures
    /// compact to write.
    pub fn from_text(text: &str) -> Self {
        Self(text.chars().map(Atom::Char).collect())
    }

    /// The atoms in order.
    pub fn atoms(&self) -> &[Atom] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the atoms in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.0.iter()
    }

    /// Appends a single atom.
    pub fn push(&mut self, atom: Atom) {
        self.0.push(atom);
    }

    /// Splices every atom of `other` onto the end (one level of flattening;
    /// sequences never nest).
    pub fn extend_from(&mut self, other: &SymbolSequence) {
        self.0.extend_from_slice(&other.0);
    }
}

impl fmt::Display for SymbolSequence {
    /// Renders the concatenated textual form of the sequence, mixed atom
    /// kinds included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.0 {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl From<Atom> for SymbolSequence {
    /// A bare atom is a length-1 sequence wherever a sequence is expected.
    fn from(atom: Atom) -> Self {
        Self(vec![atom])
    }
}

impl From<Vec<Atom>> for SymbolSequence {
    fn from(atoms: Vec<Atom>) -> Self {
        Self(atoms)
    }
}

impl From<&str> for SymbolSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl FromIterator<Atom> for SymbolSequence {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SymbolSequence {
    type Item = Atom;
    type IntoIter = std::vec::IntoIter<Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolSequence {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
