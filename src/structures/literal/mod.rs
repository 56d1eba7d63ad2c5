//! Literals are atoms paired with a (boolean) negation flag.
//!
//! Or, rather, anything which has methods for returning an atom and whether the atom is negated (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is the [ABLiteral] structure, made of an atom (the 'a') and a boolean (the 'b').
//!
//! ```rust
//! # use otter_clauses::db::atom::AtomRegistry;
//! # use otter_clauses::structures::literal::{CLiteral, Literal};
//! let registry = AtomRegistry::new();
//! let p = registry.create_or_get("p");
//! let literal = CLiteral::new(p.clone(), true);
//!
//! assert!(literal.is_negated());
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), &p);
//!
//! assert_eq!(literal.negate(), CLiteral::new(p, false));
//! assert_eq!(literal.to_string(), "-p");
//! ```
//!
//! Literals are not interned.
//! Two literals built from the same atom with the same flag are distinct values, though equal.
//!
//! Implementation of the literal trait requires [Hash](std::hash::Hash) and [Eq], as clauses are sets of literals.

mod ab_literal;
pub use ab_literal::ABLiteral;

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and whether the atom is negated, etc.
pub trait Literal: std::hash::Hash + Eq + Clone {
    /// A fresh literal, specified by pairing an atom with a negation flag.
    fn new(atom: Atom, negated: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> &Atom;

    /// Whether the literal is the negation of its atom.
    fn is_negated(&self) -> bool;

    /// The value the atom of the literal must take for the literal to be true.
    fn polarity(&self) -> bool {
        !self.is_negated()
    }
}

/// The canonical implementation of a literal.
pub type CLiteral = ABLiteral;
