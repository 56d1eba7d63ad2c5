//! Key structures: atoms, literals, clauses, and valuations.
//!
//! # Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! Formulas do not have an implementation here, as a solver is free to store clauses however suits it.
//!
//! # (Boolean) values
//!
//! A value is one of [true] or [false].
//! Some atoms may have no value on a valuation, in which case the valuation is 'partial'.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
