//! The data model of propositional formulas in conjunctive normal form, as consumed by a satisfiability solver.
//!
//! The library provides three things:
//! - [Atoms](structures::atom), canonicalised by name through an [atom registry](db::atom::AtomRegistry).
//! - [Literals](structures::literal), an atom paired with a negation flag.
//! - [Clauses](structures::clause), a set of literals interpreted as their disjunction, with a cached status relative to some (often partial) [valuation](structures::valuation).
//!
//! No solve procedure is included.
//! Instead, a solver owns a valuation, revises it, and asks each clause to [update](structures::clause::Clause::update) its status.
//!
//! # Examples
//!
//! ```rust
//! # use otter_clauses::db::atom::AtomRegistry;
//! # use otter_clauses::structures::clause::Clause;
//! # use otter_clauses::structures::literal::{CLiteral, Literal};
//! # use otter_clauses::structures::valuation::CValuation;
//! let registry = AtomRegistry::new();
//! let p = registry.create_or_get("p");
//! let q = registry.create_or_get("q");
//!
//! let mut clause = Clause::new([CLiteral::new(p.clone(), true), CLiteral::new(q.clone(), false)]);
//! let mut valuation = CValuation::default();
//!
//! valuation.insert(p.clone(), true);
//! assert_eq!(clause.unknown_literals(&valuation), vec![&CLiteral::new(q.clone(), false)]);
//!
//! clause.update(&valuation);
//! assert!(!clause.is_satisfied());
//!
//! valuation.insert(q, true);
//! clause.update(&valuation);
//! assert!(clause.is_satisfied());
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made on the targets listed in [misc::log].
//! For example, with [env_logger](https://docs.rs/env_logger/latest/env_logger/) newly interned atoms can be seen with `RUST_LOG=atom_registry=trace …`.

pub mod config;
pub mod db;
pub mod misc;
pub mod structures;
pub mod types;
