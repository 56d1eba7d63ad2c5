//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! A clause is a set of literals, so the order in which literals are given is of no significance and duplicate literals are dropped.
//!
//! ```rust
//! # use otter_clauses::db::atom::AtomRegistry;
//! # use otter_clauses::structures::clause::Clause;
//! # use otter_clauses::structures::literal::{CLiteral, Literal};
//! let registry = AtomRegistry::new();
//! let p = CLiteral::new(registry.create_or_get("p"), false);
//! let q = CLiteral::new(registry.create_or_get("q"), true);
//!
//! let clause = Clause::new([p.clone(), p.clone(), q.clone()]);
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause, Clause::new([q, p]));
//! ```
//!
//! In addition to literals, a clause caches whether it is satisfied.
//! The cache is revised only by a call to [update](Clause::update), and so reflects the valuation given to the most recent update, regardless of any later revision to that valuation.
//! A clause which has not been updated is not satisfied.
//!
//! - The empty clause is never satisfied.
//! - An atom with no value never satisfies a literal.
//!   In detail, the value of an atom with no value is taken to be the negation flag of the literal being examined, which always differs from the polarity of the literal.
//!
//! # Hashing
//!
//! As the order of iteration through the literals of a clause is arbitrary, the hash of a clause is the (wrapping) sum of the hashes of its literals.
//! The sum is computed once, on construction, as the literals of a clause are fixed from then on.
//!
//! # Concurrency
//!
//! Updates to a clause require a mutable borrow, and so a clause shared between threads must be wrapped in some lock by the caller.

use std::{
    collections::HashSet,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher},
};

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// A set of literals, and whether the set was satisfied on the valuation given to the most recent update.
#[derive(Clone, Debug)]
pub struct Clause {
    literals: HashSet<CLiteral>,

    /// The order-independent sum of the hashes of each literal.
    fingerprint: u64,

    satisfied: bool,
}

impl Clause {
    /// A clause containing each given literal, once.
    pub fn new(literals: impl IntoIterator<Item = CLiteral>) -> Self {
        let literals: HashSet<CLiteral> = literals.into_iter().collect();

        // A fixed-key hasher, so equal literals hash equally across clauses.
        let hasher = BuildHasherDefault::<DefaultHasher>::default();
        let fingerprint = literals
            .iter()
            .fold(0_u64, |sum, literal| sum.wrapping_add(hasher.hash_one(literal)));

        Clause {
            literals,
            fingerprint,
            satisfied: false,
        }
    }

    /// The literals of the clause whose atom has no value on the given valuation, in no particular order.
    ///
    /// The clause is unchanged, and in particular the satisfaction status of the clause is not revised.
    pub fn unknown_literals(&self, valuation: &impl Valuation) -> Vec<&CLiteral> {
        self.literals
            .iter()
            .filter(|literal| !valuation.has_value(literal.atom()))
            .collect()
    }

    /// Revises whether the clause is satisfied, relative to the given valuation.
    ///
    /// The clause is satisfied if and only if some literal has an atom valued with the polarity of the literal.
    pub fn update(&mut self, valuation: &impl Valuation) {
        self.satisfied = self.literals.iter().any(|literal| {
            let value = valuation
                .value_of(literal.atom())
                .unwrap_or(literal.is_negated());
            value == literal.polarity()
        });

        log::trace!(target: targets::CLAUSE, "Updated clause of size {}, satisfied: {}", self.size(), self.satisfied);
    }

    /// Whether the clause was satisfied on the valuation given to the most recent update.
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    /// The number of (distinct) literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the clause contains the given literal.
    pub fn contains(&self, literal: &CLiteral) -> bool {
        self.literals.contains(literal)
    }

    /// An iterator over all literals in the clause, order is not guaranteed.
    pub fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.literals.iter()
    }

    /// An iterator over the atoms of all literals in the clause, order is not guaranteed.
    ///
    /// An atom appears twice if the clause contains both a literal and its negation.
    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.literals.iter().map(|literal| literal.atom())
    }
}

impl FromIterator<CLiteral> for Clause {
    fn from_iter<I: IntoIterator<Item = CLiteral>>(iter: I) -> Self {
        Clause::new(iter)
    }
}

impl From<Vec<CLiteral>> for Clause {
    fn from(literals: Vec<CLiteral>) -> Self {
        Clause::new(literals)
    }
}

// Satisfaction is not part of identity.
impl PartialEq for Clause {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint && self.literals == other.literals
    }
}

impl Eq for Clause {}

impl std::hash::Hash for Clause {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint);
    }
}
