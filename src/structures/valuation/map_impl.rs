//! Implementations of the valuation trait for maps from atoms to booleans.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use crate::structures::{atom::Atom, valuation::Valuation};

impl<S: BuildHasher> Valuation for HashMap<Atom, bool, S> {
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.get(atom).copied()
    }

    fn has_value(&self, atom: &Atom) -> bool {
        self.contains_key(atom)
    }
}

impl Valuation for BTreeMap<Atom, bool> {
    fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.get(atom).copied()
    }

    fn has_value(&self, atom: &Atom) -> bool {
        self.contains_key(atom)
    }
}
