/*!
A (partial) function from atoms to truth values.

If all atoms of interest are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

Valuations are owned by whoever drives a solve, and are only ever read by the structures in this library.

The canonical representation of a valuation is a map from atoms to booleans, where an atom without an entry has no value.
Though, the trait is implemented for any [HashMap] or [BTreeMap](std::collections::BTreeMap) from atoms to booleans.

```rust
# use otter_clauses::db::atom::AtomRegistry;
# use otter_clauses::structures::valuation::{CValuation, Valuation};
let registry = AtomRegistry::new();
let p = registry.create_or_get("p");
let q = registry.create_or_get("q");

let mut valuation = CValuation::default();
valuation.insert(p.clone(), false);

assert_eq!(valuation.value_of(&p), Some(false));
assert_eq!(valuation.value_of(&q), None);
assert!(!valuation.has_value(&q));
```
*/

mod map_impl;

use std::collections::HashMap;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = HashMap<Atom, bool>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: &Atom) -> Option<bool>;

    /// Whether the atom has some value under the valuation.
    fn has_value(&self, atom: &Atom) -> bool {
        self.value_of(atom).is_some()
    }
}
