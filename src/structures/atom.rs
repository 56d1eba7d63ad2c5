/*!
An atom (aka. a 'variable').

Atoms are things with a name to which assigning a (boolean) value is of interest.

The name of an atom is its identity.
Two atoms are equal if and only if their names are equal, and so hashing and ordering are determined by the name alone.

Atoms are obtained from an [AtomRegistry](crate::db::atom::AtomRegistry), which ensures at most one instance exists for each name.
So, beyond equality, atoms obtained from the same registry for the same name are the *same* instance:

```rust
# use otter_clauses::db::atom::AtomRegistry;
let registry = AtomRegistry::new();
let p = registry.create_or_get("p");
let also_p = registry.create_or_get("p");

assert_eq!(p, also_p);
assert!(p.same_instance(&also_p));
```

An atom is a thin handle on a shared name, and cloning an atom does not copy the name.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- Names are compared exactly. No normalisation is made, and the empty string is a name like any other.
*/

use std::{borrow::Borrow, sync::Arc};

/// An atom, aka. a 'variable'.
#[derive(Clone, Debug)]
pub struct Atom {
    name: Arc<str>,
}

impl Atom {
    /// Only a registry creates atoms.
    pub(crate) fn fresh(name: &str) -> Self {
        Atom {
            name: Arc::from(name),
        }
    }

    /// The name of the atom.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `self` and `other` are the same instance, and not only equal.
    pub fn same_instance(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other) || self.name == other.name
    }
}

impl Eq for Atom {}

// Must agree with the hash of the name as a str, for lookup via Borrow<str>.
impl std::hash::Hash for Atom {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name().cmp(other.name())
    }
}

impl Borrow<str> for Atom {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
