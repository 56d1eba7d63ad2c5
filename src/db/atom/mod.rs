/*!
A registry of atoms, accessed via methods on an [AtomRegistry] struct.

The registry ensures at most one instance of an atom exists for each name.
The first request for a name creates an atom, and every later request returns that same atom.
Atoms are never removed from a registry, and so the registry grows with each distinct name requested.

Registries are safe to share across threads.
A request for a name which is not yet registered takes a write lock and checks for the name again before creating an atom, so racing requests for the same name all receive the same instance.

Typically, a registry is made by whatever builds a formula and passed to whatever needs atoms.
Though, for convenience, a single process-wide registry is available through [AtomRegistry::global].

```rust
# use otter_clauses::db::atom::AtomRegistry;
let registry = AtomRegistry::new();

let p = registry.create_or_get("p");
assert!(p.same_instance(&registry.create_or_get("p")));
assert_ne!(p, registry.create_or_get("P"));

assert_eq!(registry.count(), 2);
assert!(registry.get("q").is_none());
```
*/

use std::{
    collections::HashSet,
    sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// The atom registry.
#[derive(Debug)]
pub struct AtomRegistry {
    /// Registered atoms, looked up by name through `Borrow<str>`.
    atoms: RwLock<HashSet<Atom>>,
}

impl AtomRegistry {
    /// An empty registry, with the default configuration.
    pub fn new() -> Self {
        AtomRegistry::from_config(&Config::default())
    }

    /// An empty registry, with room for `registry_capacity` atoms before reallocation.
    ///
    /// The reservation is best effort, and the registry is usable regardless.
    pub fn from_config(config: &Config) -> Self {
        let capacity = config.registry_capacity.value;
        let mut atoms = HashSet::new();
        if atoms.try_reserve(capacity).is_err() {
            log::warn!(target: targets::ATOM_REGISTRY, "Failed to reserve room for {capacity} atoms");
        }

        AtomRegistry {
            atoms: RwLock::new(atoms),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static AtomRegistry {
        static GLOBAL: OnceLock<AtomRegistry> = OnceLock::new();
        GLOBAL.get_or_init(AtomRegistry::new)
    }

    /// The atom registered under `name`, after registering a fresh atom if none was.
    pub fn create_or_get(&self, name: &str) -> Atom {
        if let Some(atom) = self.get(name) {
            return atom;
        }

        let mut atoms = self.write_atoms();

        // Another caller may have registered the name between the locks.
        if let Some(atom) = atoms.get(name) {
            return atom.clone();
        }

        let atom = Atom::fresh(name);
        atoms.insert(atom.clone());
        log::trace!(target: targets::ATOM_REGISTRY, "Registered atom {:?} ({} atoms)", name, atoms.len());

        atom
    }

    /// The atom registered under `name`, if one is.
    pub fn get(&self, name: &str) -> Option<Atom> {
        self.read_atoms().get(name).cloned()
    }

    /// Whether some atom is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read_atoms().contains(name)
    }

    /// A count of atoms in the registry.
    pub fn count(&self) -> usize {
        self.read_atoms().len()
    }

    /// Whether no atom has been registered.
    pub fn is_empty(&self) -> bool {
        self.read_atoms().is_empty()
    }

    /// A snapshot of every registered atom, in no particular order.
    pub fn atoms(&self) -> Vec<Atom> {
        self.read_atoms().iter().cloned().collect()
    }

    // Entries are only ever inserted whole, so a poisoned lock still guards a consistent set.
    fn read_atoms(&self) -> RwLockReadGuard<'_, HashSet<Atom>> {
        self.atoms.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_atoms(&self) -> RwLockWriteGuard<'_, HashSet<Atom>> {
        self.atoms.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AtomRegistry {
    fn default() -> Self {
        AtomRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_exact() {
        let registry = AtomRegistry::new();

        let names = ["p", "P", "p ", " p", ""];
        let atoms = names
            .iter()
            .map(|name| registry.create_or_get(name))
            .collect::<Vec<_>>();

        assert_eq!(registry.count(), names.len());
        for (index, atom) in atoms.iter().enumerate() {
            assert_eq!(atom.name(), names[index]);
            for other in atoms.iter().skip(index + 1) {
                assert_ne!(atom, other);
            }
        }
    }

    #[test]
    fn get_does_not_register() {
        let registry = AtomRegistry::new();

        assert!(registry.is_empty());
        assert!(registry.get("p").is_none());
        assert!(!registry.contains("p"));
        assert!(registry.is_empty());

        let p = registry.create_or_get("p");
        assert!(registry.get("p").is_some_and(|atom| atom.same_instance(&p)));
        assert!(registry.contains("p"));
    }

    #[test]
    fn registries_are_independent() {
        let one = AtomRegistry::new();
        let two = AtomRegistry::new();

        let p_one = one.create_or_get("p");
        let p_two = two.create_or_get("p");

        assert_eq!(p_one, p_two);
        assert!(!p_one.same_instance(&p_two));
        assert_eq!(one.count(), 1);
        assert_eq!(two.count(), 1);
    }

    #[test]
    fn grows_past_capacity() {
        let mut config = Config::default();
        assert!(config.registry_capacity.set(4).is_ok());
        let registry = AtomRegistry::from_config(&config);

        let atoms = (0..64)
            .map(|index| registry.create_or_get(&format!("atom_{index}")))
            .collect::<Vec<_>>();

        assert_eq!(registry.count(), 64);
        for (index, atom) in atoms.iter().enumerate() {
            assert!(atom.same_instance(&registry.create_or_get(&format!("atom_{index}"))));
        }
    }

    #[test]
    fn largest_capacity() {
        let mut config = Config::default();
        assert!(config
            .set_by_name("registry_capacity", &crate::config::REGISTRY_CAPACITY_MAX.to_string())
            .is_ok());

        let registry = AtomRegistry::from_config(&config);
        assert!(registry.is_empty());

        let p = registry.create_or_get("p");
        assert!(p.same_instance(&registry.create_or_get("p")));
    }

    #[test]
    fn global_registry() {
        let p = AtomRegistry::global().create_or_get("global_registry_test_atom");
        let also_p = AtomRegistry::global().create_or_get("global_registry_test_atom");

        assert!(p.same_instance(&also_p));
    }

    #[test]
    fn snapshot() {
        let registry = AtomRegistry::new();
        for name in ["c", "a", "b", "a"] {
            registry.create_or_get(name);
        }

        let mut names = registry
            .atoms()
            .iter()
            .map(|atom| atom.name().to_owned())
            .collect::<Vec<_>>();
        names.sort();

        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
