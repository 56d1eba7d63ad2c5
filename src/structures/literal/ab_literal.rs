use crate::structures::atom::Atom;

use super::Literal;

/// The representation of a literal as an atom paired with a boolean.
#[derive(Clone, Debug)]
pub struct ABLiteral {
    /// The atom of a literal.
    atom: Atom,

    /// Whether the atom is negated.
    negated: bool,
}

impl Literal for ABLiteral {
    fn new(atom: Atom, negated: bool) -> Self {
        Self { atom, negated }
    }

    fn negate(&self) -> Self {
        Self {
            atom: self.atom.clone(),
            negated: !self.negated,
        }
    }

    fn atom(&self) -> &Atom {
        &self.atom
    }

    fn is_negated(&self) -> bool {
        self.negated
    }
}

// Traits

impl PartialOrd for ABLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ABLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.atom == other.atom {
            self.negated.cmp(&other.negated)
        } else {
            self.atom.cmp(&other.atom)
        }
    }
}

impl PartialEq for ABLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.atom == other.atom && self.negated == other.negated
    }
}

impl Eq for ABLiteral {}

impl std::hash::Hash for ABLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.atom.hash(state);
        self.negated.hash(state);
    }
}

impl std::fmt::Display for ABLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            false => write!(f, "{}", self.atom),
            true => write!(f, "-{}", self.atom),
        }
    }
}

// From

impl From<Atom> for ABLiteral {
    fn from(atom: Atom) -> Self {
        ABLiteral::new(atom, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::atom::AtomRegistry;

    #[test]
    fn equal_iff_both_parts_equal() {
        let registry = AtomRegistry::new();
        let p = registry.create_or_get("p");
        let q = registry.create_or_get("q");

        assert_eq!(ABLiteral::new(p.clone(), true), ABLiteral::new(p.clone(), true));
        assert_ne!(ABLiteral::new(p.clone(), true), ABLiteral::new(p.clone(), false));
        assert_ne!(ABLiteral::new(p, false), ABLiteral::new(q, false));
    }

    #[test]
    fn double_negation() {
        let registry = AtomRegistry::new();
        let literal = ABLiteral::from(registry.create_or_get("p"));

        assert!(!literal.is_negated());
        assert!(literal.polarity());
        assert_eq!(literal.negate().negate(), literal);
    }

    #[test]
    fn ordered_by_atom_then_flag() {
        let registry = AtomRegistry::new();
        let a = registry.create_or_get("a");
        let b = registry.create_or_get("b");

        let mut literals = vec![
            ABLiteral::new(b.clone(), true),
            ABLiteral::new(a.clone(), true),
            ABLiteral::new(b.clone(), false),
            ABLiteral::new(a.clone(), false),
        ];
        literals.sort();

        assert_eq!(
            literals.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
            vec!["a", "-a", "b", "-b"]
        );
    }
}
