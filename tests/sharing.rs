use std::{
    collections::HashSet,
    hash::{BuildHasher, RandomState},
};

use otter_clauses::{
    db::atom::AtomRegistry,
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
    },
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

mod concurrent_interning {
    use super::*;

    const THREADS: usize = 8;
    const NAMES: usize = 256;

    #[test]
    fn one_instance_per_name() {
        let registry = AtomRegistry::new();
        let shared = &registry;

        let per_thread = crossbeam::scope(|scope| {
            let handles = (0..THREADS)
                .map(|_| {
                    scope.spawn(move |_| {
                        (0..NAMES)
                            .map(|index| shared.create_or_get(&format!("atom_{index}")))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("Interning thread panicked"))
                .collect::<Vec<_>>()
        })
        .expect("Scope failed");

        assert_eq!(registry.count(), NAMES);

        for atoms in &per_thread {
            for (index, atom) in atoms.iter().enumerate() {
                assert!(atom.same_instance(&per_thread[0][index]));
            }
        }
    }
}

mod order_independence {
    use super::*;

    fn literals(registry: &AtomRegistry, count: usize) -> Vec<CLiteral> {
        (0..count)
            .map(|index| CLiteral::new(registry.create_or_get(&format!("{index}")), index % 3 == 0))
            .collect()
    }

    #[test]
    fn shuffled_clauses_are_equal() {
        let registry = AtomRegistry::new();
        let mut rng = StdRng::seed_from_u64(79);
        let state = RandomState::new();

        let mut literals = literals(&registry, 64);
        let clause = Clause::new(literals.clone());

        for _ in 0..32 {
            literals.shuffle(&mut rng);
            let shuffled = Clause::new(literals.clone());

            assert_eq!(clause, shuffled);
            assert_eq!(state.hash_one(&clause), state.hash_one(&shuffled));
        }
    }

    #[test]
    fn clauses_as_set_members() {
        let registry = AtomRegistry::new();
        let mut rng = StdRng::seed_from_u64(97);

        let mut literals = literals(&registry, 16);
        let mut clauses = HashSet::new();

        for _ in 0..16 {
            literals.shuffle(&mut rng);
            // Duplicates within a clause do not matter either.
            let mut with_duplicates = literals.clone();
            with_duplicates.extend(literals.iter().take(4).cloned());

            clauses.insert(Clause::new(with_duplicates));
        }
        assert_eq!(clauses.len(), 1);

        clauses.insert(Clause::new(literals.iter().skip(1).cloned()));
        assert_eq!(clauses.len(), 2);
    }
}
