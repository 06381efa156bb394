use ngesh::model::Taxon;
use ngesh::nexus::CharacterMatrix;
use ngesh::sim::{simulate, SimulationConfig};
use ngesh::{tree_to_nexus, tree_to_wordlist};
use proptest::prelude::*;
use std::collections::HashSet;

/// Taxa with distinct names and equally long character vectors.
fn rectangular_taxa() -> impl Strategy<Value = Vec<Taxon<u8>>> {
    (1usize..6, 1usize..12).prop_flat_map(|(num_chars, num_taxa)| {
        prop::collection::vec(prop::collection::vec(0u8..4, num_chars), num_taxa).prop_map(
            |rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, chars)| Taxon::with_chars(format!("Taxon {i}"), chars))
                    .collect()
            },
        )
    })
}

/// Taxa with possibly repeated names and character vectors of varying length.
fn ragged_taxa() -> impl Strategy<Value = Vec<Taxon<u8>>> {
    prop::collection::vec(
        ("[A-E]", prop::collection::vec(0u8..3, 0..6)),
        1..15,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(name, chars)| Taxon::with_chars(name, chars))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_wordlist_rows(taxa in rectangular_taxa()) {
        let csv = tree_to_wordlist(&taxa).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        prop_assert_eq!(lines[0], "Language_ID,Feature_ID,Value");
        prop_assert_eq!(lines.len(), 1 + taxa.len() * taxa[0].num_chars());
        prop_assert_eq!(csv.clone(), tree_to_wordlist(&taxa).unwrap());
    }

    #[test]
    fn prop_matrix_rectangular(taxa in ragged_taxa()) {
        let matrix = CharacterMatrix::from_source(&taxa).unwrap();
        let distinct: HashSet<_> = taxa.iter().map(Taxon::name).collect();

        prop_assert_eq!(matrix.ntax(), distinct.len());
        for (_, bits) in matrix.rows() {
            prop_assert_eq!(bits.len(), matrix.nchar());
            prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn prop_one_hot_per_position(taxa in rectangular_taxa()) {
        let matrix = CharacterMatrix::from_source(&taxa).unwrap();
        let num_chars = taxa[0].num_chars();

        // Every row sets exactly one bit per character position
        for (_, bits) in matrix.rows() {
            prop_assert_eq!(bits.matches('1').count(), num_chars);
        }
    }

    #[test]
    fn prop_nexus_idempotent(taxa in ragged_taxa()) {
        prop_assert_eq!(tree_to_nexus(&taxa).unwrap(), tree_to_nexus(&taxa).unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_seeded_simulation_reproducible(seed in any::<u64>(), leaves in 2usize..30) {
        let config = SimulationConfig::new()
            .with_rates(1.0, 0.0)
            .with_min_leaves(Some(leaves))
            .with_num_chars(5)
            .with_seed(seed);

        let first = simulate(&config).unwrap();
        let second = simulate(&config).unwrap();
        prop_assert_eq!(first.num_leaves(), leaves);
        prop_assert!(first.is_valid());
        prop_assert_eq!(tree_to_wordlist(&first).unwrap(), tree_to_wordlist(&second).unwrap());
    }
}
