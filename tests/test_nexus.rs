use ngesh::FormatError;
use ngesh::model::{BranchLength, PhyloTree, Taxon};
use ngesh::nexus::{self, CharacterMatrix, NexusWriter};
use std::fs;

fn tree_of(taxa: Vec<Taxon<&'static str>>) -> PhyloTree<&'static str> {
    // Caterpillar: (((t0,t1),t2),t3)...
    let mut tree = PhyloTree::new(taxa.len());
    let mut leaves = taxa
        .into_iter()
        .map(|taxon| tree.add_leaf(Some(BranchLength::new(1.0)), taxon))
        .collect::<Vec<_>>()
        .into_iter();

    let first = leaves.next().unwrap();
    let second = leaves.next().unwrap();
    let mut rest: Vec<_> = leaves.collect();
    if rest.is_empty() {
        tree.add_root((first, second));
        return tree;
    }
    let last = rest.pop().unwrap();
    let mut acc = tree.add_internal_vertex((first, second), Some(BranchLength::new(1.0)));
    for leaf in rest {
        acc = tree.add_internal_vertex((acc, leaf), Some(BranchLength::new(1.0)));
    }
    tree.add_root((acc, last));
    tree
}

#[test]
fn test_two_taxa_exact_output() {
    let tree = tree_of(vec![
        Taxon::with_chars("Latin", vec!["A", "B"]),
        Taxon::with_chars("Oscan", vec!["A", "C"]),
    ]);

    let expected = "#NEXUS\n\
                    \n\
                    begin data;\n  \
                    dimensions ntax=2 nchar=3;\n  \
                    format datatype=standard missing=? gap=-;\n  \
                    matrix\n\
                    Latin    110\n\
                    Oscan    101\n  \
                    ;\n\
                    end;";
    assert_eq!(nexus::to_nexus(&tree).unwrap(), expected);
}

#[test]
fn test_missing_characters_warning() {
    let tree = tree_of(vec![Taxon::new("Latin"), Taxon::new("Oscan")]);
    let output = nexus::to_nexus(&tree).unwrap();

    let lines: Vec<_> = output.split('\n').collect();
    assert_eq!(lines[0], "#NEXUS");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "[WARNING: characters missing from tree]");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "begin data;");
    assert_eq!(lines[5], "  dimensions ntax=2 nchar=0;");
    assert_eq!(lines[8], "Latin    ");
    assert_eq!(lines[9], "Oscan    ");
}

#[test]
fn test_partially_missing_characters_counts_as_missing() {
    let tree = tree_of(vec![
        Taxon::with_chars("Latin", vec!["A"]),
        Taxon::new("Oscan"),
    ]);
    let matrix = CharacterMatrix::from_source(&tree).unwrap();
    assert!(matrix.is_characters_missing());
    assert_eq!(matrix.nchar(), 0);
    assert_eq!(matrix.row("Latin"), Some(""));
}

#[test]
fn test_empty_character_vectors_have_no_warning() {
    let tree = tree_of(vec![
        Taxon::with_chars("Latin", vec![]),
        Taxon::with_chars("Oscan", vec![]),
    ]);
    let output = nexus::to_nexus(&tree).unwrap();
    assert!(!output.contains("WARNING"));
    assert!(output.contains("nchar=0;"));
}

#[test]
fn test_spaces_become_underscores() {
    let tree = tree_of(vec![
        Taxon::with_chars("Proto Language", vec!["A"]),
        Taxon::with_chars("Daughter", vec!["B"]),
    ]);
    let output = nexus::to_nexus(&tree).unwrap();
    assert!(output.contains("\nProto_Language    10\n"));
    assert!(output.contains("\nDaughter          01\n"));
}

#[test]
fn test_ragged_vectors_use_missing_state() {
    let tree = tree_of(vec![
        Taxon::with_chars("Latin", vec!["A", "B"]),
        Taxon::with_chars("Oscan", vec!["A"]),
        Taxon::with_chars("Umbrian", vec!["C", "B"]),
    ]);
    let matrix = CharacterMatrix::from_source(&tree).unwrap();

    // Position 0: A, C; position 1: B, missing
    assert_eq!(matrix.nchar(), 4);
    assert_eq!(matrix.row("Latin"), Some("1010"));
    assert_eq!(matrix.row("Oscan"), Some("1001"));
    assert_eq!(matrix.row("Umbrian"), Some("0110"));
    assert!(matrix.rows().iter().all(|(_, bits)| bits.len() == 4));
}

#[test]
fn test_duplicate_names_collapse() {
    let taxa = vec![
        Taxon::with_chars("Latin", vec!["A"]),
        Taxon::with_chars("Oscan", vec!["B"]),
        Taxon::with_chars("Latin", vec!["C"]),
    ];
    let matrix = CharacterMatrix::from_source(&taxa).unwrap();

    assert_eq!(matrix.ntax(), 2);
    assert_eq!(matrix.rows()[0].0, "Latin");
    // Alphabet only sees the surviving vectors: C, B
    assert_eq!(matrix.row("Latin"), Some("10"));
    assert_eq!(matrix.row("Oscan"), Some("01"));
}

#[test]
fn test_nchar_is_sum_of_alphabet_sizes() {
    let tree = tree_of(vec![
        Taxon::with_chars("A", vec!["1", "x", "p"]),
        Taxon::with_chars("B", vec!["2", "x", "q"]),
        Taxon::with_chars("C", vec!["3", "x", "p"]),
    ]);
    let matrix = CharacterMatrix::from_source(&tree).unwrap();
    assert_eq!(matrix.nchar(), 3 + 1 + 2);
    assert_eq!(matrix.row("C"), Some("001110"));
}

#[test]
fn test_empty_tree() {
    let tree: PhyloTree<u32> = PhyloTree::empty();
    assert!(matches!(nexus::to_nexus(&tree), Err(FormatError::EmptyTree)));
    assert!(matches!(
        CharacterMatrix::from_source(&tree),
        Err(FormatError::EmptyTree)
    ));
}

#[test]
fn test_idempotent() {
    let tree = tree_of(vec![
        Taxon::with_chars("Latin", vec!["A", "B"]),
        Taxon::with_chars("Oscan", vec!["A", "C"]),
        Taxon::with_chars("Umbrian", vec!["D", "B"]),
    ]);
    assert_eq!(nexus::to_nexus(&tree).unwrap(), nexus::to_nexus(&tree).unwrap());
}

#[test]
fn test_writer_on_vec() {
    let taxa = vec![
        Taxon::with_chars("Latin", vec![1u32]),
        Taxon::with_chars("Oscan", vec![2]),
    ];
    let matrix = CharacterMatrix::from_source(&taxa).unwrap();

    let mut writer = NexusWriter::new(Vec::new());
    writer.write_matrix(&matrix).unwrap();
    let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    assert_eq!(output, nexus::to_nexus(&taxa).unwrap());
    assert!(output.ends_with("end;"));
}

#[test]
fn test_write_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("characters.nex");
    let taxa = vec![
        Taxon::with_chars("Latin", vec!["A", "B"]),
        Taxon::with_chars("Oscan", vec!["A", "C"]),
    ];

    nexus::write_file(&path, &taxa).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), nexus::to_nexus(&taxa).unwrap());
}

#[test]
fn test_non_ascii_names() {
    let taxa = vec![
        Taxon::with_chars("Ænglisc", vec!["hūs"]),
        Taxon::with_chars("Old Norse", vec!["hús"]),
    ];
    let output = nexus::to_nexus(&taxa).unwrap();
    // Width counts characters: "Old Norse" has 9, so every name is padded to 12
    assert!(output.contains("\nÆnglisc      10\n"));
    assert!(output.contains("\nOld_Norse    01\n"));
}
