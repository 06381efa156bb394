use ngesh::model::{BranchLength, PhyloTree, Taxon};
use ngesh::newick::{to_newick, write_newick_file};
use std::fs;

fn cherry(a: &str, bl_a: f64, b: &str, bl_b: f64) -> PhyloTree<u32> {
    let mut tree = PhyloTree::new(2);
    let a = tree.add_leaf(Some(BranchLength::new(bl_a)), Taxon::new(a));
    let b = tree.add_leaf(Some(BranchLength::new(bl_b)), Taxon::new(b));
    tree.add_root((a, b));
    tree
}

#[test]
fn test_nested_tree() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(3);
    let latin = tree.add_leaf(Some(BranchLength::new(1.5)), Taxon::new("Latin"));
    let oscan = tree.add_leaf(Some(BranchLength::new(1.5)), Taxon::new("Oscan"));
    let gaulish = tree.add_leaf(Some(BranchLength::new(2.0)), Taxon::new("Gaulish"));
    let italic = tree.add_internal_vertex((latin, oscan), Some(BranchLength::new(0.5)));
    tree.add_root((italic, gaulish));

    assert_eq!(to_newick(&tree), "((Latin:1.5,Oscan:1.5):0.5,Gaulish:2);");
}

#[test]
fn test_without_branch_lengths() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(2);
    let a = tree.add_leaf(None, Taxon::new("A"));
    let b = tree.add_leaf(None, Taxon::new("B"));
    tree.add_root((a, b));

    assert_eq!(to_newick(&tree), "(A,B);");
}

#[test]
fn test_label_escaping() {
    let tree = cherry("Old Tupi", 1.0, "Gaulish (Transalpine)", 1.0);
    assert_eq!(to_newick(&tree), "(Old_Tupi:1,'Gaulish (Transalpine)':1);");

    let tree = cherry("Ka'apor", 0.1, "Guarani", 0.2);
    assert_eq!(to_newick(&tree), "('Ka''apor':0.1,Guarani:0.2);");
}

#[test]
fn test_empty_and_single_leaf() {
    let empty: PhyloTree<u32> = PhyloTree::empty();
    assert_eq!(to_newick(&empty), ";");

    let mut single: PhyloTree<u32> = PhyloTree::new(1);
    let only = single.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("Basque"));
    single.set_root(only);
    assert_eq!(to_newick(&single), "Basque;");
}

#[test]
fn test_write_newick_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trees.nwk");
    let trees = vec![cherry("A", 1.0, "B", 2.0), cherry("C", 0.5, "D", 0.25)];

    write_newick_file(&path, &trees).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "(A:1,B:2);\n(C:0.5,D:0.25);\n");
}
