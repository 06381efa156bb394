use ngesh::model::{BranchLength, PhyloTree, Taxon, TaxonSource};

/// ((Latin:1,Oscan:1):1,Umbrian:2)
fn italic_tree() -> PhyloTree<&'static str> {
    let mut tree = PhyloTree::new(3);
    let latin = tree.add_leaf(
        Some(BranchLength::new(1.0)),
        Taxon::with_chars("Latin", vec!["A", "B"]),
    );
    let oscan = tree.add_leaf(
        Some(BranchLength::new(1.0)),
        Taxon::with_chars("Oscan", vec!["A", "C"]),
    );
    let umbrian = tree.add_leaf(
        Some(BranchLength::new(2.0)),
        Taxon::with_chars("Umbrian", vec!["D", "C"]),
    );
    let sabellic = tree.add_internal_vertex((latin, oscan), Some(BranchLength::new(1.0)));
    tree.add_root((sabellic, umbrian));
    tree
}

#[test]
fn test_building_tree() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(3);
    let index_l1 = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("Anarhynchus"));
    let index_l2 = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("Himantopus"));
    let index_l3 = tree.add_leaf(Some(BranchLength::new(0.5)), Taxon::new("Strigops"));
    let index_i1 = tree.add_internal_vertex((index_l1, index_l2), Some(BranchLength::new(1.5)));
    let index_root = tree.add_root((index_l3, index_i1));

    // Counts
    assert_eq!(tree.num_leaves(), 3);
    assert_eq!(tree.num_internal(), 1);
    assert_eq!(tree.num_vertices(), 5);

    // Root
    let root = tree.root();
    assert_eq!(root.index(), index_root);
    assert!(root.is_root());
    assert_eq!(root.children(), Some((index_l3, index_i1)));

    // Leaf
    let l2 = &tree[index_l2];
    assert!(l2.is_leaf());
    assert_eq!(l2.parent_index(), Some(index_i1));
    assert_eq!(l2.taxon().unwrap().name(), "Himantopus");

    // Internal
    let inti = &tree[index_i1];
    assert!(inti.is_internal());
    assert_eq!(inti.branch_length().unwrap(), BranchLength::new(1.5));

    assert!(tree.is_valid());
}

#[test]
#[should_panic]
fn test_get_root_panics_on_empty_tree() {
    let tree: PhyloTree<u32> = PhyloTree::new(2);
    tree.root(); // Should panic
}

#[test]
#[should_panic]
fn test_get_vertex_out_of_bounds() {
    let tree: PhyloTree<u32> = PhyloTree::new(2);
    let _ = &tree[55];
}

#[test]
fn test_empty_tree() {
    let tree: PhyloTree<u32> = PhyloTree::empty();
    assert!(tree.is_empty());
    assert!(!tree.is_root_set());
    assert!(tree.is_valid());
    assert_eq!(tree.height(), 0.0);
    assert_eq!(tree.leaves().count(), 0);
    assert_eq!(tree.taxa().count(), 0);
}

#[test]
fn test_single_leaf_root() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(1);
    let only = tree.add_leaf(Some(BranchLength::new(3.0)), Taxon::with_chars("Basque", vec![0]));
    tree.set_root(only);

    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().branch_length(), None);
    assert!(tree.is_valid());
    assert_eq!(tree.taxa().count(), 1);
}

#[test]
fn test_set_root_turns_internal_into_root() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(2);
    let a = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("A"));
    let b = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("B"));
    let top = tree.add_internal_vertex((a, b), Some(BranchLength::new(4.0)));
    tree.set_root(top);

    assert!(tree.root().is_root());
    assert_eq!(tree.root_index(), top);
    assert_eq!(tree.total_branch_length(), 2.0);
    assert!(tree.is_valid());
}

#[test]
fn test_traversal_orders() {
    let tree = italic_tree();

    let names: Vec<_> = tree.taxa().map(Taxon::name).collect();
    assert_eq!(names, vec!["Latin", "Oscan", "Umbrian"]);

    let post: Vec<_> = tree.post_order_iter().map(|v| v.index()).collect();
    assert_eq!(post, vec![0, 1, 3, 2, 4]);

    let pre: Vec<_> = tree.pre_order_iter().map(|v| v.index()).collect();
    assert_eq!(pre, vec![4, 3, 0, 1, 2]);
}

#[test]
fn test_tree_metrics() {
    let tree = italic_tree();
    assert_eq!(tree.height(), 2.0);
    assert!(tree.is_ultrametric());
    assert_eq!(tree.total_branch_length(), 5.0);
    assert!(tree.vertices_have_branch_lengths());
}

#[test]
fn test_not_ultrametric() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(2);
    let a = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("A"));
    let b = tree.add_leaf(Some(BranchLength::new(1.5)), Taxon::new("B"));
    tree.add_root((a, b));

    assert!(!tree.is_ultrametric());
    assert_eq!(tree.height(), 1.5);
}

#[test]
fn test_invalid_without_names() {
    let mut tree: PhyloTree<u32> = PhyloTree::new(2);
    let a = tree.add_leaf(None, Taxon::new("A"));
    let b = tree.add_leaf(None, Taxon::new(""));
    tree.add_root((a, b));

    assert!(!tree.is_valid());
    assert!(!tree.vertices_have_branch_lengths());
}

#[test]
fn test_has_characters() {
    let tree = italic_tree();
    assert!(tree.has_characters());

    let mut bare: PhyloTree<u32> = PhyloTree::new(2);
    let a = bare.add_leaf(None, Taxon::with_chars("A", vec![1]));
    let b = bare.add_leaf(None, Taxon::new("B"));
    bare.add_root((a, b));
    assert!(!bare.has_characters());
}

#[test]
fn test_taxon_mut_renames_leaf() {
    let mut tree = italic_tree();
    tree.taxon_mut(0).unwrap().set_name("Faliscan");
    assert!(tree.taxon_mut(3).is_none());

    assert_eq!(tree.taxa().next().unwrap().name(), "Faliscan");
}

#[test]
fn test_tree_name() {
    let tree: PhyloTree<u32> = PhyloTree::empty().with_name("STATE_0");
    assert_eq!(tree.name(), Some("STATE_0"));
}
