#![allow(unused)]

use ngesh::model::{BranchLength, Taxon, Vertex};

// ============= Branch Length Tests =============
#[test]
fn test_branch_lengths() {
    let test_length = 1.234;
    let vertex: Vertex<u32> = Vertex::new_internal(5, (1, 2), Some(BranchLength::new(test_length)));
    assert_eq!(*vertex.branch_length().unwrap(), test_length);
}

#[test]
#[should_panic]
fn test_negative_branch_length() {
    let negative_length = BranchLength::new(-1.0);
}

#[test]
#[should_panic]
fn test_infinite_branch_length() {
    let infinite_length = BranchLength::new(f64::INFINITY);
}

#[test]
fn test_branch_length_display() {
    assert_eq!(BranchLength::new(1.0).to_string(), "1");
    assert_eq!(BranchLength::new(0.25).to_string(), "0.25");
}

// ============= Vertex Variant Consistency Tests =============
#[test]
fn test_is_x() {
    let leaf: Vertex<u32> = Vertex::new_leaf(0, Some(BranchLength::new(0.5)), Taxon::new("Kea"));
    assert!(leaf.is_leaf());

    let vertex: Vertex<u32> = Vertex::new_internal(0, (1, 2), Some(BranchLength::new(0.5)));
    assert!(vertex.is_internal());

    let root: Vertex<u32> = Vertex::new_root(2, (42, 42));
    assert!(root.is_root());
}

#[test]
fn test_nonleaf_vertex_has_no_taxon() {
    let internal: Vertex<u32> = Vertex::new_internal(0, (1, 2), Some(BranchLength::new(0.5)));
    assert!(internal.taxon().is_none());

    let root: Vertex<u32> = Vertex::new_root(0, (12, 34));
    assert!(root.taxon().is_none());
    assert!(root.branch_length().is_none());
    assert!(root.has_branch_length());
}

#[test]
fn test_parent_unset() {
    let vertex: Vertex<u32> = Vertex::new_internal(0, (1, 2), Some(BranchLength::new(0.5)));
    assert_eq!(vertex.parent_index(), None);
    assert!(!vertex.has_parent());

    let leaf: Vertex<u32> = Vertex::new_leaf(0, Some(BranchLength::new(0.5)), Taxon::new("Kaka"));
    assert_eq!(leaf.parent_index(), None);
    assert!(!leaf.has_parent());
}

#[test]
fn test_set_parent() {
    let mut leaf: Vertex<u32> = Vertex::new_leaf(3, None, Taxon::new("Kakapo"));
    leaf.set_parent(7);
    assert_eq!(leaf.parent_index(), Some(7));
    assert_eq!(leaf.children(), None);
}

#[test]
#[should_panic]
fn test_set_parent_on_root() {
    let mut root: Vertex<u32> = Vertex::new_root(0, (1, 2));
    root.set_parent(5);
}

#[test]
#[should_panic]
fn test_set_branch_length_on_root() {
    let mut root: Vertex<u32> = Vertex::new_root(0, (1, 2));
    root.set_branch_length(Some(BranchLength::new(1.0)));
}

#[test]
fn test_leaf_taxon() {
    let mut leaf = Vertex::new_leaf(1, None, Taxon::with_chars("Nestor notabilis", vec![3, 1]));
    assert_eq!(leaf.taxon().unwrap().chars(), Some(&[3, 1][..]));

    leaf.taxon_mut().unwrap().set_chars(None);
    assert!(!leaf.taxon().unwrap().has_characters());
    assert_eq!(leaf.taxon().unwrap().num_chars(), 0);
}
