//! Newick format writing for [PhyloTree].

use crate::model::tree::VertexIndex;
use crate::model::vertex::BranchLength;
use crate::model::PhyloTree;
use crate::utils::escape_label;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Extra buffer in Newick string length/capacity estimate
const BUFFER_CHARS: usize = 10;

/// Writes given list of trees to a file in Newick format, one tree per line.
///
/// Each tree is written as a complete Newick string followed by a newline.
/// Leaf labels are the taxon names, escaped if necessary.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
/// * `trees` - Trees to write
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_newick_file<P: AsRef<Path>, S>(path: P, trees: &[PhyloTree<S>]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let Some(first) = trees.first() else {
        return Ok(());
    };

    let estimated_capacity = estimate_newick_len(first);
    for tree in trees {
        let newick = to_newick_with_capacity(tree, estimated_capacity);
        writer.write_all(newick.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Returns the Newick representation of this tree with closing semicolon.
///
/// The Newick format represents phylogenetic trees as nested parentheses with branch lengths.
/// For example: `((Latin:1.5,Oscan:1.5):0.5,'Gaulish (Transalpine)':2);`
///
/// # Returns
/// A Newick format string terminated with `;`. An empty tree yields `";"`.
///
/// # Example
/// ```
/// use ngesh::model::{BranchLength, PhyloTree, Taxon};
/// use ngesh::newick::to_newick;
///
/// let mut tree: PhyloTree<u32> = PhyloTree::new(2);
/// let a = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::new("A"));
/// let b = tree.add_leaf(Some(BranchLength::new(2.5)), Taxon::new("B"));
/// tree.add_root((a, b));
///
/// assert_eq!(to_newick(&tree), "(A:1,B:2.5);");
/// ```
pub fn to_newick<S>(tree: &PhyloTree<S>) -> String {
    let estimated_capacity = estimate_newick_len(tree);
    to_newick_with_capacity(tree, estimated_capacity)
}

/// Returns the Newick representation of a tree with pre-allocated capacity.
///
/// This is an optimization for writing multiple trees with similar structure,
/// where the capacity can be estimated once and reused.
pub(crate) fn to_newick_with_capacity<S>(tree: &PhyloTree<S>, estimated_capacity: usize) -> String {
    // Helper for adding branch lengths
    fn build_newick_branch_length(newick: &mut String, branch_length: Option<BranchLength>) {
        if let Some(branch_length) = branch_length {
            newick.push(':');
            newick.push_str(&branch_length.to_string());
        }
    }

    // Recursive helper for building the Newick string
    fn build_newick<S>(tree: &PhyloTree<S>, newick: &mut String, index: VertexIndex) {
        let vertex = &tree[index];

        if let Some(taxon) = vertex.taxon() {
            newick.push_str(&escape_label(taxon.name()));
            build_newick_branch_length(newick, vertex.branch_length());
        } else if let Some((left, right)) = vertex.children() {
            newick.push('(');
            build_newick(tree, newick, left);
            newick.push(',');
            build_newick(tree, newick, right);
            newick.push(')');

            if !vertex.is_root() {
                build_newick_branch_length(newick, vertex.branch_length());
            }
        }
    }

    let mut newick = String::with_capacity(estimated_capacity);
    if tree.is_root_set() {
        build_newick(tree, &mut newick, tree.root_index());
    }
    newick.push(';');

    newick
}

/// Estimates the length of a Newick string for a given tree.
///
/// Accounts for structure, escaped labels, and branch lengths; used to
/// pre-allocate string capacity for efficient writing.
pub(crate) fn estimate_newick_len<S>(tree: &PhyloTree<S>) -> usize {
    // Each internal node: "(,)"
    const INTERNAL_NODE_CHARS: usize = 3;
    // Branch lengths: ~20 chars each (e.g., ":0.009529961339106089")
    const BRANCH_LENGTH_CHARS: usize = 20;

    let num_internal = tree.num_internal() + 1; // +1 for root
    let structure_capacity = num_internal * INTERNAL_NODE_CHARS;

    let label_capacity: usize = tree
        .leaves()
        .filter_map(|v| v.taxon())
        .map(|taxon| taxon.name().len() + 2)
        .sum();

    let branch_capacity = if tree.vertices_have_branch_lengths() {
        tree.num_vertices().saturating_sub(1) * BRANCH_LENGTH_CHARS
    } else {
        0
    };

    structure_capacity + label_capacity + branch_capacity + BUFFER_CHARS
}
