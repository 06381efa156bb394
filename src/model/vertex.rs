//! Vertex module for phylogenetic tree representation.

use crate::model::taxon::Taxon;
use crate::model::tree::VertexIndex;
use std::fmt;
use std::ops::Deref;

/// During construction, Internal and Leaf vertex might not have parent set yet.
const NO_PARENT_SET: VertexIndex = usize::MAX;

// =#========================================================================#=
// VERTEX
// =#========================================================================#=
/// Represents a vertex (node) in a phylogenetic tree.
///
/// A vertex can be either:
/// - **Root**: Has two children, no parent and no branch_length
/// - **Internal**: Has two children, no taxon, might have branch_length
/// - **Leaf**: Has no children, carries a [Taxon] and might have branch_length
///
/// Generic over `S`, the character state type held by the taxa of leaves.
///
/// # Invariants
/// - `index` is index in arena
/// - `branch_length` is non-negative (enforced); might not be set
/// - Internal vertices and leaves have `parent` set to the [VertexIndex] of
///   their parent; `NO_PARENT_SET = usize::MAX` only during construction
///   (or for a leaf that is the root of a single-taxon tree)
#[derive(PartialEq, Debug, Clone)]
pub enum Vertex<S> {
    /// Root vertex of the tree (has no parent, has two children)
    Root {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Indices of the two child vertices
        children: (VertexIndex, VertexIndex),
    },
    /// Internal vertex (has parent and two children, no taxon)
    Internal {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Indices of the two child vertices
        children: (VertexIndex, VertexIndex),
        /// Distance to parent vertex (optional, non-negative if present)
        branch_length: Option<BranchLength>,
    },
    /// Leaf vertex (has parent and taxon, no children)
    Leaf {
        /// Index of this vertex in the tree arena
        index: VertexIndex,
        /// Index of the parent vertex
        parent: VertexIndex,
        /// Distance to parent vertex (optional, non-negative if present)
        branch_length: Option<BranchLength>,
        /// Taxon (name and characters) represented by this leaf
        taxon: Taxon<S>,
    },
}

impl<S> Vertex<S> {
    /// Creates a new root vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `children` - Tuple of child indices
    pub fn new_root(index: VertexIndex, children: (VertexIndex, VertexIndex)) -> Self {
        Vertex::Root { index, children }
    }

    /// Creates a new internal (non-leaf, non-root) vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `children` - Tuple of child indices
    /// * `branch_length` - Distance to parent vertex (non-negative)
    pub fn new_internal(
        index: VertexIndex,
        children: (VertexIndex, VertexIndex),
        branch_length: Option<BranchLength>,
    ) -> Self {
        Vertex::Internal {
            index,
            parent: NO_PARENT_SET,
            children,
            branch_length,
        }
    }

    /// Creates a new leaf vertex.
    ///
    /// # Arguments
    /// * `index` - The unique index of this vertex in the tree (arena)
    /// * `branch_length` - Distance to parent vertex (non-negative)
    /// * `taxon` - Taxon represented by this leaf
    pub fn new_leaf(index: VertexIndex, branch_length: Option<BranchLength>, taxon: Taxon<S>) -> Self {
        Vertex::Leaf {
            index,
            parent: NO_PARENT_SET,
            branch_length,
            taxon,
        }
    }

    /// Returns the index of this vertex.
    pub fn index(&self) -> VertexIndex {
        match self {
            Vertex::Root { index, .. } => *index,
            Vertex::Internal { index, .. } => *index,
            Vertex::Leaf { index, .. } => *index,
        }
    }

    /// Returns whether this vertex has a [BranchLength] (root always counts as having one).
    pub fn has_branch_length(&self) -> bool {
        match self {
            Vertex::Root { .. } => true,
            Vertex::Internal { branch_length, .. } => branch_length.is_some(),
            Vertex::Leaf { branch_length, .. } => branch_length.is_some(),
        }
    }

    /// Returns the branch length if this is a non-root vertex and one is set, else `None`.
    pub fn branch_length(&self) -> Option<BranchLength> {
        match self {
            Vertex::Root { .. } => None,
            Vertex::Internal { branch_length, .. } => *branch_length,
            Vertex::Leaf { branch_length, .. } => *branch_length,
        }
    }

    /// Sets the branch length of a non-root vertex.
    ///
    /// # Panics
    /// Panics if called on root.
    pub fn set_branch_length(&mut self, length: Option<BranchLength>) {
        match self {
            Vertex::Root { .. } => panic!("Cannot set branch length on root vertex"),
            Vertex::Internal { branch_length, .. } => *branch_length = length,
            Vertex::Leaf { branch_length, .. } => *branch_length = length,
        }
    }

    /// Returns the taxon if this is a leaf, else `None`.
    pub fn taxon(&self) -> Option<&Taxon<S>> {
        match self {
            Vertex::Leaf { taxon, .. } => Some(taxon),
            _ => None,
        }
    }

    /// Returns the taxon mutably if this is a leaf, else `None`.
    pub fn taxon_mut(&mut self) -> Option<&mut Taxon<S>> {
        match self {
            Vertex::Leaf { taxon, .. } => Some(taxon),
            _ => None,
        }
    }

    /// Returns `true` if this vertex is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Vertex::Leaf { .. })
    }

    /// Returns `true` if this vertex is an internal vertex.
    pub fn is_internal(&self) -> bool {
        matches!(self, Vertex::Internal { .. })
    }

    /// Returns `true` if this vertex is a root.
    pub fn is_root(&self) -> bool {
        matches!(self, Vertex::Root { .. })
    }

    /// Returns the children if this is a root or internal vertex, else `None`.
    pub fn children(&self) -> Option<(VertexIndex, VertexIndex)> {
        match self {
            Vertex::Root { children, .. } => Some(*children),
            Vertex::Internal { children, .. } => Some(*children),
            Vertex::Leaf { .. } => None,
        }
    }

    /// Sets new parent for non-root vertex.
    ///
    /// # Panics
    /// Panics if called on root.
    pub fn set_parent(&mut self, parent: VertexIndex) {
        match self {
            Vertex::Root { .. } => panic!("Cannot set parent on root vertex"),
            Vertex::Internal { parent: p, .. } => *p = parent,
            Vertex::Leaf { parent: p, .. } => *p = parent,
        }
    }

    /// Returns the index of parent if this a non-root vertex, else `None`.
    ///
    /// Note that parent might not be set yet during construction.
    pub fn parent_index(&self) -> Option<VertexIndex> {
        match self {
            Vertex::Internal { parent, .. } | Vertex::Leaf { parent, .. } => {
                if *parent == NO_PARENT_SET {
                    None
                } else {
                    Some(*parent)
                }
            }
            Vertex::Root { .. } => None,
        }
    }

    /// Returns `true` if this vertex has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent_index().is_some()
    }

    /// Turns this vertex into the root of its tree: an internal vertex becomes
    /// a [Vertex::Root], a leaf stays a leaf but loses its parent and branch.
    pub(crate) fn make_root(&mut self) {
        match self {
            Vertex::Internal { index, children, .. } => {
                let (index, children) = (*index, *children);
                *self = Vertex::Root { index, children };
            }
            Vertex::Leaf { parent, branch_length, .. } => {
                *parent = NO_PARENT_SET;
                *branch_length = None;
            }
            Vertex::Root { .. } => {}
        }
    }
}

// =#========================================================================#=
// BRANCH LENGTH
// =#========================================================================#=
/// Branch length in a phylogenetic tree, enforced non-negative.
///
/// Represents the evolutionary distance between a vertex and its parent.
/// The value is guaranteed to be non-negative and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BranchLength(f64);

impl BranchLength {
    /// Creates a new branch length.
    ///
    /// # Arguments
    /// * `length` - The branch length value (must be non-negative)
    ///
    /// # Panics
    /// Panics if `length` is negative or not finite.
    pub fn new(length: f64) -> Self {
        assert!(length >= 0.0, "Branch length must be non-negative, got {}", length);
        assert!(length.is_finite(), "Branch length must be finite, got {}", length);
        BranchLength(length)
    }
}

impl Deref for BranchLength {
    type Target = f64;
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for BranchLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
