//! Provides the phylogenetic tree representation.
//!
//! Provides core data structures for representing phylogenetic trees:
//! * [`PhyloTree<S>`] - Main tree structure using the arena pattern
//!   for efficient memory layout, generic over the character state type of its taxa.
//! * [VertexIndex] as type used to index vertices in tree
//! * [PostOrderIter], [PreOrderIter] and [LeafIter] for traversal

use crate::model::taxon::{CharacterState, Taxon, TaxonSource};
use crate::model::vertex::{BranchLength, Vertex};

/// Float comparison tolerance
const EPSILON: f64 = 1e-7;

/// Index of a vertex in a tree (arena).
pub type VertexIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A rooted binary phylogenetic tree represented using the arena pattern
/// on [Vertex].
///
/// Vertices are stored in a contiguous vector and referenced by
/// [VertexIndex]. Aim is to avoid referencing troubles as well as to provide
/// efficient memory layout and cache locality for traversal operations.
///
/// Generic over `S`, the character state type of the [Taxon] at each leaf.
///
/// # Structure
/// - All vertices (root, internal, and leaves) are stored in the arena.
/// - Index of root is maintained; it is unset for an empty tree.
/// - A single-taxon tree has a leaf as root.
/// - No assumption on order of indices is maintained.
///   (e.g. leaves must not be first `n` indices)
/// - Branch lengths are optional, but if provided must be non-negative.
///
/// # Construction
/// Add vertices one by one, bottom-up: leaves first, then internal vertices
/// referring to their children, finally the root.
/// Test validity with [`PhyloTree::is_valid()`].
///
/// # Example
/// ```
/// use ngesh::model::{BranchLength, PhyloTree, Taxon};
///
/// let mut tree = PhyloTree::new(2);
/// let a = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::with_chars("Latin", vec!["A"]));
/// let b = tree.add_leaf(Some(BranchLength::new(1.0)), Taxon::with_chars("Oscan", vec!["B"]));
/// tree.add_root((a, b));
///
/// assert!(tree.is_valid());
/// assert_eq!(tree.num_leaves(), 2);
/// assert_eq!(tree.height(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct PhyloTree<S> {
    /// Vertices of this tree (arena pattern)
    vertices: Vec<Vertex<S>>,

    /// Index of the root of this tree, unset while empty
    root_index: Option<VertexIndex>,

    /// Name of tree; optional
    name: Option<String>,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<S> PhyloTree<S> {
    /// Creates a new tree with capacity for a binary tree with `num_leaves` leaves.
    ///
    /// # Arguments
    /// `num_leaves` - expected number of leaves, implying number of vertices; may be `0`
    pub fn new(num_leaves: usize) -> Self {
        let capacity = (2 * num_leaves).saturating_sub(1);
        PhyloTree {
            vertices: Vec::with_capacity(capacity),
            root_index: None,
            name: None,
        }
    }

    /// Creates an empty tree, i.e. one without any vertex.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Attaches a name to this tree.
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a root to the tree, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `children` - Tuple of child indices
    ///
    /// # Returns
    /// The index of the newly created root vertex.
    pub fn add_root(&mut self, children: (VertexIndex, VertexIndex)) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices.push(Vertex::new_root(index, children));

        self.root_index = Some(index);
        self[children.0].set_parent(index);
        self[children.1].set_parent(index);

        index
    }

    /// Adds an internal vertex to the tree, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `children` - Tuple of child indices
    /// * `branch_length` - Length of incoming branch, i.e. distance to parent
    ///
    /// # Returns
    /// The index of the newly created internal vertex.
    pub fn add_internal_vertex(
        &mut self,
        children: (VertexIndex, VertexIndex),
        branch_length: Option<BranchLength>,
    ) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices
            .push(Vertex::new_internal(index, children, branch_length));

        self[children.0].set_parent(index);
        self[children.1].set_parent(index);

        index
    }

    /// Adds a leaf to the tree, assigning a unique index, which gets returned.
    ///
    /// # Arguments
    /// * `branch_length` - Length of incoming branch, i.e. distance to parent
    /// * `taxon` - Taxon represented by this leaf
    ///
    /// # Returns
    /// The index of the newly created leaf vertex.
    pub fn add_leaf(&mut self, branch_length: Option<BranchLength>, taxon: Taxon<S>) -> VertexIndex {
        let index = self.vertices.len();
        self.vertices
            .push(Vertex::new_leaf(index, branch_length, taxon));
        index
    }

    /// Makes the (parentless) vertex at `index` the root of this tree.
    ///
    /// An internal vertex is turned into a [Vertex::Root]; a leaf becomes
    /// the root of a single-taxon tree.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds or the vertex has a parent.
    pub fn set_root(&mut self, index: VertexIndex) {
        assert!(
            !self[index].has_parent(),
            "Vertex {} has a parent and cannot become root",
            index
        );
        self.vertices[index].make_root();
        self.root_index = Some(index);
    }

    /// Returns reference to name of this tree, or `None` if not set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set a name for this tree.
    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = Some(name.into());
    }

    /// Returns whether root of tree has been set.
    pub fn is_root_set(&self) -> bool {
        self.root_index.is_some()
    }

    /// Returns whether this tree has no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the root vertex.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root(&self) -> &Vertex<S> {
        &self[self.root_index()]
    }

    /// Returns the index of the root.
    ///
    /// # Panics
    /// Panics if the root hasn't been set.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index.expect("Root of tree not set")
    }

    /// Returns a reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex(&self, index: VertexIndex) -> &Vertex<S> {
        &self[index]
    }

    /// Returns a mutable reference to the vertex at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn vertex_mut(&mut self, index: VertexIndex) -> &mut Vertex<S> {
        &mut self.vertices[index]
    }

    /// Returns a mutable reference to the taxon of the leaf at `index`,
    /// or `None` if that vertex is not a leaf.
    pub fn taxon_mut(&mut self, index: VertexIndex) -> Option<&mut Taxon<S>> {
        self.vertices[index].taxon_mut()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_leaf()).count()
    }

    /// Returns the number of internal vertices in this tree (root excluded).
    pub fn num_internal(&self) -> usize {
        self.vertices.iter().filter(|&v| v.is_internal()).count()
    }

    /// Returns the number of vertices in this tree.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the height of this tree, that is, the largest distance
    /// of the root to any leaf. For ultrametric trees this is the distance
    /// to each leaf. Missing branch lengths count as `0`; an empty tree has height `0`.
    pub fn height(&self) -> f64 {
        let mut depths = vec![0.0; self.num_vertices()];
        let mut height: f64 = 0.0;

        for vertex in self.pre_order_iter() {
            let depth = match vertex.parent_index() {
                Some(parent) => depths[parent] + vertex.branch_length().map_or(0.0, |bl| *bl),
                None => 0.0,
            };
            depths[vertex.index()] = depth;
            if vertex.is_leaf() {
                height = height.max(depth);
            }
        }

        height
    }

    /// Checks if the tree is ultrametric (all leaves equidistant from root).
    ///
    /// # Returns
    /// `true` if all leaves are at the same distance from the root (within floating point tolerance),
    /// `false` otherwise.
    ///
    /// # Panics
    /// Panics if not all vertices (besides root) have an associated [BranchLength],
    /// which can be checked first with `vertices_have_branch_lengths()`.
    pub fn is_ultrametric(&self) -> bool {
        // Store distance from leaves in subtree to parent for each vertex
        let mut distances = vec![0.0; self.num_vertices()];

        for vertex in self.post_order_iter() {
            if vertex.is_leaf() {
                distances[vertex.index()] = vertex.branch_length().map_or(0.0, |bl| *bl);
            } else {
                let (left, right) = vertex.children().unwrap();
                let left_dist: f64 = distances[left];
                let right_dist: f64 = distances[right];

                if (left_dist - right_dist).abs() > EPSILON {
                    return false;
                }

                if !vertex.is_root() {
                    distances[vertex.index()] = left_dist + *vertex.branch_length().unwrap();
                }
            }
        }

        true
    }

    /// Returns the sum of all branch lengths in the tree.
    pub fn total_branch_length(&self) -> f64 {
        self.vertices
            .iter()
            .filter_map(|v| v.branch_length())
            .map(|bl| *bl)
            .sum::<f64>()
    }

    /// Checks if all non-root vertices have branch lengths set.
    pub fn vertices_have_branch_lengths(&self) -> bool {
        self.vertices
            .iter()
            .filter(|v| v.parent_index().is_some())
            .all(|v| v.has_branch_length())
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - An empty tree is valid; otherwise the root index is set and in bounds
    /// - Root is a Root vertex, or a parentless leaf for a single-taxon tree
    /// - All vertex indices match their position in the arena
    /// - All child indices are valid and point back to correct parent
    /// - All non-root vertices have a valid parent including them as child
    /// - Leaves have non-empty names
    /// - Binary tree invariant: for n leaves, there are 2n-1 vertices
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        let root_index = match self.root_index {
            None => return self.vertices.is_empty(),
            Some(index) => index,
        };

        // Check root index is within bounds and root has no parent
        if root_index >= self.vertices.len() || self.vertices[root_index].has_parent() {
            return false;
        }

        let mut leaf_count = 0;

        for (index, vertex) in self.vertices.iter().enumerate() {
            // Check vertex index matches its arena position
            if vertex.index() != index {
                return false;
            }

            // Check that there is only one root
            if vertex.is_root() && index != root_index {
                return false;
            }

            if let Some(taxon) = vertex.taxon() {
                leaf_count += 1;
                if taxon.name().is_empty() {
                    return false;
                }
            }

            // Check children references
            if let Some((left, right)) = vertex.children() {
                if left >= self.vertices.len() || right >= self.vertices.len() {
                    return false;
                }

                if self.vertices[left].parent_index() != Some(index)
                    || self.vertices[right].parent_index() != Some(index)
                {
                    return false;
                }
            }

            // Check parent references of non-root vertices
            if index != root_index {
                match vertex.parent_index() {
                    None => return false,
                    Some(parent_index) => {
                        if parent_index >= self.vertices.len() {
                            return false;
                        }
                        match self.vertices[parent_index].children() {
                            Some((left, right)) if left == index || right == index => {}
                            _ => return false,
                        }
                    }
                }
            }
        }

        let expected_leaf_count = self.vertices.len().div_ceil(2);
        leaf_count == expected_leaf_count
    }
}

impl<S> std::ops::Index<VertexIndex> for PhyloTree<S> {
    type Output = Vertex<S>;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.vertices[index]
    }
}

impl<S> std::ops::IndexMut<VertexIndex> for PhyloTree<S> {
    fn index_mut(&mut self, index: VertexIndex) -> &mut Self::Output {
        &mut self.vertices[index]
    }
}

impl<S: CharacterState> TaxonSource for PhyloTree<S> {
    type State = S;

    fn taxa(&self) -> impl Iterator<Item = &Taxon<S>> {
        self.leaves().filter_map(Vertex::taxon)
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<S> PhyloTree<S> {
    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Post-order traversal visits each vertex's children before visiting the vertex itself.
    /// This is useful for computing heights, aggregating data from leaves upward, etc.
    pub fn post_order_iter(&self) -> PostOrderIter<'_, S> {
        PostOrderIter::new(self)
    }

    /// Returns an iterator over the tree in pre-order (parents before children).
    ///
    /// Pre-order traversal visits each vertex before visiting its children.
    /// This is useful for propagating data from root to leaves.
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, S> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the leaves, left to right (pre-order).
    ///
    /// This order is stable for a given tree and is the taxon order of every writer.
    ///
    /// # Example
    /// ```
    /// use ngesh::model::{PhyloTree, Taxon};
    ///
    /// let mut tree: PhyloTree<u32> = PhyloTree::new(3);
    /// let c = tree.add_leaf(None, Taxon::new("C"));
    /// let a = tree.add_leaf(None, Taxon::new("A"));
    /// let b = tree.add_leaf(None, Taxon::new("B"));
    /// let ab = tree.add_internal_vertex((a, b), None);
    /// tree.add_root((ab, c));
    ///
    /// let names: Vec<_> = tree.leaves().map(|v| v.taxon().unwrap().name()).collect();
    /// assert_eq!(names, vec!["A", "B", "C"]);
    /// ```
    pub fn leaves(&self) -> LeafIter<'_, S> {
        LeafIter {
            inner: self.pre_order_iter(),
        }
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited after all its descendants have been visited.
pub struct PostOrderIter<'a, S> {
    tree: &'a PhyloTree<S>,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'a, S> PostOrderIter<'a, S> {
    fn new(tree: &'a PhyloTree<S>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index {
            stack.push((root, false));
        }
        PostOrderIter { tree, stack }
    }
}

impl<'a, S> Iterator for PostOrderIter<'a, S> {
    type Item = &'a Vertex<S>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let vertex = &self.tree[index];

            if children_visited || vertex.is_leaf() {
                return Some(vertex);
            } else {
                self.stack.push((index, true));

                // Push children (right first, so left is processed first)
                if let Some((left, right)) = vertex.children() {
                    self.stack.push((right, false));
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each vertex is visited before any of its descendants.
pub struct PreOrderIter<'a, S> {
    tree: &'a PhyloTree<S>,
    stack: Vec<VertexIndex>,
}

impl<'a, S> PreOrderIter<'a, S> {
    fn new(tree: &'a PhyloTree<S>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root_index {
            stack.push(root);
        }
        PreOrderIter { tree, stack }
    }
}

impl<'a, S> Iterator for PreOrderIter<'a, S> {
    type Item = &'a Vertex<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let vertex = &self.tree[index];

        // Push children onto stack (right first, so left is processed first)
        if let Some((left, right)) = vertex.children() {
            self.stack.push(right);
            self.stack.push(left);
        }

        Some(vertex)
    }
}

/// Iterator over the leaves of a tree, left to right.
pub struct LeafIter<'a, S> {
    inner: PreOrderIter<'a, S>,
}

impl<'a, S> Iterator for LeafIter<'a, S> {
    type Item = &'a Vertex<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|v| v.is_leaf())
    }
}
