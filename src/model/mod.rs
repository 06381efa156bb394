//! Data model for rooted binary phylogenetic trees with character data.
//!
//! # Tree representation
//! Trees are represented by [PhyloTree], which uses the arena pattern to store
//! [Vertex] nodes. Each vertex is either a `Root`, `Internal`, or `Leaf`,
//! referenced by [VertexIndex]. A tree may also be empty or consist of a
//! single leaf.
//!
//! # Taxa and characters
//! Each leaf carries a [Taxon]: a name plus an optional vector of character
//! states. States are opaque values implementing [CharacterState]
//! (`Clone + Eq + Hash + Display`), e.g. `u32` cognate classes from the
//! [simulator](crate::sim) or `&str` values in hand-built trees.
//!
//! Writers read taxa through the [TaxonSource] trait, implemented by
//! [PhyloTree] (leaves in pre-order) and by plain `[Taxon<S>]` slices.
//!
//! # State alphabets
//! [StateAlphabet] is an insertion-ordered set used to enumerate the
//! observed states of a character deterministically.

pub mod alphabet;
pub mod taxon;
pub mod tree;
pub mod vertex;

// Tree
pub use tree::LeafIter;
pub use tree::PhyloTree;
pub use tree::VertexIndex;
pub use vertex::BranchLength;
pub use vertex::Vertex;
// Taxa
pub use taxon::CharacterState;
pub use taxon::Taxon;
pub use taxon::TaxonSource;
// Alphabets
pub use alphabet::StateAlphabet;
pub use alphabet::StateIndex;
