//! Ngesh is a library to simulate phylogenetic trees with character data
//! and to write them out for downstream analysis tools.
//!
//! Core functionality provided:
//! - Tree model: [PhyloTree](crate::model::PhyloTree), a binary tree in arena
//!   layout whose leaves carry a [Taxon](crate::model::Taxon) with an optional
//!   vector of character states. See [crate::model] for more details.
//! - Simulation: birth-death trees with characters evolving along the
//!   branches, configurable in code or from TOML. See [crate::sim].
//! - Output formats:
//!   - Wordlist: long-format CSV with one row per taxon and character,
//!     see [crate::wordlist].
//!   - NEXUS: binary (one-hot) character matrix in a DATA block,
//!     see [crate::nexus].
//!   - Newick: tree topology and branch lengths, see [crate::newick].
//!
//! Writers accept anything implementing [TaxonSource](crate::model::TaxonSource),
//! so plain slices of taxa work as well as trees.
//!
//! Limitations:
//! - Only binary trees
//! - No quoting in wordlist output; names and states must not contain commas
//!
//! # Usage patterns
//! 1. Quick functions with default settings: [simulate_tree],
//!    [tree_to_wordlist], [tree_to_nexus] and the `write_file`
//!    functions of each format module.
//! 2. [WordlistWriter](crate::wordlist::WordlistWriter),
//!    [NexusWriter](crate::nexus::NexusWriter) and
//!    [SimulationConfig](crate::sim::SimulationConfig) for full control.
//!
//! ## Example
//! ```
//! use ngesh::sim::SimulationConfig;
//!
//! let config = SimulationConfig::new()
//!     .with_rates(1.0, 0.0)
//!     .with_min_leaves(Some(5))
//!     .with_num_chars(8)
//!     .with_seed(1);
//! let tree = ngesh::simulate_tree(&config)?;
//!
//! let wordlist = ngesh::tree_to_wordlist(&tree)?;
//! assert!(wordlist.starts_with("Language_ID,Feature_ID,Value"));
//!
//! let nexus = ngesh::tree_to_nexus(&tree)?;
//! assert!(nexus.contains("dimensions ntax=5"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod model;
pub mod newick;
pub mod nexus;
pub mod sim;
pub mod utils;
pub mod wordlist;

mod format_error;

pub use crate::format_error::{FormatError, Result};

use crate::model::{PhyloTree, TaxonSource};
use crate::sim::{SimulationConfig, SimulationError};

// ============================================================================
// Quick Formatting API
// ============================================================================
/// Returns the wordlist CSV of the given tree (or taxa) using default settings.
///
/// See [`wordlist::to_wordlist`] for full documentation.
pub fn tree_to_wordlist<T: TaxonSource + ?Sized>(source: &T) -> Result<String> {
    wordlist::to_wordlist(source)
}

/// Returns the NEXUS character matrix of the given tree (or taxa).
///
/// See [`nexus::to_nexus`] for full documentation.
pub fn tree_to_nexus<T: TaxonSource + ?Sized>(source: &T) -> Result<String> {
    nexus::to_nexus(source)
}

// ============================================================================
// Quick Simulation API
// ============================================================================
/// Simulates a tree with character data.
///
/// See [`sim::simulate`] for full documentation.
pub fn simulate_tree(config: &SimulationConfig) -> std::result::Result<PhyloTree<u32>, SimulationError> {
    sim::simulate(config)
}
