//! Error type for the wordlist, NEXUS and Newick writers.
//!
//! This module provides [FormatError], reported when a tree cannot be
//! serialized or the result cannot be written.

use std::io;
use thiserror::Error;

/// Result alias for writer operations.
pub type Result<T> = std::result::Result<T, FormatError>;

// =#========================================================================#=
// FORMAT ERROR
// =#========================================================================#=
/// Errors that can occur while formatting a tree.
///
/// Missing character data is not an error; writers degrade to a
/// header-only wordlist or an annotated, empty NEXUS matrix.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Tree has no taxa; alignment width and matrix dimensions are undefined.
    #[error("Tree has no taxa")]
    EmptyTree,

    /// A taxon disagrees with the character count of the first characterized taxon.
    #[error("Taxon '{taxon}' has {found} characters, expected {expected}")]
    InconsistentCharacterCount {
        /// Name of the offending taxon
        taxon: String,
        /// Character count of the first characterized taxon
        expected: usize,
        /// Character count of the offending taxon
        found: usize,
    },

    /// Writing the output failed.
    #[error("IO error - {0}")]
    Io(#[from] io::Error),
}
