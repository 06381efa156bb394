//! Wordlist (long-format CSV) writer for the character data of a tree.
//!
//! This module provides:
//! - [WordlistWriter] - configurable writer (see [RaggedPolicy])
//! - [`to_wordlist`], [`write_file`] - quick API with default settings
//!
//! # Format
//! ```text
//! Language_ID,Feature_ID,Value
//! Latin,feature_0,1
//! Latin,feature_1,2
//! Oscan,feature_0,1
//! Oscan,feature_1,3
//! ```
//! Feature identifiers are positional; the character index is the only
//! stable key. No quoting is performed, so names and states must not
//! contain commas.

mod defs;
mod writer;

pub use self::writer::{RaggedPolicy, WordlistWriter};

use crate::format_error::Result;
use crate::model::TaxonSource;
use std::path::Path;

// ============================================================================
// QUICK WRITING API (pub)
// ============================================================================
/// Returns the wordlist of the given tree (or taxa) using default settings,
/// i.e. rejecting taxa with deviating character counts.
///
/// # Errors
/// * [FormatError::EmptyTree](crate::FormatError::EmptyTree) if there are no taxa
/// * [FormatError::InconsistentCharacterCount](crate::FormatError::InconsistentCharacterCount)
///   if taxa disagree on their number of characters
///
/// # Example
/// ```
/// use ngesh::model::Taxon;
///
/// let taxa = vec![Taxon::with_chars("Latin", vec!["A", "B"])];
/// let csv = ngesh::wordlist::to_wordlist(&taxa)?;
/// assert_eq!(csv, "Language_ID,Feature_ID,Value\nLatin,feature_0,A\nLatin,feature_1,B");
/// # Ok::<(), ngesh::FormatError>(())
/// ```
pub fn to_wordlist<T: TaxonSource + ?Sized>(source: &T) -> Result<String> {
    WordlistWriter::new().to_wordlist(source)
}

/// Writes the wordlist of the given tree (or taxa) to a file using default settings.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
/// * `source` - Tree or taxa to write
pub fn write_file<P: AsRef<Path>, T: TaxonSource + ?Sized>(path: P, source: &T) -> Result<()> {
    WordlistWriter::new().write_file(path, source)
}
