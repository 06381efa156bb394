//! NEXUS character matrix writer.
//!
//! This module provides:
//! - [CharacterMatrix] - one-hot recoding of the character data of a tree
//! - [NexusWriter] - for writing a matrix as NEXUS DATA block
//!
//! # Quick API
//! For simple use cases:
//! - [`to_nexus`] - returns the NEXUS representation as string
//! - [`write_file`] - writes it to a file
//!
//! # Format
//! ```text
//! #NEXUS
//!
//! begin data;
//!   dimensions ntax=2 nchar=3;
//!   format datatype=standard missing=? gap=-;
//!   matrix
//! Latin    110
//! Oscan    101
//!   ;
//! end;
//! ```
//! States are recoded per character position as a block of binary characters,
//! one per observed state (see [CharacterMatrix]). The gap symbol `-` is
//! declared but never emitted.

mod defs;
mod matrix;
mod writer;

pub use self::matrix::CharacterMatrix;
pub use self::writer::NexusWriter;

use crate::format_error::Result;
use crate::model::TaxonSource;
use std::path::Path;

// ============================================================================
// QUICK WRITING API (public)
// ============================================================================
/// Returns the NEXUS character matrix of the given tree (or taxa) as a string.
///
/// If the taxa carry no character data, the output is annotated with
/// `[WARNING: characters missing from tree]` and has `nchar=0`.
///
/// # Errors
/// [FormatError::EmptyTree](crate::FormatError::EmptyTree) if there are no taxa.
///
/// # Example
/// ```
/// use ngesh::model::Taxon;
///
/// let taxa = vec![
///     Taxon::with_chars("Proto Language", vec![1, 2]),
///     Taxon::with_chars("Daughter", vec![1, 3]),
/// ];
/// let nexus = ngesh::nexus::to_nexus(&taxa)?;
/// assert!(nexus.contains("  dimensions ntax=2 nchar=3;"));
/// assert!(nexus.contains("Proto_Language    110"));
/// # Ok::<(), ngesh::FormatError>(())
/// ```
pub fn to_nexus<T: TaxonSource + ?Sized>(source: &T) -> Result<String> {
    let matrix = CharacterMatrix::from_source(source)?;
    writer::matrix_to_string(&matrix)
}

/// Writes the NEXUS character matrix of the given tree (or taxa) to a file.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
/// * `source` - Tree or taxa to write
///
/// # Errors
/// [FormatError::EmptyTree](crate::FormatError::EmptyTree) if there are no taxa,
/// [FormatError::Io](crate::FormatError::Io) if writing fails.
pub fn write_file<P: AsRef<Path>, T: TaxonSource + ?Sized>(path: P, source: &T) -> Result<()> {
    let matrix = CharacterMatrix::from_source(source)?;
    let mut writer = NexusWriter::create(path)?;
    writer.write_matrix(&matrix)?;
    writer.into_inner()?;
    Ok(())
}
