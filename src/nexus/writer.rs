//! NEXUS DATA block writer (for [CharacterMatrix]).

use crate::format_error::Result;
use crate::nexus::defs::{
    BEGIN_DATA, BLOCK_END, DIMENSIONS, FORMAT_STANDARD, INDENT, MATRIX, MISSING_CHARS_WARNING,
    NAME_PADDING, NCHAR, NEXUS_HEADER, NTAX,
};
use crate::nexus::matrix::CharacterMatrix;
use crate::utils::TextSink;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// =#========================================================================#=
// NEXUS WRITER
// =#========================================================================#=
/// Writer for a [CharacterMatrix] as a NEXUS file with a single DATA block.
///
/// # Format Structure
/// The writer produces the following lines, LF-separated and without
/// trailing newline:
/// - `#NEXUS` header and a blank line
/// - optionally `[WARNING: characters missing from tree]` and a blank line
/// - `begin data;`
/// - `  dimensions ntax=<N> nchar=<L>;`
/// - `  format datatype=standard missing=? gap=-;`
/// - `  matrix`, followed by one row per taxon
/// - `  ;` and `end;`
///
/// Each row is the taxon name (spaces replaced by underscores), left-aligned
/// in a field three columns wider than the longest name, followed by a
/// space and the binary string.
///
/// # Example
/// ```ignore
/// use ngesh::nexus::{CharacterMatrix, NexusWriter};
/// use std::fs::File;
///
/// let matrix = CharacterMatrix::from_source(&tree)?;
/// let mut writer = NexusWriter::new(File::create("characters.nex")?);
/// writer.write_matrix(&matrix)?;
/// ```
pub struct NexusWriter<W: Write> {
    sink: TextSink<W>,
}

// ============================================================================
// API (public)
// ============================================================================
impl NexusWriter<BufWriter<File>> {
    /// Creates a new buffered NEXUS writer for the file at the given path.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(NexusWriter::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> NexusWriter<W> {
    /// Creates a new NEXUS writer on top of the given output.
    pub fn new(out: W) -> NexusWriter<W> {
        NexusWriter {
            sink: TextSink::new(out),
        }
    }

    /// Writes a complete NEXUS file for the given matrix.
    ///
    /// # Errors
    /// Returns an I/O error if writing fails
    pub fn write_matrix(&mut self, matrix: &CharacterMatrix) -> io::Result<()> {
        self.header(matrix)?
            .dimensions(matrix)?
            .matrix_cmd(matrix)?;
        self.sink.write_all(BLOCK_END)?;
        Ok(())
    }

    /// Flushes and returns the underlying output.
    pub fn into_inner(self) -> io::Result<W> {
        self.sink.finish()
    }
}

/// Returns the NEXUS representation of a matrix as a string.
pub(crate) fn matrix_to_string(matrix: &CharacterMatrix) -> Result<String> {
    let mut writer = NexusWriter::new(Vec::new());
    writer.write_matrix(matrix)?;
    let buffer = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

// ============================================================================
// Block & Command Writing (private)
// ============================================================================
impl<W: Write> NexusWriter<W> {
    /// Writes "#NEXUS", the optional warning and "begin data;", returning itself for chaining.
    fn header(&mut self, matrix: &CharacterMatrix) -> io::Result<&mut Self> {
        self.sink.write_all(NEXUS_HEADER)?.newline()?.newline()?;

        if matrix.is_characters_missing() {
            self.sink
                .write_all(MISSING_CHARS_WARNING)?
                .newline()?
                .newline()?;
        }

        self.sink.write_all(BEGIN_DATA)?.newline()?;
        Ok(self)
    }

    /// Writes the dimensions and format commands, returning itself for chaining.
    fn dimensions(&mut self, matrix: &CharacterMatrix) -> io::Result<&mut Self> {
        // "  dimensions ntax=N nchar=L;"
        self.sink
            .write_all(INDENT)?
            .write_all(DIMENSIONS)?
            .space()?
            .write_all(NTAX)?
            .equals()?
            .write_display(&matrix.ntax())?
            .space()?
            .write_all(NCHAR)?
            .equals()?
            .write_display(&matrix.nchar())?
            .semicolon()?
            .newline()?;

        // "  format datatype=standard missing=? gap=-;"
        self.sink
            .write_all(INDENT)?
            .write_all(FORMAT_STANDARD)?
            .newline()?;

        Ok(self)
    }

    /// Writes the matrix command with one aligned row per taxon, returning itself for chaining.
    fn matrix_cmd(&mut self, matrix: &CharacterMatrix) -> io::Result<&mut Self> {
        self.sink.write_all(INDENT)?.write_all(MATRIX)?.newline()?;

        let width = matrix.max_name_len() + NAME_PADDING;
        for (name, bits) in matrix.rows() {
            let name = name.replace(' ', "_");
            self.sink
                .write_str(&format!("{name:<width$}"))?
                .space()?
                .write_str(bits)?
                .newline()?;
        }

        // "  ;"
        self.sink.write_all(INDENT)?.semicolon()?.newline()?;
        Ok(self)
    }
}
