//! NEXUS format constants for the DATA block writer.

/// NEXUS file header "#NEXUS"
pub(crate) const NEXUS_HEADER: &[u8] = b"#NEXUS";

/// Annotation emitted when the taxa carry no character data
pub(crate) const MISSING_CHARS_WARNING: &[u8] = b"[WARNING: characters missing from tree]";

/// DATA block begin "begin data;" (with semicolon)
pub(crate) const BEGIN_DATA: &[u8] = b"begin data;";

/// Block end keyword "end;" (with semicolon)
pub(crate) const BLOCK_END: &[u8] = b"end;";

/// Indentation of commands within the DATA block
pub(crate) const INDENT: &[u8] = b"  ";

/// DATA block dimensions keyword "dimensions"
pub(crate) const DIMENSIONS: &[u8] = b"dimensions";

/// Number of taxa parameter "ntax"
pub(crate) const NTAX: &[u8] = b"ntax";

/// Number of characters parameter "nchar"
pub(crate) const NCHAR: &[u8] = b"nchar";

/// Format command for binary standard data, `?` missing and `-` gap symbols
pub(crate) const FORMAT_STANDARD: &[u8] = b"format datatype=standard missing=? gap=-;";

/// Matrix command keyword "matrix"
pub(crate) const MATRIX: &[u8] = b"matrix";

/// Extra columns between the longest taxon name and the matrix row
pub(crate) const NAME_PADDING: usize = 3;
