//! Wordlist writer for any [TaxonSource].

use crate::format_error::{FormatError, Result};
use crate::model::{Taxon, TaxonSource};
use crate::utils::TextSink;
use crate::wordlist::defs::{FEATURE_PREFIX, MISSING_VALUE, WORDLIST_HEADER};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =#========================================================================#=
// RAGGED POLICY
// =#========================================================================#=
/// How to handle taxa whose character count differs from that of the
/// first characterized taxon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RaggedPolicy {
    /// Fail with [FormatError::InconsistentCharacterCount].
    #[default]
    Reject,
    /// Pad short or absent character vectors with `?` and ignore extra characters.
    PadMissing,
}

// =#========================================================================#=
// WORDLIST WRITER
// =#========================================================================#=
/// Writer for the character data of a tree as a long-format CSV wordlist.
///
/// One row `<taxon>,feature_<index>,<state>` is emitted per taxon and
/// character index, below the header `Language_ID,Feature_ID,Value`.
/// Rows are LF-separated without trailing newline; names and states are
/// written verbatim (no quoting).
///
/// The number of characters is taken from the first taxon (in source order)
/// with a non-empty character vector. If there is none, only the header is
/// written.
///
/// # Example
/// ```
/// use ngesh::model::Taxon;
/// use ngesh::wordlist::{RaggedPolicy, WordlistWriter};
///
/// let taxa = vec![
///     Taxon::with_chars("Latin", vec![1, 2]),
///     Taxon::with_chars("Oscan", vec![1]),
/// ];
/// let csv = WordlistWriter::new()
///     .with_ragged_policy(RaggedPolicy::PadMissing)
///     .to_wordlist(&taxa)?;
/// assert_eq!(csv.lines().last(), Some("Oscan,feature_1,?"));
/// # Ok::<(), ngesh::FormatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordlistWriter {
    ragged_policy: RaggedPolicy,
}

// ============================================================================
// API (public)
// ============================================================================
impl WordlistWriter {
    /// Creates a writer with the default [RaggedPolicy::Reject].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy for taxa with deviating character counts.
    pub fn with_ragged_policy(mut self, policy: RaggedPolicy) -> Self {
        self.ragged_policy = policy;
        self
    }

    /// Returns the configured [RaggedPolicy].
    pub fn ragged_policy(&self) -> RaggedPolicy {
        self.ragged_policy
    }

    /// Returns the wordlist for the given taxa as a string.
    ///
    /// # Errors
    /// * [FormatError::EmptyTree] if there are no taxa
    /// * [FormatError::InconsistentCharacterCount] under [RaggedPolicy::Reject]
    pub fn to_wordlist<T: TaxonSource + ?Sized>(&self, source: &T) -> Result<String> {
        let buffer = self.write(Vec::new(), source)?;
        // Only `&str` and `Display` output goes into the buffer
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes the wordlist for the given taxa to a file.
    ///
    /// # Errors
    /// Same as [to_wordlist](Self::to_wordlist), plus [FormatError::Io].
    pub fn write_file<P: AsRef<Path>, T: TaxonSource + ?Sized>(&self, path: P, source: &T) -> Result<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file), source)?;
        Ok(())
    }

    /// Writes the wordlist to any [Write], returning it afterwards.
    ///
    /// The input is fully validated before the first byte is written.
    pub fn write<W: Write, T: TaxonSource + ?Sized>(&self, out: W, source: &T) -> Result<W> {
        let num_chars = self.validate(source)?;

        let mut sink = TextSink::new(out);
        sink.write_str(WORDLIST_HEADER)?;
        for taxon in source.taxa() {
            write_rows(&mut sink, taxon, num_chars)?;
        }

        Ok(sink.finish()?)
    }
}

// ============================================================================
// Validation & rows (private)
// ============================================================================
impl WordlistWriter {
    /// Checks the taxa against the ragged policy, returning the number of characters.
    fn validate<T: TaxonSource + ?Sized>(&self, source: &T) -> Result<usize> {
        if source.taxa().next().is_none() {
            return Err(FormatError::EmptyTree);
        }

        let num_chars = count_chars(source);
        if num_chars == 0 || self.ragged_policy == RaggedPolicy::PadMissing {
            return Ok(num_chars);
        }

        match source.taxa().find(|taxon| taxon.num_chars() != num_chars) {
            Some(taxon) => Err(FormatError::InconsistentCharacterCount {
                taxon: taxon.name().to_string(),
                expected: num_chars,
                found: taxon.num_chars(),
            }),
            None => Ok(num_chars),
        }
    }
}

/// Number of characters of the first taxon with a non-empty character vector, else `0`.
fn count_chars<T: TaxonSource + ?Sized>(source: &T) -> usize {
    source
        .taxa()
        .map(Taxon::num_chars)
        .find(|&n| n > 0)
        .unwrap_or(0)
}

/// Writes the rows `\n<name>,feature_<i>,<state>` of one taxon.
fn write_rows<W: Write, S: std::fmt::Display>(
    sink: &mut TextSink<W>,
    taxon: &Taxon<S>,
    num_chars: usize,
) -> std::io::Result<()> {
    let chars = taxon.chars().unwrap_or(&[]);
    for idx in 0..num_chars {
        sink.newline()?
            .write_str(taxon.name())?
            .comma()?
            .write_str(FEATURE_PREFIX)?
            .write_display(&idx)?
            .comma()?;
        match chars.get(idx) {
            Some(state) => sink.write_display(state)?,
            None => sink.write_str(MISSING_VALUE)?,
        };
    }
    Ok(())
}
