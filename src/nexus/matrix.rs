//! One-hot recoding of character data into a binary NEXUS matrix.

use crate::format_error::{FormatError, Result};
use crate::model::{CharacterState, StateAlphabet, TaxonSource};
use std::collections::HashMap;

// =#========================================================================#=
// CHARACTER MATRIX
// =#========================================================================#=
/// Binary (one-hot) character matrix of a set of taxa.
///
/// Every character position gets an alphabet of the distinct states observed
/// at that position across all taxa, in first-seen order. A taxon whose
/// character vector is shorter than the longest one has a *missing* state at
/// the positions past its end, and missing counts as a state of its own.
/// Each taxon is then recoded as one bit per (position, alphabet state), so all
/// rows have the same length [nchar](CharacterMatrix::nchar).
///
/// Taxa with the same name are collapsed into the row of the first occurrence,
/// carrying the characters of the last occurrence.
///
/// # Example
/// ```
/// use ngesh::model::Taxon;
/// use ngesh::nexus::CharacterMatrix;
///
/// let taxa = vec![
///     Taxon::with_chars("Latin", vec!["A", "B"]),
///     Taxon::with_chars("Oscan", vec!["A", "C"]),
/// ];
/// let matrix = CharacterMatrix::from_source(&taxa)?;
/// assert_eq!(matrix.ntax(), 2);
/// assert_eq!(matrix.nchar(), 3);
/// assert_eq!(matrix.row("Latin"), Some("110"));
/// assert_eq!(matrix.row("Oscan"), Some("101"));
/// # Ok::<(), ngesh::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterMatrix {
    /// Pairs of taxon name and binary string, in taxon order
    rows: Vec<(String, String)>,
    /// Length of every binary string
    nchar: usize,
    /// Whether the taxa came without character data
    characters_missing: bool,
}

impl CharacterMatrix {
    /// Builds the matrix from the taxa of a tree.
    ///
    /// If the source reports no character data
    /// ([has_characters](TaxonSource::has_characters) is `false`), every taxon
    /// gets an empty row and the matrix is flagged as missing characters.
    ///
    /// # Errors
    /// [FormatError::EmptyTree] if there are no taxa.
    pub fn from_source<T: TaxonSource + ?Sized>(source: &T) -> Result<Self> {
        let characters_missing = !source.has_characters();
        let data = collect_taxa(source, characters_missing);
        if data.is_empty() {
            return Err(FormatError::EmptyTree);
        }

        let alphabets = derive_alphabets(&data);
        let nchar = alphabets.iter().map(StateAlphabet::len).sum();

        let rows = data
            .iter()
            .map(|(name, chars)| {
                let mut bits = String::with_capacity(nchar);
                for (position, alphabet) in alphabets.iter().enumerate() {
                    alphabet.push_one_hot(&chars.get(position), &mut bits);
                }
                (name.to_string(), bits)
            })
            .collect();

        Ok(CharacterMatrix {
            rows,
            nchar,
            characters_missing,
        })
    }

    /// Returns the number of taxa (rows).
    pub fn ntax(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of binary characters (length of each row).
    pub fn nchar(&self) -> usize {
        self.nchar
    }

    /// Returns whether the taxa came without character data.
    pub fn is_characters_missing(&self) -> bool {
        self.characters_missing
    }

    /// Returns the pairs of taxon name and binary string, in taxon order.
    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    /// Returns the binary string of the named taxon, if present.
    pub fn row(&self, name: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(taxon, _)| taxon == name)
            .map(|(_, bits)| bits.as_str())
    }

    /// Returns the length (in chars) of the longest taxon name.
    pub fn max_name_len(&self) -> usize {
        self.rows
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
/// Collects `(name, chars)` in taxon order, collapsing duplicate names.
fn collect_taxa<T: TaxonSource + ?Sized>(
    source: &T,
    characters_missing: bool,
) -> Vec<(&str, &[T::State])> {
    let mut data: Vec<(&str, &[T::State])> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for taxon in source.taxa() {
        let chars: &[T::State] = if characters_missing {
            &[]
        } else {
            taxon.chars().unwrap_or(&[])
        };

        match positions.get(taxon.name()) {
            Some(&position) => data[position].1 = chars,
            None => {
                positions.insert(taxon.name(), data.len());
                data.push((taxon.name(), chars));
            }
        }
    }

    data
}

/// Derives one alphabet per character position, `None` standing for missing.
fn derive_alphabets<'a, S: CharacterState>(
    data: &[(&str, &'a [S])],
) -> Vec<StateAlphabet<Option<&'a S>>> {
    let num_positions = data.iter().map(|(_, chars)| chars.len()).max().unwrap_or(0);

    (0..num_positions)
        .map(|position| {
            let mut alphabet = StateAlphabet::new();
            for &(_, chars) in data {
                alphabet.get_or_insert(chars.get(position));
            }
            alphabet
        })
        .collect()
}
