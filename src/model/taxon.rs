//! Taxa carried by the leaves of a tree, and the [TaxonSource] contract
//! that the writers consume.

use std::fmt::Display;
use std::hash::Hash;

// =#========================================================================#=
// CHARACTER STATE (trait)
// =#========================================================================#=
/// Value a taxon holds for a character, e.g. a cognate class or a trait category.
///
/// States are opaque: writers only compare, hash and print them.
/// Blanket-implemented for every type with these capabilities.
pub trait CharacterState: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> CharacterState for T {}

// =#========================================================================#=
// TAXON
// =#========================================================================#=
/// A named unit under study (language, species, ...) as represented by a leaf.
///
/// The character vector is optional: trees may come without any character
/// data (e.g. topology-only simulations), which writers treat as a
/// degenerate but valid input.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxon<S> {
    name: String,
    chars: Option<Vec<S>>,
    extinct: bool,
}

impl<S> Taxon<S> {
    /// Creates a taxon without character data.
    pub fn new<N: Into<String>>(name: N) -> Self {
        Taxon {
            name: name.into(),
            chars: None,
            extinct: false,
        }
    }

    /// Creates a taxon with the given character vector.
    pub fn with_chars<N: Into<String>>(name: N, chars: Vec<S>) -> Self {
        Taxon {
            name: name.into(),
            chars: Some(chars),
            extinct: false,
        }
    }

    /// Marks this taxon as extinct (lineage died out before the present).
    pub fn into_extinct(mut self) -> Self {
        self.extinct = true;
        self
    }

    /// Returns the name of this taxon.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames this taxon.
    pub fn set_name<N: Into<String>>(&mut self, name: N) {
        self.name = name.into();
    }

    /// Returns the character vector, or `None` if this taxon carries no character data.
    pub fn chars(&self) -> Option<&[S]> {
        self.chars.as_deref()
    }

    /// Replaces the character vector.
    pub fn set_chars(&mut self, chars: Option<Vec<S>>) {
        self.chars = chars;
    }

    /// Returns whether character data is present (possibly empty).
    pub fn has_characters(&self) -> bool {
        self.chars.is_some()
    }

    /// Returns the number of characters, `0` if none are present.
    pub fn num_chars(&self) -> usize {
        self.chars.as_ref().map_or(0, Vec::len)
    }

    /// Returns whether this taxon went extinct.
    pub fn is_extinct(&self) -> bool {
        self.extinct
    }
}

// =#========================================================================#=
// TAXON SOURCE (trait)
// =#========================================================================#=
/// Read-only access to the taxa of a tree, in a stable traversal order.
///
/// This is the whole surface the [wordlist](crate::wordlist) and
/// [NEXUS](crate::nexus) writers consume. Implemented for
/// [PhyloTree](crate::model::PhyloTree) (leaves in pre-order)
/// and for plain slices of [Taxon].
pub trait TaxonSource {
    /// Character state type of the taxa.
    type State: CharacterState;

    /// Returns the taxa in deterministic order; this order is the output order of writers.
    fn taxa(&self) -> impl Iterator<Item = &Taxon<Self::State>>;

    /// Returns whether the taxa carry character data at all.
    ///
    /// Defaults to every taxon having a (possibly empty) character vector.
    fn has_characters(&self) -> bool {
        self.taxa().all(|taxon| taxon.has_characters())
    }
}

impl<S: CharacterState> TaxonSource for [Taxon<S>] {
    type State = S;

    fn taxa(&self) -> impl Iterator<Item = &Taxon<S>> {
        self.iter()
    }
}

impl<S: CharacterState> TaxonSource for Vec<Taxon<S>> {
    type State = S;

    fn taxa(&self) -> impl Iterator<Item = &Taxon<S>> {
        self.iter()
    }
}
