//! Leaf name generation for simulated trees.

use crate::sim::config::LabelStyle;
use rand::Rng;
use std::collections::HashSet;

const ONSETS: &[&str] = &[
    "b", "d", "f", "g", "h", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z", "ch", "sh", "th",
];
const NUCLEI: &[&str] = &["a", "e", "i", "o", "u", "ai", "ei", "ou"];
const CODAS: &[&str] = &["", "", "", "n", "r", "s", "l", "k"];

/// Pseudo-words tried before falling back to a numbered suffix
const MAX_WORD_TRIES: usize = 64;

/// Generates `count` distinct leaf names in the given style.
pub(crate) fn generate_labels<R: Rng>(style: LabelStyle, count: usize, rng: &mut R) -> Vec<String> {
    match style {
        LabelStyle::Enum => enumerated_labels(count),
        LabelStyle::Human => human_labels(count, rng),
    }
}

/// `L1` .. `Ln`, zero-padded to the number of digits of `n`.
fn enumerated_labels(count: usize) -> Vec<String> {
    let width = count.to_string().len();
    (1..=count).map(|i| format!("L{i:0width$}")).collect()
}

fn human_labels<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    let mut seen = HashSet::with_capacity(count);
    let mut labels = Vec::with_capacity(count);

    while labels.len() < count {
        let mut word = pseudo_word(rng);
        let mut tries = 1;
        while seen.contains(&word) && tries < MAX_WORD_TRIES {
            word = pseudo_word(rng);
            tries += 1;
        }
        if seen.contains(&word) {
            word = format!("{word}{}", labels.len() + 1);
        }
        seen.insert(word.clone());
        labels.push(word);
    }

    labels
}

/// Two to three syllables, capitalized.
fn pseudo_word<R: Rng>(rng: &mut R) -> String {
    let num_syllables = rng.random_range(2..=3);
    let mut word = String::new();
    for i in 0..num_syllables {
        word.push_str(ONSETS[rng.random_range(0..ONSETS.len())]);
        word.push_str(NUCLEI[rng.random_range(0..NUCLEI.len())]);
        if i + 1 == num_syllables {
            word.push_str(CODAS[rng.random_range(0..CODAS.len())]);
        }
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => word,
    }
}
