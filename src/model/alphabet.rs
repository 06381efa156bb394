//! Ordered state alphabets for characters.
//!
//! - [StateAlphabet]: Insertion-ordered set of observed states of one character.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Index of a state within its [StateAlphabet].
pub type StateIndex = usize;

// =#========================================================================#=
// STATE ALPHABET
// =#========================================================================#=
/// Ordered set of the distinct states observed for one character.
///
/// States are kept in first-seen order, with a map from state to its index
/// for membership tests. Inserting the same state twice returns the same index,
/// so the enumeration order is fully determined by the insertion sequence.
///
/// # Example
/// ```
/// use ngesh::model::StateAlphabet;
///
/// let mut alphabet = StateAlphabet::new();
///
/// let idx_b = alphabet.get_or_insert("B");  // idx_b = 0
/// let idx_a = alphabet.get_or_insert("A");  // idx_a = 1
/// let idx_b2 = alphabet.get_or_insert("B"); // idx_b2 = 0 (deduplicated)
///
/// assert_eq!(idx_b, idx_b2);
/// assert_eq!(alphabet.states(), &["B", "A"]);
/// assert_eq!(alphabet.index_of(&"A"), Some(idx_a));
/// ```
#[derive(Debug, Clone)]
pub struct StateAlphabet<T> {
    /// Distinct states in first-seen order
    states: Vec<T>,
    /// Map from state to its index
    map: HashMap<T, StateIndex>,
}

impl<T: Clone + Eq + Hash> StateAlphabet<T> {
    /// Creates a new, empty alphabet.
    pub fn new() -> Self {
        StateAlphabet {
            states: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Gets the index for a state, inserting it if not seen before.
    ///
    /// # Arguments
    /// * `state` - The state to look up or insert
    ///
    /// # Returns
    /// The index associated with this state
    pub fn get_or_insert(&mut self, state: T) -> StateIndex {
        if let Some(&index) = self.map.get(&state) {
            index
        } else {
            let index = self.states.len();
            self.states.push(state.clone());
            self.map.insert(state, index);
            index
        }
    }

    /// Returns the index of a state, or `None` if it was never observed.
    pub fn index_of(&self, state: &T) -> Option<StateIndex> {
        self.map.get(state).copied()
    }

    /// Checks if a state has been observed.
    pub fn contains(&self, state: &T) -> bool {
        self.map.contains_key(state)
    }

    /// Returns the number of distinct states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns whether no state has been observed.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the states in enumeration (first-seen) order.
    pub fn states(&self) -> &[T] {
        &self.states
    }

    /// Appends the one-hot encoding of `state` to `bits`: one `'1'` or `'0'`
    /// per alphabet state, in enumeration order.
    pub fn push_one_hot(&self, state: &T, bits: &mut String) {
        for candidate in &self.states {
            bits.push(if candidate == state { '1' } else { '0' });
        }
    }
}

impl<T: Clone + Eq + Hash> Default for StateAlphabet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for StateAlphabet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "StateAlphabet ({} states):", self.states.len())?;
        for (idx, state) in self.states.iter().enumerate() {
            writeln!(f, "  [{}] {:?}", idx, state)?;
        }
        Ok(())
    }
}

impl<T> std::ops::Index<StateIndex> for StateAlphabet<T> {
    type Output = T;

    fn index(&self, index: StateIndex) -> &Self::Output {
        &self.states[index]
    }
}
