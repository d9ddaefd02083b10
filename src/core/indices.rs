use hashbrown::HashMap;

use super::store::{BackingStore, Record};

/// Lifecycle of a [`KeyIndex`]. There is no transition back to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIndexState {
    /// `build` has never run.
    Empty,
    /// Reflects the store as of the last `build`.
    Built,
}

/// Key to store-position map captured by [`KeyIndex::build`].
///
/// Mutations made to the store after a build are not tracked. Positions may
/// then name a different record, or none at all, until the next build.
#[derive(Debug, Clone)]
pub struct KeyIndex {
    positions: HashMap<String, usize>,
    state: KeyIndexState,
}

impl Default for KeyIndex {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
            state: KeyIndexState::Empty,
        }
    }
}

impl KeyIndex {
    /// Creates an index in the `Empty` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries with the current contents of `store`.
    ///
    /// Later positions win when keys repeat. Returns how many entries were
    /// replaced that way.
    pub fn build<S: BackingStore>(&mut self, store: &S) -> usize {
        let mut positions = HashMap::with_capacity(store.len());
        let mut replaced = 0;
        for idx in 0..store.len() {
            let Some(rec) = store.get(idx) else {
                continue;
            };
            if positions.insert(rec.key().to_string(), idx).is_some() {
                replaced += 1;
            }
        }
        self.positions = positions;
        self.state = KeyIndexState::Built;
        replaced
    }

    /// Store position recorded for `key` at the last build.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> KeyIndexState {
        self.state
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no keys are indexed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
