use serde::{Deserialize, Serialize};

/// A stored entry that can be overwritten in place by another entry.
pub trait Record: Clone + Default {
    /// Overwrites `self` with a deep copy of `other`.
    fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Identifier used by the key index.
    fn key(&self) -> &str;
}

/// Ordered, 0-indexed container owned by an enclosing message.
///
/// Index arguments to `insert` and `remove` are checked by the caller;
/// implementations may panic on out-of-range positions like `Vec` does.
pub trait BackingStore {
    /// Stored element type.
    type Record: Record;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Record at `index`, if any.
    fn get(&self, index: usize) -> Option<&Self::Record>;

    /// Mutable record at `index`, if any.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Record>;

    /// Inserts `record` at `index`, shifting later records right.
    fn insert(&mut self, index: usize, record: Self::Record);

    /// Removes and returns the record at `index`, shifting later records left.
    fn remove(&mut self, index: usize) -> Self::Record;

    /// Appends a default slot and returns it for filling.
    fn add(&mut self) -> &mut Self::Record;

    /// Drops every record at or past `len`.
    fn truncate(&mut self, len: usize);

    /// True when no records are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed repeated field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepeatedField<R> {
    records: Vec<R>,
}

impl<R> Default for RepeatedField<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> RepeatedField<R> {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps already-decoded records.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Stored records in order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the field, returning its records.
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<R> FromIterator<R> for RepeatedField<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<R: Record> BackingStore for RepeatedField<R> {
    type Record = R;

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut R> {
        self.records.get_mut(index)
    }

    fn insert(&mut self, index: usize, record: R) {
        self.records.insert(index, record);
    }

    fn remove(&mut self, index: usize) -> R {
        self.records.remove(index)
    }

    fn add(&mut self) -> &mut R {
        let idx = self.records.len();
        self.records.push(R::default());
        &mut self.records[idx]
    }

    fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }
}
