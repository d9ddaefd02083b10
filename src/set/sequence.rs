use crate::{
    config::{InsertBounds, SetConfig},
    core::{
        indices::KeyIndex,
        store::{BackingStore, Record, RepeatedField},
    },
    error::{SetError, SetResult},
    querylang::{AcceptQueryLang, QueryLang, QueryLangRecord},
};

use super::{Iter, SetIndex};

/// List-like facade over a borrowed repeated field of query-language records.
///
/// Every mutation writes through to the store immediately. Values go in by
/// deep copy and come out as fresh [`QueryLang`] views, so nothing held by a
/// caller aliases stored data.
///
/// The key index is only refreshed by [`QueryLangSet::build`]. `clear`,
/// `insert`, `delete`, and `reverse` leave it pointing at old positions.
#[derive(Debug)]
pub struct QueryLangSet<'a, S = RepeatedField<QueryLangRecord>> {
    store: &'a mut S,
    index: KeyIndex,
    config: SetConfig,
}

impl<'a, S> QueryLangSet<'a, S>
where
    S: BackingStore<Record = QueryLangRecord>,
{
    /// Wraps `store` with the default configuration.
    pub fn new(store: &'a mut S) -> Self {
        Self::with_config(store, SetConfig::default())
    }

    /// Wraps `store` with `config`.
    pub fn with_config(store: &'a mut S, config: SetConfig) -> Self {
        Self {
            store,
            index: KeyIndex::new(),
            config,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// View over the entry at `index`.
    pub fn get(&self, index: usize) -> SetResult<QueryLang> {
        self.store
            .get(index)
            .map(|rec| QueryLang::from(rec.clone()))
            .ok_or_else(|| self.out_of_range(index))
    }

    /// View over the entry the key index maps `key` to.
    pub fn get_by_key(&self, key: &str) -> SetResult<QueryLang> {
        let pos = self.key_position(key)?;
        self.get(pos)
    }

    /// Looks up by position or key.
    pub fn get_at(&self, index: impl Into<SetIndex>) -> SetResult<QueryLang> {
        match index.into() {
            SetIndex::Position(pos) => self.get(pos),
            SetIndex::Key(key) => self.get_by_key(&key),
        }
    }

    /// Overwrites the entry at `index` with a copy of `value`.
    pub fn set(&mut self, index: usize, value: &QueryLang) -> SetResult<()> {
        let err = self.out_of_range(index);
        let rec = self.store.get_mut(index).ok_or(err)?;
        rec.copy_from(value.as_record());
        Ok(())
    }

    /// Overwrites, in place, the entry the key index maps `key` to.
    pub fn set_by_key(&mut self, key: &str, value: &QueryLang) -> SetResult<()> {
        let pos = self.key_position(key)?;
        self.set(pos, value)
    }

    /// Overwrites by position or key.
    pub fn set_at(&mut self, index: impl Into<SetIndex>, value: &QueryLang) -> SetResult<()> {
        match index.into() {
            SetIndex::Position(pos) => self.set(pos, value),
            SetIndex::Key(key) => self.set_by_key(&key, value),
        }
    }

    /// Inserts a copy of `value` at `index`, shifting later entries right.
    ///
    /// `index == len` appends. Larger indexes follow
    /// [`SetConfig::insert_bounds`].
    pub fn insert(&mut self, index: usize, value: &QueryLang) -> SetResult<()> {
        let len = self.store.len();
        let at = if index <= len {
            index
        } else {
            match self.config.insert_bounds {
                InsertBounds::Reject => return Err(SetError::IndexOutOfRange { index, len }),
                InsertBounds::Clamp => len,
            }
        };
        tracing::trace!(index, at, len, "insert querylang");
        self.store.insert(at, value.as_record().clone());
        Ok(())
    }

    /// Removes the entry at `index`, shifting later entries left.
    pub fn delete(&mut self, index: usize) -> SetResult<()> {
        if index >= self.store.len() {
            return Err(self.out_of_range(index));
        }
        tracing::trace!(index, len = self.store.len(), "delete querylang");
        self.store.remove(index);
        Ok(())
    }

    /// Fresh views over the current entries, in store order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(&*self.store)
    }

    /// Appends a copy of whatever `value` resolves to.
    pub fn append<'v>(&mut self, value: impl Into<AcceptQueryLang<'v>>) -> SetResult<()> {
        let value = value.into();
        let kind = value.kind();
        let record = value
            .resolve()
            .inspect_err(|err| tracing::debug!(kind, %err, "rejected querylang input"))?;
        self.store.add().copy_from(&record);
        Ok(())
    }

    /// Appends each value in order.
    ///
    /// Stops at the first value that fails to resolve; entries appended
    /// before it stay in the store.
    pub fn extend<'v, I>(&mut self, values: I) -> SetResult<()>
    where
        I: IntoIterator,
        I::Item: Into<AcceptQueryLang<'v>>,
    {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Removes every entry. The key index is left as it was.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.store.len(), "clear querylangs");
        self.store.truncate(0);
    }

    /// Reverses entry order in place by exchanging record contents pairwise
    /// from both ends.
    pub fn reverse(&mut self) {
        let len = self.store.len();
        tracing::trace!(len, "reverse querylangs");
        for lo in 0..len / 2 {
            let hi = len - 1 - lo;
            let (tmp, lo_copy) = (self.store.get(hi).cloned(), self.store.get(lo).cloned());
            debug_assert!(tmp.is_some() && lo_copy.is_some(), "swap past len {len}");
            let (Some(tmp), Some(lo_copy)) = (tmp, lo_copy) else {
                break;
            };
            if let Some(rec) = self.store.get_mut(hi) {
                rec.copy_from(&lo_copy);
            }
            if let Some(rec) = self.store.get_mut(lo) {
                rec.copy_from(&tmp);
            }
        }
    }

    /// Rebuilds the key index from the current entries. Later duplicates win.
    pub fn build(&mut self) {
        let replaced = self.index.build(&*self.store);
        tracing::debug!(
            entries = self.store.len(),
            keys = self.index.len(),
            replaced,
            "built querylang key index"
        );
    }

    /// Key index as of the last build.
    pub fn key_index(&self) -> &KeyIndex {
        &self.index
    }

    /// Borrowed backing store.
    pub fn store(&self) -> &S {
        &*self.store
    }

    fn key_position(&self, key: &str) -> SetResult<usize> {
        self.index
            .position(key)
            .filter(|pos| *pos < self.store.len())
            .ok_or_else(|| SetError::KeyNotFound(key.to_string()))
    }

    fn out_of_range(&self, index: usize) -> SetError {
        SetError::IndexOutOfRange {
            index,
            len: self.store.len(),
        }
    }
}

impl<'s, S> IntoIterator for &'s QueryLangSet<'_, S>
where
    S: BackingStore<Record = QueryLangRecord>,
{
    type Item = QueryLang;
    type IntoIter = Iter<'s, S>;

    fn into_iter(self) -> Iter<'s, S> {
        self.iter()
    }
}
