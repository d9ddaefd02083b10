use std::iter::FusedIterator;

use crate::{core::store::BackingStore, querylang::{QueryLang, QueryLangRecord}};

/// Forward-only iterator yielding a fresh [`QueryLang`] per stored record.
///
/// Holds a shared borrow of the store, so the set cannot be structurally
/// mutated while an `Iter` is alive. A store shared through other means must
/// not be mutated mid-iteration; what is yielded in that case is undefined.
pub struct Iter<'s, S> {
    store: &'s S,
    pos: usize,
}

impl<'s, S> Iter<'s, S> {
    pub(crate) fn new(store: &'s S) -> Self {
        Self { store, pos: 0 }
    }
}

impl<S> Iterator for Iter<'_, S>
where
    S: BackingStore<Record = QueryLangRecord>,
{
    type Item = QueryLang;

    fn next(&mut self) -> Option<QueryLang> {
        let rec = self.store.get(self.pos)?;
        self.pos += 1;
        Some(QueryLang::from(rec.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.store.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}

impl<S> ExactSizeIterator for Iter<'_, S> where S: BackingStore<Record = QueryLangRecord> {}

impl<S> FusedIterator for Iter<'_, S> where S: BackingStore<Record = QueryLangRecord> {}
