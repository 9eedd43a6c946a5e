#![allow(dead_code)]
//! Identity map: sorted-array associative structure from tween identity to
//! target state.
//!
//! Binary search gives O(log n) lookup; array backing keeps the update
//! pass's reverse-index iteration cache-friendly and safe under in-place
//! removal of the entry being processed.

use crate::ids::TweenId;
use crate::state::TweenData;

#[derive(Debug)]
pub struct IdentityMap<T> {
    entries: Vec<(TweenId, TweenData<T>)>,
}

impl<T> IdentityMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `id`, or the insertion index keeping the array sorted.
    #[inline]
    pub fn index_of(&self, id: TweenId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |entry| entry.0)
    }

    /// Insert at the position `index_of` reported for a missing id.
    pub fn insert_at(&mut self, index: usize, id: TweenId, data: TweenData<T>) {
        self.entries.insert(index, (id, data));
    }

    pub fn get(&self, id: TweenId) -> Option<&TweenData<T>> {
        self.index_of(id).ok().map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut TweenData<T>> {
        match self.index_of(id) {
            Ok(i) => Some(&mut self.entries[i].1),
            Err(_) => None,
        }
    }

    #[inline]
    pub fn id_at(&self, index: usize) -> TweenId {
        self.entries[index].0
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut TweenData<T> {
        &mut self.entries[index].1
    }

    /// Positional removal; entries after `index` shift down, which is why
    /// the update pass walks indices in reverse.
    pub fn remove_at(&mut self, index: usize) -> (TweenId, TweenData<T>) {
        self.entries.remove(index)
    }
}

impl<T> Default for IdentityMap<T> {
    fn default() -> Self {
        Self::new()
    }
}
