//! Ordered, case-preserving entry map for FDS sections.
//!
//! [`EntryMap`] wraps an [`IndexMap`] so entries serialize in insertion order, and
//! keeps a lower-cased shadow index next to it for case-insensitive lookups.
//! The shadow index is updated inside [`EntryMap::insert`] and never exposed, so
//! the two tables cannot drift apart.
//!
//! When two keys differ only by case, the lowered lookup resolves to whichever
//! of them was inserted last.
//!
//! ## Examples
//!
//! ```rust
//! use fds_syntax::{Entry, EntryMap, Value};
//!
//! let mut map = EntryMap::new();
//! map.insert("Name".to_string(), Entry::new(Value::from("Alice")));
//! map.insert("age".to_string(), Entry::new(Value::from(30)));
//!
//! assert_eq!(map.len(), 2);
//! assert!(map.get("name").is_none());
//! assert_eq!(map.get_lowered("name").and_then(|e| e.value.as_str()), Some("Alice"));
//! ```

use crate::Entry;
use indexmap::map::Entry as Slot;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of case-preserved keys to entries.
#[derive(Debug, Clone, Default)]
pub struct EntryMap {
    entries: IndexMap<String, Entry>,
    lowered: HashMap<String, String>,
}

impl EntryMap {
    /// Creates an empty `EntryMap`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EntryMap {
            entries: IndexMap::with_capacity(capacity),
            lowered: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts an entry, returning the one it replaced.
    ///
    /// Replacing an existing key keeps that key's original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fds_syntax::{Entry, EntryMap, Value};
    ///
    /// let mut map = EntryMap::new();
    /// assert!(map.insert("key".to_string(), Entry::new(Value::from(1))).is_none());
    /// assert!(map.insert("key".to_string(), Entry::new(Value::from(2))).is_some());
    /// ```
    pub fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        self.lowered.insert(key.to_lowercase(), key.clone());
        self.entries.insert(key, entry)
    }

    /// Returns the entry for `key`, inserting the result of `default` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut Entry
    where
        F: FnOnce() -> Entry,
    {
        match self.entries.entry(key.to_string()) {
            Slot::Occupied(slot) => slot.into_mut(),
            Slot::Vacant(slot) => {
                self.lowered.insert(key.to_lowercase(), key.to_string());
                slot.insert(default())
            }
        }
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.get_mut(key)
    }

    /// Case-insensitive lookup. `lowered` must already be lower-case.
    #[must_use]
    pub fn get_lowered(&self, lowered: &str) -> Option<&Entry> {
        self.lowered
            .get(lowered)
            .and_then(|key| self.entries.get(key))
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Entry> {
        self.entries.keys()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Entry> {
        self.entries.values()
    }

    /// Returns an iterator over the key-entry pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.entries.iter()
    }
}

/// Equality is order-sensitive: two maps are equal only when they hold the same
/// keys and entries in the same insertion order.
impl PartialEq for EntryMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| left == right)
    }
}

impl<'a> IntoIterator for &'a EntryMap {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for EntryMap {
    type Item = (String, Entry);
    type IntoIter = indexmap::map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Entry)> for EntryMap {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        let mut map = EntryMap::new();
        for (key, entry) in iter {
            map.insert(key, entry);
        }
        map
    }
}
