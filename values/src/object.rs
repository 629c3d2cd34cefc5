//! The hash map behind Object values.
//!
//! Object is the hot path for structured payloads: every keyed access on a
//! nested tree is one lookup here. The table is a `hashbrown` map keyed by
//! [`Key`] and hashed with [`WideFnvBuildHasher`], which hashes short keys
//! byte by byte and long keys four words at a time. Because [`Key`] hashes
//! like `str`, lookups take a plain `&str` and never allocate.

use core::fmt;

use axzdict_wide_fnv::WideFnvBuildHasher;
use hashbrown::hash_map;

use crate::dynamic::Value;
use crate::error::{Added, DictError, Result};
use crate::key::Key;

type Table = hashbrown::HashMap<Key, Value, WideFnvBuildHasher>;

/// Unordered mapping from [`Key`] to [`Value`].
#[derive(Clone, Default, PartialEq)]
pub struct ObjectMap {
    table: Table,
}

impl ObjectMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap {
            table: Table::with_capacity_and_hasher(capacity, WideFnvBuildHasher),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.table.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.table.get_mut(key)
    }

    /// The stored key equal to `key`, sharing its allocation.
    pub fn get_key(&self, key: &str) -> Option<&Key> {
        self.table.get_key_value(key).map(|(k, _)| k)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Insert or overwrite. An existing entry keeps its original key.
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Added {
        match self.table.insert(key.into(), value) {
            None => Added::Inserted,
            Some(_) => Added::Replaced,
        }
    }

    /// The value for `key`, inserting Null first if it is absent.
    pub fn get_or_insert_null(&mut self, key: &str) -> &mut Value {
        self.table.entry_ref(key).or_insert_with(Value::null)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.table.remove(key)
    }

    /// Copy in every entry of `other` whose key is not present yet.
    ///
    /// Existing entries are left untouched. Returns how many were added.
    pub fn merge_missing(&mut self, other: &ObjectMap) -> usize {
        let mut added = 0;
        for (key, value) in other.iter() {
            if !self.table.contains_key(key.as_str()) {
                self.table.insert(key.clone(), value.clone());
                added += 1;
            }
        }
        added
    }

    /// Owned form of [`merge_missing`](Self::merge_missing); moves values out of `other`.
    pub fn merge_missing_owned(&mut self, other: ObjectMap) -> usize {
        let mut added = 0;
        for (key, value) in other.table {
            if let hash_map::Entry::Vacant(slot) = self.table.entry(key) {
                slot.insert(value);
                added += 1;
            }
        }
        added
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Make room for at least `additional` more entries.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.table
            .try_reserve(additional)
            .map_err(|_| DictError::HashError {
                capacity: self.table.len().saturating_add(additional),
            })
    }

    pub fn keys(&self) -> hash_map::Keys<'_, Key, Value> {
        self.table.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, Key, Value> {
        self.table.values()
    }

    pub fn values_mut(&mut self) -> hash_map::ValuesMut<'_, Key, Value> {
        self.table.values_mut()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, Key, Value> {
        self.table.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, Key, Value> {
        self.table.iter_mut()
    }
}

impl fmt::Debug for ObjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.table.iter()).finish()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ObjectMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for ObjectMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.table.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.table.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for ObjectMap {
    type Item = (Key, Value);
    type IntoIter = hash_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = hash_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

impl<'a> IntoIterator for &'a mut ObjectMap {
    type Item = (&'a Key, &'a mut Value);
    type IntoIter = hash_map::IterMut<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_reports_replacement() {
        let mut map = ObjectMap::new();
        assert_eq!(map.insert("a", Value::from(1)), Added::Inserted);
        assert_eq!(map.insert("a", Value::from(2)), Added::Replaced);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&Value::from(2)));
    }

    #[test]
    fn test_replacement_keeps_original_key() {
        let mut map = ObjectMap::new();
        let first = Key::from("name");
        let _ = map.insert(first.clone(), Value::from(1));
        let _ = map.insert(Key::from("name"), Value::from(2));
        assert!(map.get_key("name").is_some_and(|k| k.ptr_eq(&first)));
    }

    #[test]
    fn test_str_lookup_matches_key_from_other_allocation() {
        let mut map = ObjectMap::new();
        let stored = Key::from(String::from("a key long enough to span several words"));
        let _ = map.insert(stored.clone(), Value::from(1));
        let query = String::from("a key long enough to span several words");
        assert_eq!(map.get(&query), Some(&Value::from(1)));
        assert!(map.get_key(&query).is_some_and(|k| k.ptr_eq(&stored)));
        assert_eq!(map.get("a key long enough to span several wordz"), None);
    }

    #[test]
    fn test_get_or_insert_null() {
        let mut map = ObjectMap::new();
        assert!(map.get_or_insert_null("x").is_null());
        assert_eq!(map.len(), 1);
        *map.get_or_insert_null("x") = Value::from(5);
        assert_eq!(map.get_or_insert_null("x"), &Value::from(5));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_merge_missing_keeps_existing_entries() {
        let mut target: ObjectMap = [("a", 1), ("b", 2)].into_iter().collect();
        let source: ObjectMap = [("b", 20), ("c", 30)].into_iter().collect();

        assert_eq!(target.merge_missing(&source), 1);
        assert_eq!(target.get("b"), Some(&Value::from(2)));
        assert_eq!(target.get("c"), Some(&Value::from(30)));
        assert_eq!(target.len(), 3);

        // Merged keys share the source's allocation.
        let src_key = source.get_key("c");
        let dst_key = target.get_key("c");
        assert!(src_key.zip(dst_key).is_some_and(|(a, b)| a.ptr_eq(b)));
    }

    #[test]
    fn test_merge_missing_owned() {
        let mut target: ObjectMap = [("a", 1)].into_iter().collect();
        let source: ObjectMap = [("a", 10), ("z", 26)].into_iter().collect();
        assert_eq!(target.merge_missing_owned(source), 1);
        assert_eq!(target.get("a"), Some(&Value::from(1)));
        assert_eq!(target.get("z"), Some(&Value::from(26)));
    }

    #[test]
    fn test_long_and_short_keys() {
        let mut map = ObjectMap::new();
        let keys: Vec<String> = (0..200)
            .map(|i| format!("{}{i}", "k".repeat(i % 48)))
            .collect();
        for (i, key) in keys.iter().enumerate() {
            let _ = map.insert(key.as_str(), Value::from(i as i32));
        }
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(map.get(key), Some(&Value::from(i as i32)));
        }
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_try_reserve() {
        let mut map = ObjectMap::new();
        assert!(map.try_reserve(64).is_ok());
        assert!(map.capacity() >= 64);
        assert!(matches!(
            map.try_reserve(usize::MAX),
            Err(DictError::HashError { .. })
        ));
    }
}
