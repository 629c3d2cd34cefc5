//! Keyed and indexed access on container values.
//!
//! Three flavours, matching the two failure families:
//!
//! - `val_*`, `steal_*`, `add*`, `remove*`, `contain*` return [`Result`].
//! - `at*` return references and panic when the kind, key or index is wrong.
//! - `at_safe*` and `has` return `Option`/`bool` and never panic.
//!
//! Only the mutable `at_key_mut` and the `IndexMut` operators promote a Null
//! value into a container.

use crate::dynamic::value::logic_error;
use crate::dynamic::Value;
use crate::error::{Added, DictError, Result};
use crate::key::Key;
use crate::kind::DictKind;
use crate::raw::Node;
use crate::traits::Extract;

impl Value {
    // =========================================================================
    // Soft reads and steals
    // =========================================================================

    /// Read the element under `key` as `T`.
    ///
    /// `NotSupported` if this is not an Object, `NotFound` if the key is
    /// absent, otherwise whatever converting the element reports.
    pub fn val_key<T: Extract>(&self, key: &str) -> Result<T> {
        T::extract(self.lookup_key(key)?)
    }

    /// Read the element at `index` as `T`.
    ///
    /// `NotSupported` if this is not an Array, `OutOfRange` past the end.
    pub fn val_index<T: Extract>(&self, index: usize) -> Result<T> {
        T::extract(self.lookup_index(index)?)
    }

    /// Move the element under `key` out as `T`, leaving Null in its place.
    ///
    /// The key stays present. On failure nothing changes.
    pub fn steal_key<T: Extract>(&mut self, key: &str) -> Result<T> {
        check_kind::<T>(self.lookup_key(key)?)?;
        let slot = match self.node_mut() {
            Node::Object(map) => map.get_mut(key),
            _ => None,
        };
        let Some(slot) = slot else {
            return Err(DictError::not_found(key));
        };
        let stolen = T::steal(slot)?;
        slot.reset();
        Ok(stolen)
    }

    /// Move the element at `index` out as `T`, leaving Null in its place.
    ///
    /// The array keeps its length. On failure nothing changes.
    pub fn steal_index<T: Extract>(&mut self, index: usize) -> Result<T> {
        check_kind::<T>(self.lookup_index(index)?)?;
        let Some(slot) = self.as_array_mut().and_then(|items| items.get_mut(index)) else {
            return Err(DictError::out_of_range(index, 0));
        };
        let stolen = T::steal(slot)?;
        slot.reset();
        Ok(stolen)
    }

    /// [`val_key`](Self::val_key) addressed by a path.
    ///
    /// Paths are a single segment: the whole string is the key, dots
    /// included.
    pub fn dot_val<T: Extract>(&self, path: &str) -> Result<T> {
        self.val_key(path)
    }

    /// [`steal_key`](Self::steal_key) addressed by a single-segment path.
    pub fn dot_steal<T: Extract>(&mut self, path: &str) -> Result<T> {
        self.steal_key(path)
    }

    // =========================================================================
    // Existence
    // =========================================================================

    /// Check that `key` is present.
    ///
    /// `NotFound` if absent, `NotSupported` if this is not an Object. Never
    /// promotes.
    pub fn contain_key(&self, key: &str) -> Result<()> {
        self.lookup_key(key).map(|_| ())
    }

    /// Check that `key` is present and holds a value of `kind`.
    ///
    /// `NotFound` if absent, `NotSupported` if present with another kind or
    /// if this is not an Object. Never promotes.
    pub fn contain(&self, key: &str, kind: DictKind) -> Result<()> {
        let found = self.lookup_key(key)?;
        if found.is_kind(kind) {
            Ok(())
        } else {
            Err(DictError::not_supported(found.kind()))
        }
    }

    /// `true` if this is an Object with an entry for `key`. Never promotes.
    pub fn has(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    // =========================================================================
    // Insertion and removal
    // =========================================================================

    /// Append to an Array, or merge an Object into an Object.
    ///
    /// Merging copies only the keys the target does not have yet. Merging a
    /// non-object is `InvalidInput`; any other target kind is `NotSupported`.
    pub fn add(&mut self, value: impl Into<Value>) -> Result<Added> {
        let value = value.into();
        match self.kind() {
            DictKind::Array => {
                if let Some(items) = self.as_array_mut() {
                    items.push(value);
                }
                Ok(Added::Inserted)
            }
            DictKind::Object => {
                if !value.is_object() {
                    return Err(DictError::InvalidInput {
                        expected: DictKind::Object,
                        found: value.kind(),
                    });
                }
                let Node::Object(source) = value.into_node() else {
                    return Ok(Added::Inserted);
                };
                if let Some(map) = self.as_object_mut() {
                    let added = map.merge_missing_owned(source);
                    tracing::debug!(added, "merged object");
                }
                Ok(Added::Inserted)
            }
            kind => Err(DictError::not_supported(kind)),
        }
    }

    /// Insert or overwrite `key` in an Object.
    ///
    /// Reports [`Added::Replaced`] when the key already existed.
    pub fn add_key(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Added> {
        match self.as_object_mut() {
            Some(map) => Ok(map.insert(key, value.into())),
            None => Err(DictError::not_supported(self.kind())),
        }
    }

    /// Remove and return the element at `index`, shifting later ones down.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        self.lookup_index(index)?;
        match self.as_array_mut() {
            Some(items) => Ok(items.remove(index)),
            None => Err(DictError::not_supported(self.kind())),
        }
    }

    /// Remove and return the entry for `key`. `NotFound` if absent.
    pub fn remove_key(&mut self, key: &str) -> Result<Value> {
        self.lookup_key(key)?;
        self.as_object_mut()
            .and_then(|map| map.remove(key))
            .ok_or_else(|| DictError::not_found(key))
    }

    // =========================================================================
    // Element access
    // =========================================================================

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// If this is not an Array, or `index` is out of range.
    #[track_caller]
    pub fn at(&self, index: usize) -> &Value {
        match self.node() {
            Node::Array(items) => match items.get(index) {
                Some(item) => item,
                None => index_out_of_range(index, items.len()),
            },
            other => logic_error("at", other.kind()),
        }
    }

    /// Mutable element at `index`. Never grows the array; use indexing for
    /// that.
    ///
    /// # Panics
    ///
    /// If this is not an Array, or `index` is out of range.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut Value {
        if !self.is_array() {
            logic_error("at_mut", self.kind());
        }
        match self.node_mut() {
            Node::Array(items) => {
                let len = items.len();
                match items.get_mut(index) {
                    Some(item) => item,
                    None => index_out_of_range(index, len),
                }
            }
            other => logic_error("at_mut", other.kind()),
        }
    }

    /// The element under `key`.
    ///
    /// # Panics
    ///
    /// If this is not an Object, or the key is absent.
    #[track_caller]
    pub fn at_key(&self, key: &str) -> &Value {
        match self.node() {
            Node::Object(map) => match map.get(key) {
                Some(item) => item,
                None => key_not_found(key),
            },
            other => logic_error("at_key", other.kind()),
        }
    }

    /// Mutable element under `key`, inserting Null if the key is absent.
    ///
    /// A Null value is promoted to an empty Object first.
    ///
    /// # Panics
    ///
    /// If this is neither Null nor an Object.
    #[track_caller]
    pub fn at_key_mut(&mut self, key: &str) -> &mut Value {
        self.promote_null(DictKind::Object);
        if !self.is_object() {
            logic_error("at_key_mut", self.kind());
        }
        match self.node_mut() {
            Node::Object(map) => map.get_or_insert_null(key),
            other => logic_error("at_key_mut", other.kind()),
        }
    }

    /// The element at `index`, or `None` for a non-array or a bad index.
    pub fn at_safe(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// The element under `key`, or `None` for a non-object or a missing key.
    pub fn at_safe_key(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    pub fn at_safe_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut()?.get_mut(index)
    }

    pub fn at_safe_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        if !self.has(key) {
            return None;
        }
        self.as_object_mut()?.get_mut(key)
    }

    /// Mutable element at `index`, growing the array with Nulls as needed.
    ///
    /// A Null value is promoted to an empty Array first.
    #[track_caller]
    pub(crate) fn at_or_grow(&mut self, index: usize) -> &mut Value {
        // No array can hold `usize::MAX + 1` slots; fail before touching anything.
        let Some(min_len) = index.checked_add(1) else {
            index_out_of_range(index, self.as_array().map_or(0, <[Value]>::len));
        };
        self.promote_null(DictKind::Array);
        if !self.is_array() {
            logic_error("index_mut", self.kind());
        }
        match self.node_mut() {
            Node::Array(items) => {
                if index >= items.len() {
                    tracing::trace!(len = items.len(), index, "growing array");
                    items.resize_with(min_len, Value::null);
                }
                &mut items[index]
            }
            other => logic_error("index_mut", other.kind()),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn promote_null(&mut self, kind: DictKind) {
        if self.is_null() {
            tracing::trace!(to = %kind, "promoting null");
            *self = Value::of_kind(kind);
        }
    }

    fn lookup_key(&self, key: &str) -> Result<&Value> {
        match self.node() {
            Node::Object(map) => map.get(key).ok_or_else(|| DictError::not_found(key)),
            other => Err(DictError::not_supported(other.kind())),
        }
    }

    fn lookup_index(&self, index: usize) -> Result<&Value> {
        match self.node() {
            Node::Array(items) => items
                .get(index)
                .ok_or_else(|| DictError::out_of_range(index, items.len())),
            other => Err(DictError::not_supported(other.kind())),
        }
    }
}

/// Fails the way `T::extract` would, without touching the value.
fn check_kind<T: Extract>(found: &Value) -> Result<()> {
    if T::matches_kind(found.kind()) {
        Ok(())
    } else {
        Err(DictError::not_supported(found.kind()))
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("Value::at index {index} out of range for array of length {len}")
}

#[cold]
#[inline(never)]
#[track_caller]
fn key_not_found(key: &str) -> ! {
    panic!("Value::at_key key {key:?} not found")
}
