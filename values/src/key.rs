use alloc::{string::String, sync::Arc};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

use axzdict_wide_fnv::bytes_equal;

/// Object key: an immutable, shared string.
///
/// Cloning a key bumps a reference count. Two keys cloned from the same
/// allocation compare equal by pointer identity without touching the bytes,
/// which is the common case when keys are copied between objects or handed
/// back out of [`keys()`](crate::dynamic::Value::keys).
///
/// `Key` hashes exactly like the `str` it holds, so maps keyed by `Key` can be
/// queried with a plain `&str`.
///
/// The custom equality (length, then pointer, then word-wise bytes) backs
/// `==` on keys, which is what map inserts and merges use. Map lookups by
/// `&str` go through `Borrow<str>` and compare with plain `str` equality.
#[derive(Clone)]
pub struct Key(Arc<str>);

static_assertions::assert_eq_size!(Key, (usize, usize));

impl Key {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Key(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` if both keys share one allocation.
    pub fn ptr_eq(&self, other: &Key) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Key {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || bytes_equal(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl Eq for Key {}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        bytes_equal(self.0.as_bytes(), other.as_bytes())
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        bytes_equal(self.0.as_bytes(), other.as_bytes())
    }
}

impl Hash for Key {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for Key {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key(Arc::from(key))
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key(Arc::from(key))
    }
}

impl From<&String> for Key {
    fn from(key: &String) -> Self {
        Key(Arc::from(key.as_str()))
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::BuildHasher;

    use axzdict_wide_fnv::WideFnvBuildHasher;

    #[test]
    fn test_clone_is_pointer_equal() {
        let a = Key::from("status");
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_allocations_compare_by_content() {
        let a = Key::from("status");
        let b = Key::from(String::from("status"));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, Key::from("statuS"));
        assert_eq!(a, "status");
    }

    #[test]
    fn test_hash_matches_str() {
        let build = WideFnvBuildHasher;
        for text in ["", "id", "a key long enough to take the wide hashing path"] {
            assert_eq!(build.hash_one(Key::from(text)), build.hash_one(text));
        }
    }

    #[test]
    fn test_orders_like_str() {
        let mut keys = vec![Key::from("b"), Key::from("a"), Key::from("ab")];
        keys.sort();
        let names: Vec<&str> = keys.iter().map(Key::as_str).collect();
        assert_eq!(names, ["a", "ab", "b"]);
    }
}
