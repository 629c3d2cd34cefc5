//! A value several threads mutate together.
//!
//! [`Value`] is copy-on-write: every clone is an independent snapshot. When
//! threads must instead see each other's changes, they share a
//! [`SharedValue`]. All clones of a `SharedValue` point at one value guarded
//! by one `parking_lot` reader-writer lock. Reads take the shared lock,
//! mutations take the exclusive lock.
//!
//! Locks are not reentrant. A callback that runs under a lock (the
//! [`update`](SharedValue::update) closure, a [`Stepper`]) must not touch the
//! same `SharedValue` again.

use alloc::{collections::BTreeSet, sync::Arc};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dynamic::Value;
use crate::error::{Added, Result};
use crate::key::Key;
use crate::kind::DictKind;
use crate::traits::{Extract, Stepper};

/// Handle to a [`Value`] shared between threads under one lock.
///
/// ```
/// use std::thread;
/// use axzdict_values::{SharedValue, Value};
///
/// let counter = SharedValue::new(0);
/// let workers: Vec<_> = (0..4)
///     .map(|_| {
///         let counter = counter.clone();
///         thread::spawn(move || {
///             for _ in 0..100 {
///                 counter.update(|v| *v = Value::from(v.integral() + 1));
///             }
///         })
///     })
///     .collect();
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// assert_eq!(counter.snapshot().integral(), 400);
/// ```
#[derive(Clone, Default)]
pub struct SharedValue {
    inner: Arc<RwLock<Value>>,
}

static_assertions::assert_impl_all!(SharedValue: Send, Sync);

impl SharedValue {
    pub fn new(value: impl Into<Value>) -> Self {
        SharedValue {
            inner: Arc::new(RwLock::new(value.into())),
        }
    }

    /// Shared access. Other readers may hold the lock at the same time.
    pub fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.inner.read()
    }

    /// Exclusive access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.inner.write()
    }

    /// A copy-on-write snapshot of the current value.
    ///
    /// Later changes through this handle do not show up in the snapshot.
    pub fn snapshot(&self) -> Value {
        self.read().clone()
    }

    /// Swap in `value`, returning the previous one.
    pub fn replace(&self, value: impl Into<Value>) -> Value {
        core::mem::replace(&mut *self.write(), value.into())
    }

    /// Run `f` under the exclusive lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut Value) -> R) -> R {
        f(&mut *self.write())
    }

    /// `true` if both handles share one lock and value.
    pub fn ptr_eq(&self, other: &SharedValue) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // =========================================================================
    // Reads (shared lock)
    // =========================================================================

    pub fn kind(&self) -> DictKind {
        self.read().kind()
    }

    /// See [`Value::size`].
    #[track_caller]
    pub fn size(&self) -> usize {
        self.read().size()
    }

    pub fn keys(&self) -> BTreeSet<Key> {
        self.read().keys()
    }

    pub fn has(&self, key: &str) -> bool {
        self.read().has(key)
    }

    pub fn contain_key(&self, key: &str) -> Result<()> {
        self.read().contain_key(key)
    }

    pub fn contain(&self, key: &str, kind: DictKind) -> Result<()> {
        self.read().contain(key, kind)
    }

    pub fn val<T: Extract>(&self) -> Result<T> {
        self.read().val()
    }

    pub fn val_key<T: Extract>(&self, key: &str) -> Result<T> {
        self.read().val_key(key)
    }

    pub fn val_index<T: Extract>(&self, index: usize) -> Result<T> {
        self.read().val_index(index)
    }

    pub fn dot_val<T: Extract>(&self, path: &str) -> Result<T> {
        self.read().dot_val(path)
    }

    /// A snapshot of the element under `key`, if present.
    pub fn get_key(&self, key: &str) -> Option<Value> {
        self.read().at_safe_key(key).cloned()
    }

    /// A snapshot of the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read().at_safe(index).cloned()
    }

    /// Invoke a Callable value.
    ///
    /// The lock is released before the callable runs, so it may use this
    /// handle.
    pub fn call(&self, input: Value) -> Result<Value> {
        let callable = self.snapshot();
        callable.call(input)
    }

    /// Run `stepper` over the value under the shared lock.
    pub fn step<S: Stepper + ?Sized>(&self, stepper: &mut S) -> Result<(), S::Error> {
        self.read().step(stepper)
    }

    // =========================================================================
    // Mutations (exclusive lock)
    // =========================================================================

    pub fn steal<T: Extract>(&self) -> Result<T> {
        self.write().steal()
    }

    pub fn steal_key<T: Extract>(&self, key: &str) -> Result<T> {
        self.write().steal_key(key)
    }

    pub fn steal_index<T: Extract>(&self, index: usize) -> Result<T> {
        self.write().steal_index(index)
    }

    pub fn dot_steal<T: Extract>(&self, path: &str) -> Result<T> {
        self.write().dot_steal(path)
    }

    pub fn add(&self, value: impl Into<Value>) -> Result<Added> {
        self.write().add(value)
    }

    pub fn add_key(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<Added> {
        self.write().add_key(key, value)
    }

    pub fn remove(&self, index: usize) -> Result<Value> {
        self.write().remove(index)
    }

    pub fn remove_key(&self, key: &str) -> Result<Value> {
        self.write().remove_key(key)
    }

    /// Keyed write with promotion, like `value[key] = ...`.
    #[track_caller]
    pub fn set_key(&self, key: &str, value: impl Into<Value>) {
        *self.write().at_key_mut(key) = value.into();
    }

    /// Indexed write with promotion and growth, like `value[index] = ...`.
    #[track_caller]
    pub fn set_index(&self, index: usize, value: impl Into<Value>) {
        self.write()[index] = value.into();
    }

    pub fn become_kind(&self, kind: DictKind) {
        self.write().become_kind(kind);
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn reset(&self) {
        self.write().reset();
    }

    pub fn reserve(&self, additional: usize) -> Result<()> {
        self.write().reserve(additional)
    }
}

impl From<Value> for SharedValue {
    fn from(value: Value) -> Self {
        SharedValue::new(value)
    }
}

impl core::fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SharedValue").field(&*self.read()).finish()
    }
}
