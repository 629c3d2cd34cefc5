//! Iteration over the elements of a container value.
//!
//! One iterator type covers both containers: Array yields its elements in
//! order, Object yields its values in map order. Every other kind yields
//! nothing. The kind is captured when the iterator is created.

use core::iter::FusedIterator;
use core::slice;

use hashbrown::hash_map;

use crate::dynamic::Value;
use crate::key::Key;
use crate::kind::DictKind;
use crate::object::ObjectMap;
use crate::raw::Node;

/// Borrowing iterator over a value's elements. See [`Value::iter`].
#[derive(Clone)]
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

#[derive(Clone)]
enum IterInner<'a> {
    Empty,
    Array(slice::Iter<'a, Value>),
    Object(hash_map::Values<'a, Key, Value>),
}

/// Mutable iterator over a value's elements. See [`Value::iter_mut`].
pub struct IterMut<'a> {
    inner: IterMutInner<'a>,
}

enum IterMutInner<'a> {
    Empty,
    Array(slice::IterMut<'a, Value>),
    Object(hash_map::ValuesMut<'a, Key, Value>),
}

impl Value {
    /// Iterate the elements of an Array or the values of an Object.
    ///
    /// ```
    /// use axzdict_values::{array, dynamic::Value};
    ///
    /// let v = array![1, 2, 3];
    /// let sum: i32 = v.iter().map(Value::integral).sum();
    /// assert_eq!(sum, 6);
    /// assert_eq!(Value::from(9).iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let inner = match self.node() {
            Node::Array(items) => IterInner::Array(items.iter()),
            Node::Object(map) => IterInner::Object(map.values()),
            _ => IterInner::Empty,
        };
        Iter { inner }
    }

    /// Mutable form of [`iter`](Self::iter). Detaches a shared container
    /// first; scalars are left alone.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        let inner = match self.kind() {
            DictKind::Array | DictKind::Object => match self.node_mut() {
                Node::Array(items) => IterMutInner::Array(items.iter_mut()),
                Node::Object(map) => IterMutInner::Object(map.values_mut()),
                _ => IterMutInner::Empty,
            },
            _ => IterMutInner::Empty,
        };
        IterMut { inner }
    }

    /// Key/value pairs of an Object, in map order. Empty for other kinds.
    pub fn entries(&self) -> impl Iterator<Item = (&Key, &Value)> + '_ {
        self.as_object().into_iter().flat_map(ObjectMap::iter)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    #[inline]
    fn next(&mut self) -> Option<&'a Value> {
        match &mut self.inner {
            IterInner::Empty => None,
            IterInner::Array(it) => it.next(),
            IterInner::Object(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        match &self.inner {
            IterInner::Empty => 0,
            IterInner::Array(it) => it.len(),
            IterInner::Object(it) => it.len(),
        }
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    #[inline]
    fn next(&mut self) -> Option<&'a mut Value> {
        match &mut self.inner {
            IterMutInner::Empty => None,
            IterMutInner::Array(it) => it.next(),
            IterMutInner::Object(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IterMut<'_> {
    fn len(&self) -> usize {
        match &self.inner {
            IterMutInner::Empty => 0,
            IterMutInner::Array(it) => it.len(),
            IterMutInner::Object(it) => it.len(),
        }
    }
}

impl FusedIterator for IterMut<'_> {}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Value {
    type Item = &'a mut Value;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> IterMut<'a> {
        self.iter_mut()
    }
}
