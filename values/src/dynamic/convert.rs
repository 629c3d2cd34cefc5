//! Conversions from native Rust values, equality and formatting.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::callable::Callable;
use crate::dynamic::Value;
use crate::key::Key;
use crate::object::ObjectMap;
use crate::raw::Node;

// =============================================================================
// From native values
// =============================================================================

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from_node(Node::Integral(value))
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::from(i32::from(value))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, u8, u16);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from_node(Node::Number(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::from_node(Node::Bool(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::from_node(Node::String(String::from(value)))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::from_node(Node::String(value))
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::from(value.as_str())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        Value::from(value.as_str())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::from_node(Node::Bytes(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::from_node(Node::Bytes(value.to_vec()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::from_node(Node::Array(value))
    }
}

impl From<ObjectMap> for Value {
    fn from(value: ObjectMap) -> Self {
        Value::from_node(Node::Object(value))
    }
}

impl From<Callable> for Value {
    fn from(value: Callable) -> Self {
        Value::from_node(Node::Callable(value))
    }
}

/// `None` becomes Null.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Value::null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

/// Collects into an Array.
impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// Collects into an Object. Later duplicates overwrite earlier ones.
impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::from(iter.into_iter().collect::<ObjectMap>())
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Deep structural equality.
///
/// Values of different kinds are never equal, so `Integral(1) != Number(1.0)`.
/// Callables are equal only when they share one closure. Two handles to the
/// same node are equal without looking at the content.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        match (self.node(), other.node()) {
            (Node::Null, Node::Null) => true,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::Integral(a), Node::Integral(b)) => a == b,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Bytes(a), Node::Bytes(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a == b,
            (Node::Object(a), Node::Object(b)) => a == b,
            (Node::Callable(a), Node::Callable(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self.node(), Node::Integral(i) if i == other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self.node(), Node::Number(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Null => f.write_str("null"),
            Node::Number(n) => write!(f, "{n:?}"),
            Node::Integral(i) => write!(f, "{i}"),
            Node::Bool(b) => write!(f, "{b}"),
            Node::String(s) => fmt::Debug::fmt(s, f),
            Node::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Node::Array(items) => f.debug_list().entries(items).finish(),
            Node::Object(map) => fmt::Debug::fmt(map, f),
            Node::Callable(c) => fmt::Debug::fmt(c, f),
        }
    }
}
