//! Internal value representation and the shared flyweights.

use alloc::{string::String, sync::Arc, vec::Vec};

use once_cell::sync::Lazy;

use crate::callable::Callable;
use crate::dynamic::Value;
use crate::kind::DictKind;
use crate::object::ObjectMap;

/// Payload of one value. Exactly one kind at a time.
///
/// Nodes live behind an `Arc` in [`Value`]. A node is never retagged in
/// place: changing kind means installing a different node.
#[derive(Clone)]
pub(crate) enum Node {
    Null,
    Number(f64),
    Integral(i32),
    Bool(bool),
    String(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Object(ObjectMap),
    Callable(Callable),
}

impl Node {
    #[inline]
    pub(crate) fn kind(&self) -> DictKind {
        match self {
            Node::Null => DictKind::Null,
            Node::Number(_) => DictKind::Number,
            Node::Integral(_) => DictKind::Integral,
            Node::Bool(_) => DictKind::Bool,
            Node::String(_) => DictKind::String,
            Node::Bytes(_) => DictKind::Bytes,
            Node::Array(_) => DictKind::Array,
            Node::Object(_) => DictKind::Object,
            Node::Callable(_) => DictKind::Callable,
        }
    }
}

// Flyweights. Every Null and every boolean in the process points at one of
// these; they are never mutated (copy-on-write detaches first).
static NULL: Lazy<Arc<Node>> = Lazy::new(|| Arc::new(Node::Null));
static TRUE: Lazy<Arc<Node>> = Lazy::new(|| Arc::new(Node::Bool(true)));
static FALSE: Lazy<Arc<Node>> = Lazy::new(|| Arc::new(Node::Bool(false)));

#[inline]
pub(crate) fn null_node() -> Arc<Node> {
    Arc::clone(&*NULL)
}

#[inline]
pub(crate) fn bool_node(value: bool) -> Arc<Node> {
    if value {
        Arc::clone(&*TRUE)
    } else {
        Arc::clone(&*FALSE)
    }
}

/// A fresh, empty node of the given kind.
///
/// Null and Bool reuse the flyweights; Bool starts out `false`.
pub(crate) fn empty_node(kind: DictKind) -> Arc<Node> {
    match kind {
        DictKind::Null => null_node(),
        DictKind::Bool => bool_node(false),
        DictKind::Number => Arc::new(Node::Number(0.0)),
        DictKind::Integral => Arc::new(Node::Integral(0)),
        DictKind::String => Arc::new(Node::String(String::new())),
        DictKind::Bytes => Arc::new(Node::Bytes(Vec::new())),
        DictKind::Array => Arc::new(Node::Array(Vec::new())),
        DictKind::Object => Arc::new(Node::Object(ObjectMap::new())),
        DictKind::Callable => Arc::new(Node::Callable(Callable::null())),
    }
}

/// `true` if `node` is one of the process-wide flyweights.
#[cfg(test)]
pub(crate) fn is_flyweight(node: &Arc<Node>) -> bool {
    Arc::ptr_eq(node, &*NULL) || Arc::ptr_eq(node, &*TRUE) || Arc::ptr_eq(node, &*FALSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flyweights_are_shared() {
        assert!(Arc::ptr_eq(&null_node(), &null_node()));
        assert!(Arc::ptr_eq(&bool_node(true), &bool_node(true)));
        assert!(!Arc::ptr_eq(&bool_node(true), &bool_node(false)));
        assert!(is_flyweight(&empty_node(DictKind::Null)));
        assert!(is_flyweight(&empty_node(DictKind::Bool)));
        assert!(!is_flyweight(&empty_node(DictKind::Integral)));
    }

    #[test]
    fn test_empty_node_kinds() {
        for kind in DictKind::ALL {
            assert_eq!(empty_node(kind).kind(), kind);
        }
    }
}
