use alloc::{collections::BTreeSet, string::String, sync::Arc, vec::Vec};

use crate::callable::Callable;
use crate::error::{DictError, Result};
use crate::key::Key;
use crate::kind::DictKind;
use crate::object::ObjectMap;
use crate::raw::{self, Node};
use crate::traits::{Extract, Stepper};

/// A dynamically typed value handle.
///
/// This is what users work with. A `Value` is one pointer to an internal,
/// reference-counted node holding exactly one [`DictKind`]'s payload.
///
/// # Sharing
///
/// Cloning a `Value` copies the pointer, not the content. Mutation is
/// copy-on-write: a handle that shares its node with other handles detaches
/// (clones the node) before changing it, so no alias ever observes another
/// alias's mutation. Values can therefore be handed to other threads freely.
/// For a value that several threads mutate *together*, wrap it in a
/// [`SharedValue`](crate::shared::SharedValue).
///
/// Null, `true` and `false` are process-wide flyweights: creating them never
/// allocates.
///
/// # Two kinds of failure
///
/// Methods returning [`Result`] (`val`, `steal`, `add`, `remove`, ...) treat a
/// wrong kind, a missing key or a bad index as an ordinary outcome. The direct
/// projections (`number`, `string`, `size`, `at`, indexing) assume the caller
/// already knows the kind and panic otherwise.
///
/// # Example
///
/// ```
/// use axzdict_values::dynamic::Value;
///
/// let mut doc = Value::null();
/// doc["name"] = Value::from("sensor");
/// doc["readings"][2] = Value::from(21.5);
///
/// assert!(doc.is_object());
/// assert_eq!(doc["readings"].size(), 3);
/// assert!(doc["readings"][0].is_null());
/// assert_eq!(doc["readings"][2].number(), 21.5);
/// ```
#[derive(Clone)]
pub struct Value {
    node: Arc<Node>,
}

static_assertions::assert_eq_size!(Value, usize);
static_assertions::assert_impl_all!(Value: Send, Sync);

/// Reports a caller bug: a direct projection used on the wrong kind.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn logic_error(op: &str, found: DictKind) -> ! {
    panic!("Value::{op} is not available for {found} values")
}

impl Value {
    // =========================================================================
    // Construction
    // =========================================================================

    /// The shared Null value. Same as `Value::default()`.
    #[inline]
    pub fn null() -> Self {
        Value {
            node: raw::null_node(),
        }
    }

    /// An empty array.
    pub fn array() -> Self {
        Self::of_kind(DictKind::Array)
    }

    /// An empty object.
    pub fn object() -> Self {
        Self::of_kind(DictKind::Object)
    }

    /// A fresh, empty value of `kind`: `0`, `0.0`, `false`, `""`, no bytes,
    /// no elements, no entries, or a callable returning Null.
    pub fn of_kind(kind: DictKind) -> Self {
        Value {
            node: raw::empty_node(kind),
        }
    }

    pub fn callable(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Value::from_node(Node::Callable(Callable::new(f)))
    }

    #[inline]
    pub(crate) fn from_node(node: Node) -> Self {
        match node {
            Node::Null => Value::null(),
            Node::Bool(b) => Value {
                node: raw::bool_node(b),
            },
            node => Value {
                node: Arc::new(node),
            },
        }
    }

    #[inline]
    pub(crate) fn node(&self) -> &Node {
        &self.node
    }

    /// The node by value, cloning it only if other handles still share it.
    pub(crate) fn into_node(self) -> Node {
        Arc::unwrap_or_clone(self.node)
    }

    /// Mutable access to the node, detaching it first if it is shared.
    #[inline]
    pub(crate) fn node_mut(&mut self) -> &mut Node {
        Arc::make_mut(&mut self.node)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    #[inline]
    pub fn kind(&self) -> DictKind {
        self.node.kind()
    }

    #[inline]
    pub fn is_kind(&self, kind: DictKind) -> bool {
        self.kind() == kind
    }

    pub fn is_null(&self) -> bool {
        matches!(*self.node, Node::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(*self.node, Node::Number(_))
    }

    pub fn is_integral(&self) -> bool {
        matches!(*self.node, Node::Integral(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(*self.node, Node::Bool(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(*self.node, Node::String(_))
    }

    pub fn is_bytes(&self) -> bool {
        matches!(*self.node, Node::Bytes(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(*self.node, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(*self.node, Node::Object(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(*self.node, Node::Callable(_))
    }

    /// `true` if both handles point at the same internal node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    // =========================================================================
    // Direct projections (panic on the wrong kind)
    // =========================================================================

    /// The value as a float. Integral values widen exactly.
    ///
    /// # Panics
    ///
    /// If the value is neither Number nor Integral.
    #[track_caller]
    pub fn number(&self) -> f64 {
        match *self.node {
            Node::Number(n) => n,
            Node::Integral(i) => f64::from(i),
            ref other => logic_error("number", other.kind()),
        }
    }

    /// The value as an `i32`. Numbers truncate toward zero, saturating at the
    /// `i32` bounds; NaN becomes 0.
    ///
    /// # Panics
    ///
    /// If the value is neither Integral nor Number.
    #[track_caller]
    pub fn integral(&self) -> i32 {
        match *self.node {
            Node::Integral(i) => i,
            Node::Number(n) => n as i32,
            ref other => logic_error("integral", other.kind()),
        }
    }

    /// # Panics
    ///
    /// If the value is not Bool.
    #[track_caller]
    pub fn boolean(&self) -> bool {
        match *self.node {
            Node::Bool(b) => b,
            ref other => logic_error("boolean", other.kind()),
        }
    }

    /// # Panics
    ///
    /// If the value is not String.
    #[track_caller]
    pub fn string(&self) -> &str {
        match &*self.node {
            Node::String(s) => s,
            other => logic_error("string", other.kind()),
        }
    }

    /// # Panics
    ///
    /// If the value is not Bytes.
    #[track_caller]
    pub fn bytes(&self) -> &[u8] {
        match &*self.node {
            Node::Bytes(b) => b,
            other => logic_error("bytes", other.kind()),
        }
    }

    /// Number of elements, entries, bytes, or characters.
    ///
    /// # Panics
    ///
    /// If the value is not String, Bytes, Array or Object.
    #[track_caller]
    pub fn size(&self) -> usize {
        match &*self.node {
            Node::String(s) => s.chars().count(),
            Node::Bytes(b) => b.len(),
            Node::Array(items) => items.len(),
            Node::Object(map) => map.len(),
            other => logic_error("size", other.kind()),
        }
    }

    /// `size() == 0`.
    ///
    /// # Panics
    ///
    /// Same as [`size`](Self::size).
    #[track_caller]
    pub fn is_empty(&self) -> bool {
        match &*self.node {
            Node::String(s) => s.is_empty(),
            Node::Bytes(b) => b.is_empty(),
            Node::Array(items) => items.is_empty(),
            Node::Object(map) => map.is_empty(),
            other => logic_error("is_empty", other.kind()),
        }
    }

    // =========================================================================
    // Optional projections
    // =========================================================================

    /// Number or Integral, as a float.
    pub fn as_number(&self) -> Option<f64> {
        match *self.node {
            Node::Number(n) => Some(n),
            Node::Integral(i) => Some(f64::from(i)),
            _ => None,
        }
    }

    /// Integral or Number, as an `i32` (numbers truncate).
    pub fn as_integral(&self) -> Option<i32> {
        match *self.node {
            Node::Integral(i) => Some(i),
            Node::Number(n) => Some(n as i32),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self.node {
            Node::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &*self.node {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match &*self.node {
            Node::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match &*self.node {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectMap> {
        match &*self.node {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match &*self.node {
            Node::Callable(f) => Some(f),
            _ => None,
        }
    }

    /// Mutable string content. Detaches a shared node; never retags.
    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        if !self.is_string() {
            return None;
        }
        match self.node_mut() {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable byte content. Detaches a shared node; never retags.
    pub fn as_bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        if !self.is_bytes() {
            return None;
        }
        match self.node_mut() {
            Node::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Mutable array elements. Detaches a shared node; never retags.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        if !self.is_array() {
            return None;
        }
        match self.node_mut() {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Mutable object entries. Detaches a shared node; never retags.
    pub fn as_object_mut(&mut self) -> Option<&mut ObjectMap> {
        if !self.is_object() {
            return None;
        }
        match self.node_mut() {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    // =========================================================================
    // Soft scalar access
    // =========================================================================

    /// Copy the value out as `T`.
    ///
    /// ```
    /// use axzdict_values::{DictError, dynamic::Value};
    ///
    /// let v = Value::from(7);
    /// assert_eq!(v.val::<i32>(), Ok(7));
    /// assert_eq!(v.val::<f64>(), Ok(7.0));
    /// assert!(matches!(v.val::<String>(), Err(DictError::NotSupported { .. })));
    /// ```
    pub fn val<T: Extract>(&self) -> Result<T> {
        T::extract(self)
    }

    /// Move the value out as `T`.
    ///
    /// Strings and bytes are moved out and leave an empty string or byte
    /// sequence behind; numbers and booleans are copied. Stealing a whole
    /// `Value` leaves Null behind.
    pub fn steal<T: Extract>(&mut self) -> Result<T> {
        T::steal(self)
    }

    /// [`val`](Self::val), discarding the reason on failure.
    pub fn get_if<T: Extract>(&self) -> Option<T> {
        T::extract(self).ok()
    }

    /// Invoke a Callable value.
    pub fn call(&self, input: Value) -> Result<Value> {
        match &*self.node {
            Node::Callable(f) => Ok(f.call(input)),
            other => Err(DictError::not_supported(other.kind())),
        }
    }

    /// The keys of an Object, sorted. Empty for every other kind.
    pub fn keys(&self) -> BTreeSet<Key> {
        match &*self.node {
            Node::Object(map) => map.keys().cloned().collect(),
            _ => BTreeSet::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Discard the content and become a fresh, empty value of `kind`.
    ///
    /// Always installs a new node, even when the kind is unchanged.
    pub fn become_kind(&mut self, kind: DictKind) {
        tracing::debug!(from = %self.kind(), to = %kind, "re-typing value");
        self.node = raw::empty_node(kind);
    }

    /// Empty the content but keep the kind.
    ///
    /// Strings, bytes, arrays and objects become empty. Other kinds are left
    /// as they are.
    pub fn clear(&mut self) {
        let kind = self.kind();
        if !kind.is_sized() {
            return;
        }
        // A shared node would be cloned just to be emptied; swap in a new one.
        let Some(node) = Arc::get_mut(&mut self.node) else {
            self.node = raw::empty_node(kind);
            return;
        };
        match node {
            Node::String(s) => s.clear(),
            Node::Bytes(b) => b.clear(),
            Node::Array(items) => items.clear(),
            Node::Object(map) => map.clear(),
            _ => {}
        }
    }

    /// Drop the content and go back to the shared Null.
    pub fn reset(&mut self) {
        self.node = raw::null_node();
    }

    /// Take the value out, leaving Null behind.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Reserve room for `additional` more elements or entries.
    ///
    /// A no-op for kinds other than Array and Object.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let result = match self.kind() {
            DictKind::Array => match self.node_mut() {
                Node::Array(items) => items.try_reserve(additional).map_err(|_| {
                    let len = items.len();
                    DictError::out_of_range(len.saturating_add(additional), len)
                }),
                _ => Ok(()),
            },
            DictKind::Object => match self.node_mut() {
                Node::Object(map) => map.try_reserve(additional),
                _ => Ok(()),
            },
            _ => Ok(()),
        };
        if let Err(err) = &result {
            tracing::warn!(%err, additional, "reserve failed");
        }
        result
    }

    // =========================================================================
    // Stepper
    // =========================================================================

    /// Hand this value's payload to the one `stepper` method matching its kind.
    ///
    /// Containers are not descended into; a stepper that wants the whole tree
    /// calls `step` on the elements it receives.
    pub fn step<S: Stepper + ?Sized>(&self, stepper: &mut S) -> Result<(), S::Error> {
        match &*self.node {
            Node::Null => stepper.step_null(),
            Node::Number(n) => stepper.step_number(*n),
            Node::Integral(i) => stepper.step_integral(*i),
            Node::Bool(b) => stepper.step_bool(*b),
            Node::String(s) => stepper.step_string(s),
            Node::Bytes(b) => stepper.step_bytes(b),
            Node::Array(items) => stepper.step_array(items),
            Node::Object(map) => stepper.step_object(map),
            Node::Callable(f) => stepper.step_callable(f),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}
