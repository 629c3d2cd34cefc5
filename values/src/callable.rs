use alloc::sync::Arc;
use core::fmt;

use crate::dynamic::Value;

type CallableFn = dyn Fn(Value) -> Value + Send + Sync;

/// A function value: takes one [`Value`], returns one [`Value`].
///
/// Cloning shares the underlying closure. Two callables are equal only when
/// they share the same closure.
#[derive(Clone)]
pub struct Callable(Arc<CallableFn>);

impl Callable {
    pub fn new(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Callable(Arc::new(f))
    }

    /// A callable that ignores its input and returns Null.
    pub fn null() -> Self {
        Callable::new(|_| Value::null())
    }

    #[inline]
    pub fn call(&self, input: Value) -> Value {
        (self.0)(input)
    }

    pub fn ptr_eq(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}
