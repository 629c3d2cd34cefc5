//! Dynamically typed values for payloads whose shape is only known at runtime.
//!
//! A [`Value`] is a single pointer-sized handle to a tagged, reference-counted
//! node that is one of nine [kinds](DictKind): Null, Number, Integral, Bool,
//! String, Bytes, Array, Object or Callable. Arrays and objects nest values, so
//! one handle can carry an arbitrary tree.
//!
//! - [`dynamic`] holds the handle itself: construction, typed and soft access,
//!   keyed and indexed access with auto-promotion of Null, iteration.
//! - [`object`] is the hash map behind Object, keyed by shared [`Key`]s and
//!   hashed with `axzdict_wide_fnv`.
//! - [`shared`] wraps a value in a reader-writer lock for concurrent mutation.
//! - [`traits`] has the [`Stepper`] visitor and the [`Extract`] conversion.
//! - [`error`] has the soft-failure [`DictError`] and the flat [`Status`] codes.
//!
//! ```
//! use axzdict_values::{object, array, Value};
//!
//! let v = object! {
//!     "id" => 7,
//!     "tags" => array!["a", "b"],
//! };
//! assert_eq!(v["id"].integral(), 7);
//! assert_eq!(v["tags"][1].string(), "b");
//! ```

#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod callable;
pub mod dynamic;
pub mod error;
pub mod key;
pub mod kind;
pub mod object;
pub mod shared;
pub mod traits;

mod raw;

pub use callable::Callable;
pub use dynamic::Value;
pub use error::{Added, DictError, Result, Status, ToStatus};
pub use key::Key;
pub use kind::DictKind;
pub use object::ObjectMap;
pub use shared::SharedValue;
pub use traits::{Extract, Stepper};
