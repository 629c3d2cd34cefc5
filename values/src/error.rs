//! Recoverable error types.
//!
//! Value operations fail in one of two ways:
//!
//! - **Soft failures** are ordinary outcomes the caller is expected to branch
//!   on: asking a string for a number, looking up a missing key, reading past
//!   the end of an array. These return [`DictError`] through [`Result`].
//! - **Logic errors** are caller bugs: projecting a number out of a string
//!   with [`Value::number`](crate::dynamic::Value::number), calling `size()`
//!   on a boolean, indexing a non-container. These panic.
//!
//! Successful insertions report whether they created or replaced an entry via
//! [`Added`]. [`Status`] flattens either side into the flat code set that
//! code-driven collaborators branch on.

use alloc::{string::String, vec::Vec};

use thiserror::Error;

use crate::dynamic::Value;
use crate::key::Key;
use crate::kind::DictKind;

/// Result alias for soft value operations.
pub type Result<T, E = DictError> = core::result::Result<T, E>;

/// Soft failure of a value operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictError {
    /// The operation does not apply to a value of this kind.
    #[error("operation not supported on {kind} value")]
    NotSupported { kind: DictKind },

    /// The object has no entry for the key.
    #[error("key not found: {key:?}")]
    NotFound { key: Key },

    /// The array index (or requested capacity) is past the valid range.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An argument has the wrong shape, e.g. merging a non-object into an object.
    #[error("invalid input: expected {expected} value, found {found}")]
    InvalidInput { expected: DictKind, found: DictKind },

    /// The object's hash table could not grow.
    #[error("hash table could not reserve capacity for {capacity} entries")]
    HashError { capacity: usize },
}

impl DictError {
    pub(crate) fn not_supported(kind: DictKind) -> Self {
        DictError::NotSupported { kind }
    }

    pub(crate) fn not_found(key: &str) -> Self {
        DictError::NotFound { key: Key::from(key) }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        DictError::OutOfRange { index, len }
    }
}

/// Successful outcome of inserting into a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Added {
    /// A new element or key was created.
    Inserted,

    /// An existing key was overwritten.
    Replaced,
}

/// Flat result code covering both successes and soft failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    OkReplaced,
    NotSupported,
    NotFound,
    OutOfRange,
    InvalidInput,
    HashError,
}

impl Status {
    /// `Ok` or `OkReplaced`.
    pub fn is_success(self) -> bool {
        matches!(self, Status::Ok | Status::OkReplaced)
    }
}

/// Conversion of an operation outcome into a [`Status`] code.
///
/// ```
/// use axzdict_values::{Status, ToStatus, dynamic::Value};
///
/// let mut obj = Value::object();
/// assert_eq!(obj.add_key("a", 1).to_status(), Status::Ok);
/// assert_eq!(obj.add_key("a", 2).to_status(), Status::OkReplaced);
/// assert_eq!(obj.remove_key("b").to_status(), Status::NotFound);
/// ```
pub trait ToStatus {
    fn to_status(&self) -> Status;
}

impl ToStatus for () {
    fn to_status(&self) -> Status {
        Status::Ok
    }
}

impl ToStatus for Added {
    fn to_status(&self) -> Status {
        match self {
            Added::Inserted => Status::Ok,
            Added::Replaced => Status::OkReplaced,
        }
    }
}

// Payloads handed back by a successful `remove`, `val` or `steal`.
macro_rules! impl_ok_status {
    ($($ty:ty),*) => {
        $(
            impl ToStatus for $ty {
                fn to_status(&self) -> Status {
                    Status::Ok
                }
            }
        )*
    };
}

impl_ok_status!(Value, i32, f64, bool, String, Vec<u8>);

impl ToStatus for DictError {
    fn to_status(&self) -> Status {
        match self {
            DictError::NotSupported { .. } => Status::NotSupported,
            DictError::NotFound { .. } => Status::NotFound,
            DictError::OutOfRange { .. } => Status::OutOfRange,
            DictError::InvalidInput { .. } => Status::InvalidInput,
            DictError::HashError { .. } => Status::HashError,
        }
    }
}

impl<T: ToStatus> ToStatus for Result<T> {
    fn to_status(&self) -> Status {
        match self {
            Ok(ok) => ok.to_status(),
            Err(err) => err.to_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_of_results() {
        let inserted: Result<Added> = Ok(Added::Inserted);
        let replaced: Result<Added> = Ok(Added::Replaced);
        let missing: Result<()> = Err(DictError::not_found("k"));
        assert_eq!(inserted.to_status(), Status::Ok);
        assert_eq!(replaced.to_status(), Status::OkReplaced);
        assert_eq!(missing.to_status(), Status::NotFound);
        assert!(replaced.to_status().is_success());
        assert!(!missing.to_status().is_success());
    }

    #[test]
    fn test_status_of_extracted_values() {
        let v = Value::from(7);
        assert_eq!(v.val::<i32>().to_status(), Status::Ok);
        assert_eq!(v.val::<f64>().to_status(), Status::Ok);
        assert_eq!(v.val::<bool>().to_status(), Status::NotSupported);
        assert_eq!(v.val::<String>().to_status(), Status::NotSupported);
        assert_eq!(Value::from("s").val::<String>().to_status(), Status::Ok);
        assert_eq!(Value::from(vec![1u8]).val::<Vec<u8>>().to_status(), Status::Ok);
        assert_eq!(Value::array().val_index::<i32>(0).to_status(), Status::OutOfRange);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DictError::not_supported(DictKind::Bool).to_string(),
            "operation not supported on bool value"
        );
        assert_eq!(
            DictError::out_of_range(7, 3).to_string(),
            "index 7 out of range for length 3"
        );
        assert_eq!(
            DictError::not_found("name").to_string(),
            "key not found: \"name\""
        );
    }
}
