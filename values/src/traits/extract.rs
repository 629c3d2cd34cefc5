//! Conversion out of a [`Value`] into a native Rust type.
//!
//! `Extract` backs the soft accessors: [`Value::val`], [`Value::steal`],
//! [`Value::get_if`] and their keyed and indexed forms.
//!
//! # Implemented for
//!
//! - `f64` (Number, or Integral widened)
//! - `i32` (Integral, or Number truncated)
//! - `bool` (Bool)
//! - `String` (String)
//! - `Vec<u8>` (Bytes)
//! - [`Value`] itself (any kind)

use alloc::{string::String, vec::Vec};
use core::mem;

use crate::dynamic::Value;
use crate::error::{DictError, Result};
use crate::kind::DictKind;

/// A Rust type that can be read out of a [`Value`].
pub trait Extract: Sized {
    /// Allocation-free kind check: can a value of `kind` produce `Self`?
    fn matches_kind(kind: DictKind) -> bool;

    /// Copy the payload out. `NotSupported` if the kind does not match.
    fn extract(value: &Value) -> Result<Self>;

    /// Move the payload out, leaving an empty payload of the same kind.
    ///
    /// Must not modify `value` when it fails. Copy types just extract.
    fn steal(value: &mut Value) -> Result<Self> {
        Self::extract(value)
    }
}

fn mismatch(value: &Value) -> DictError {
    DictError::not_supported(value.kind())
}

// =============================================================================
// Primitive implementations
// =============================================================================

impl Extract for f64 {
    fn matches_kind(kind: DictKind) -> bool {
        kind.is_numeric()
    }

    fn extract(value: &Value) -> Result<Self> {
        value.as_number().ok_or_else(|| mismatch(value))
    }
}

impl Extract for i32 {
    fn matches_kind(kind: DictKind) -> bool {
        kind.is_numeric()
    }

    fn extract(value: &Value) -> Result<Self> {
        value.as_integral().ok_or_else(|| mismatch(value))
    }
}

impl Extract for bool {
    fn matches_kind(kind: DictKind) -> bool {
        kind == DictKind::Bool
    }

    fn extract(value: &Value) -> Result<Self> {
        value.as_bool().ok_or_else(|| mismatch(value))
    }
}

// =============================================================================
// Owned payloads
// =============================================================================

impl Extract for String {
    fn matches_kind(kind: DictKind) -> bool {
        kind == DictKind::String
    }

    fn extract(value: &Value) -> Result<Self> {
        value.as_str().map(String::from).ok_or_else(|| mismatch(value))
    }

    fn steal(value: &mut Value) -> Result<Self> {
        let err = mismatch(value);
        value.as_string_mut().map(mem::take).ok_or(err)
    }
}

impl Extract for Vec<u8> {
    fn matches_kind(kind: DictKind) -> bool {
        kind == DictKind::Bytes
    }

    fn extract(value: &Value) -> Result<Self> {
        value.as_bytes().map(<[u8]>::to_vec).ok_or_else(|| mismatch(value))
    }

    fn steal(value: &mut Value) -> Result<Self> {
        let err = mismatch(value);
        value.as_bytes_mut().map(mem::take).ok_or(err)
    }
}

/// Any kind: extracting clones the handle, stealing leaves Null behind.
impl Extract for Value {
    fn matches_kind(_: DictKind) -> bool {
        true
    }

    fn extract(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }

    fn steal(value: &mut Value) -> Result<Self> {
        Ok(value.take())
    }
}
