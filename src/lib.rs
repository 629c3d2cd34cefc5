//! AxzDict - a dynamically typed value container
//!
//! # Overview
//!
//! AxzDict carries structured payloads whose shape is only known at runtime:
//! decoded documents, configuration trees, messages passed between
//! components that do not share a schema. A [`Value`] is one of nine kinds
//! (Null, Number, Integral, Bool, String, Bytes, Array, Object, Callable), and
//! Arrays and Objects nest values into trees.
//!
//! # Quick Start
//!
//! ```
//! use axzdict::{DictKind, Status, ToStatus, Value};
//!
//! // Writing through a key or index promotes Null into a container.
//! let mut doc = Value::default();
//! doc["user"]["name"] = Value::from("ada");
//! doc["user"]["langs"][1] = Value::from("rust");
//!
//! assert_eq!(doc.kind(), DictKind::Object);
//! assert_eq!(doc["user"]["langs"].size(), 2);
//! assert!(doc["user"]["langs"][0].is_null());
//!
//! // Soft accessors report failures instead of panicking.
//! assert_eq!(doc["user"].val_key::<String>("name").as_deref(), Ok("ada"));
//! assert_eq!(doc["user"].val_key::<i32>("name").to_status(), Status::NotSupported);
//! assert_eq!(doc.remove_key("missing").to_status(), Status::NotFound);
//! ```
//!
//! # Sharing
//!
//! Cloning a [`Value`] is cheap and yields an independent copy-on-write
//! snapshot. Use [`SharedValue`] when several threads must mutate one value
//! and see each other's changes.
//!
//! # Serializing
//!
//! A serializer implements [`Stepper`] and drives [`Value::step`]: each call
//! dispatches to exactly one method for the value's kind.
//!
//! # Features
//!
//! - `wide-hash` (default): hash object keys longer than 16 bytes four words
//!   at a time. Without it every key uses plain FNV-1a.

pub use axzdict_values::{
    Added, Callable, DictError, DictKind, Extract, Key, ObjectMap, Result, SharedValue, Status,
    Stepper, ToStatus, Value, array, object,
};

pub use axzdict_values::{callable, dynamic, error, key, kind, shared, traits};
