//! Value types for record data fields.
//!
//! A data field holds either a plain JSON scalar, a nested mapping or
//! sequence, or one of the tagged leaf types the wire format singles out:
//! timestamps, asset references, and record references.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde_json::Number;

use crate::model::RecordId;

/// Reference to a named external blob.
///
/// Carries the name only; the bytes live in the backend's asset store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asset {
    pub name: String,
}

impl Asset {
    /// Creates an asset reference by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Weak pointer to another record.
///
/// Carries identity only: no ownership, no embedded data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub target: RecordId,
}

impl Reference {
    /// Creates a reference to the given record identity.
    pub fn new(target: RecordId) -> Self {
        Self { target }
    }
}

/// A value held at a record data key.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, integer or float.
    Number(Number),
    /// JSON string.
    String(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Nested mapping of values.
    Map(FxHashMap<String, Value>),
    /// A UTC instant, carried on the wire as a `date`-tagged object.
    DateTime(DateTime<Utc>),
    /// An asset reference, carried as an `asset`-tagged object.
    Asset(Asset),
    /// A record reference, carried as a `ref`-tagged object.
    Reference(Reference),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<FxHashMap<String, Value>> for Value {
    fn from(v: FxHashMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Asset> for Value {
    fn from(v: Asset) -> Self {
        Value::Asset(v)
    }
}

impl From<Reference> for Value {
    fn from(v: Reference) -> Self {
        Value::Reference(v)
    }
}
