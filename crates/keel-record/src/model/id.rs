//! Record identifiers.
//!
//! A record is identified by a `(type, key)` pair, carried on the wire as a
//! single `"<type>/<key>"` string.

use std::fmt;

use crate::error::SchemaError;

/// Identifies a record uniquely within the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId {
    /// The record type, e.g. `"note"`. Must not contain `/`.
    pub record_type: String,
    /// The record key within its type.
    pub key: String,
}

impl RecordId {
    /// Creates a new record identifier.
    pub fn new(record_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            record_type: record_type.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.record_type, self.key)
    }
}

/// Parses a `"<type>/<key>"` identifier string.
///
/// The string is split on `/` and the first two segments become the type and
/// key. A known limitation inherited from the backend's own split: any
/// segment after a second `/` is silently dropped, so `"Note/a/b"` parses as
/// `("Note", "a")`. The only rejected input is a string with no `/` at all.
pub fn parse_id(s: &str) -> Result<RecordId, SchemaError> {
    let mut segments = s.split('/');
    match (segments.next(), segments.next()) {
        (Some(record_type), Some(key)) => Ok(RecordId::new(record_type, key)),
        _ => Err(SchemaError::MalformedId { id: s.to_string() }),
    }
}

/// Formats a record identifier as its `"<type>/<key>"` wire string.
pub fn format_id(id: &RecordId) -> String {
    id.to_string()
}
