//! Error types for record decoding.

use thiserror::Error;

/// Error raised when a wire object does not satisfy the record schema.
///
/// Decoding either fully succeeds or fails with one of these before any
/// partial result is produced. Encoding has no failure modes: the domain
/// model is a set of closed sum types, so the malformed shapes below cannot
/// be constructed in the first place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A wire value that must be a JSON object was something else.
    #[error("expected {context} to be an object")]
    ExpectedObject { context: &'static str },

    /// A mandatory wire field is absent.
    #[error("missing required field {field:?}")]
    MissingField { field: &'static str },

    /// A wire field that must be a string was something else.
    #[error("expected field {field:?} to be a string")]
    ExpectedString { field: &'static str },

    /// A record identifier string with no `/` separator.
    #[error("malformed record id {id:?}: expected \"<type>/<key>\"")]
    MalformedId { id: String },

    /// `_access` was present but neither `null` nor an array.
    #[error("expected ACL to be a list")]
    AclNotAList,

    /// A `$date` payload that is not a valid RFC 3339 timestamp.
    #[error("invalid RFC 3339 timestamp {value:?}: {message}")]
    InvalidTimestamp { value: String, message: String },
}
