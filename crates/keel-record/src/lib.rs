//! Record wire codec for the Keel plugin protocol.
//!
//! This crate translates between the plugin's in-memory record model and the
//! JSON-compatible wire representation exchanged with the backend process.
//!
//! # Overview
//!
//! A record carries identity, ownership, access-control metadata, and a
//! mapping of typed data fields. On the wire all of that is a single JSON
//! object: reserved `_`-prefixed keys hold the envelope, and every other key
//! is user data. Three leaf types — timestamps, asset references, and record
//! references — travel as `$type`-tagged objects; everything else is plain
//! JSON, nested to any depth.
//!
//! # Quick Start
//!
//! ```rust
//! use keel_record::{decode_record, encode_record, RecordId, Value};
//! use serde_json::json;
//!
//! let wire = json!({
//!     "_id": "note/abc123",
//!     "_ownerID": "u1",
//!     "_access": null,
//!     "title": "hello",
//! });
//!
//! // Decode to the domain model
//! let record = decode_record(&wire).unwrap();
//! assert_eq!(record.id, RecordId::new("note", "abc123"));
//! assert_eq!(record.get("title"), Some(&Value::from("hello")));
//!
//! // Encode back
//! assert_eq!(encode_record(&record), wire);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Record, RecordId, Value, ACL entries)
//! - [`codec`]: JSON wire encoding/decoding
//! - [`keys`]: Reserved wire keys and tags
//! - [`error`]: Error types
//! - [`util`]: RFC 3339 timestamp helpers
//!
//! # Concurrency
//!
//! Both codec directions are pure, stateless tree transforms. Every call
//! operates on its own input and allocates its own output, so encoding and
//! decoding may run concurrently from any number of threads without
//! synchronization.
//!
//! # Errors
//!
//! Decoding fails with [`SchemaError`] when a mandatory envelope field is
//! missing or malformed; no partial records are produced. Encoding is
//! infallible. Unknown `$type` tags are deliberately not an error: they
//! decode as plain mappings so future tag values degrade instead of failing.

pub mod codec;
pub mod error;
pub mod keys;
pub mod model;
pub mod util;

// Re-export commonly used items at crate root
pub use codec::{
    decode_ace, decode_acl, decode_record, decode_value, encode_ace, encode_acl, encode_fault,
    encode_record, encode_value,
};
pub use error::SchemaError;
pub use model::{
    format_id, parse_id, AccessControlEntry, AccessLevel, Asset, Record, RecordBuilder, RecordId,
    Reference, Value,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
