//! Record encoding/decoding for the record wire format.
//!
//! The record envelope carries three reserved keys — `_id`, `_ownerID`,
//! `_access` — next to the user data mapping. Decoding reads the envelope,
//! then recursively decodes every remaining non-reserved key; encoding runs
//! the same transform in reverse.

use log::trace;
use rustc_hash::FxHashMap;
use serde_json::Value as JsonValue;

use crate::codec::acl::{decode_acl, encode_acl};
use crate::codec::primitives::{as_object, get_str};
use crate::codec::value::{decode_value, encode_map};
use crate::error::SchemaError;
use crate::keys;
use crate::model::{format_id, parse_id, Record};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a wire object into a [`Record`].
///
/// Fails with a [`SchemaError`] if any mandatory envelope field is missing
/// or malformed. Wire keys starting with `_` that are not part of the known
/// envelope are treated as foreign envelope metadata and dropped; everything
/// else becomes the data mapping.
pub fn decode_record(wire: &JsonValue) -> Result<Record, SchemaError> {
    let obj = as_object(wire, "record")?;

    let id = parse_id(get_str(obj, keys::ENVELOPE_ID)?)?;
    let owner_id = get_str(obj, keys::ENVELOPE_OWNER_ID)?.to_string();

    let access = obj.get(keys::ENVELOPE_ACCESS).ok_or(SchemaError::MissingField {
        field: keys::ENVELOPE_ACCESS,
    })?;
    let acl = decode_acl(access)?;

    let mut data = FxHashMap::default();
    for (key, value) in obj {
        if keys::is_reserved_key(key) {
            continue;
        }
        data.insert(key.clone(), decode_value(value)?);
    }

    trace!("decoded record {} with {} data fields", id, data.len());
    Ok(Record {
        id,
        owner_id,
        acl,
        data,
    })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a [`Record`] into its wire object.
///
/// The data mapping is encoded first and the envelope keys written on top,
/// so envelope metadata always wins a key collision.
pub fn encode_record(record: &Record) -> JsonValue {
    let mut obj = encode_map(&record.data);
    obj.insert(
        keys::ENVELOPE_ID.to_string(),
        format_id(&record.id).into(),
    );
    obj.insert(
        keys::ENVELOPE_OWNER_ID.to_string(),
        record.owner_id.clone().into(),
    );
    obj.insert(
        keys::ENVELOPE_ACCESS.to_string(),
        encode_acl(record.acl.as_deref()),
    );
    JsonValue::Object(obj)
}
