//! ACL encoding/decoding for the record wire format.
//!
//! An ACL is `null` (unset — defer to the system default) or an array of
//! access control entries. The reserved relation value `$direct` marks a
//! grant to a single principal; any other relation names a relational grant.

use serde_json::{Map, Value as JsonValue};

use crate::codec::primitives::{as_object, get_str};
use crate::error::SchemaError;
use crate::keys;
use crate::model::{AccessControlEntry, AccessLevel};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes the `_access` wire value.
///
/// `null` yields an unset ACL, distinct from an empty list ("explicitly no
/// grants"). Anything other than `null` or an array is a schema error.
pub fn decode_acl(wire: &JsonValue) -> Result<Option<Vec<AccessControlEntry>>, SchemaError> {
    match wire {
        JsonValue::Null => Ok(None),
        JsonValue::Array(entries) => entries
            .iter()
            .map(decode_ace)
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        _ => Err(SchemaError::AclNotAList),
    }
}

/// Decodes one access control entry.
///
/// The `level` value is opaque and passed through untyped; no validation is
/// applied beyond requiring its presence.
pub fn decode_ace(wire: &JsonValue) -> Result<AccessControlEntry, SchemaError> {
    let obj = as_object(wire, "access control entry")?;

    let level = match obj.get(keys::ACE_LEVEL) {
        Some(raw) => AccessLevel::new(raw.clone()),
        None => {
            return Err(SchemaError::MissingField {
                field: keys::ACE_LEVEL,
            });
        }
    };

    let relation = get_str(obj, keys::ACE_RELATION)?;
    if relation == keys::DIRECT_RELATION {
        let user_id = get_str(obj, keys::ACE_USER_ID)?;
        Ok(AccessControlEntry::Direct {
            user_id: user_id.to_string(),
            level,
        })
    } else {
        Ok(AccessControlEntry::Relational {
            relation: relation.to_string(),
            level,
        })
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes an ACL as its `_access` wire value: `null` when unset, else the
/// encoded entry list.
pub fn encode_acl(acl: Option<&[AccessControlEntry]>) -> JsonValue {
    match acl {
        None => JsonValue::Null,
        Some(entries) => JsonValue::Array(entries.iter().map(encode_ace).collect()),
    }
}

/// Encodes one access control entry.
pub fn encode_ace(ace: &AccessControlEntry) -> JsonValue {
    let mut obj = Map::new();
    match ace {
        AccessControlEntry::Relational { relation, level } => {
            obj.insert(keys::ACE_LEVEL.to_string(), level.as_json().clone());
            obj.insert(keys::ACE_RELATION.to_string(), relation.clone().into());
        }
        AccessControlEntry::Direct { user_id, level } => {
            obj.insert(keys::ACE_LEVEL.to_string(), level.as_json().clone());
            obj.insert(
                keys::ACE_RELATION.to_string(),
                keys::DIRECT_RELATION.into(),
            );
            obj.insert(keys::ACE_USER_ID.to_string(), user_id.clone().into());
        }
    }
    JsonValue::Object(obj)
}
