//! The record aggregate.

use rustc_hash::FxHashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::codec::{decode_record, encode_record};
use crate::model::{AccessControlEntry, RecordId, Value};

/// The unit of stored data: identity, ownership, ACL, and a data mapping.
///
/// A fresh `Record` is produced by every decode call and consumed by every
/// encode call; it owns its data mapping and ACL outright, so records can be
/// moved freely across threads.
///
/// `acl` distinguishes two states the wire also distinguishes: `None` means
/// "no explicit ACL, defer to the system default" and encodes as `null`,
/// while `Some(vec![])` means "explicitly no grants" and encodes as `[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub owner_id: String,
    pub acl: Option<Vec<AccessControlEntry>>,
    pub data: FxHashMap<String, Value>,
}

impl Record {
    /// Creates an empty record with no explicit ACL.
    pub fn new(id: RecordId, owner_id: impl Into<String>) -> Self {
        Self {
            id,
            owner_id: owner_id.into(),
            acl: None,
            data: FxHashMap::default(),
        }
    }

    /// Returns the value at a data key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Sets a data field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }
}

/// Serializes as the wire object, so records drop straight into transport
/// payload structs.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode_record(self).serialize(serializer)
    }
}

/// Deserializes from the wire object, surfacing schema violations as
/// deserialization errors.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = JsonValue::deserialize(deserializer)?;
        decode_record(&wire).map_err(D::Error::custom)
    }
}
