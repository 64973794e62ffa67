//! Access-control metadata carried on records.
//!
//! The codec only moves these between the domain and the wire; enforcement
//! lives in the backend.

use serde_json::Value as JsonValue;

/// Opaque grant level attached to an access control entry.
///
/// The backend defines the domain of levels (strings, integers, ...); the
/// codec passes the raw wire value through unmodified and never branches on
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLevel(JsonValue);

impl AccessLevel {
    /// Wraps a raw wire value as an opaque level.
    pub fn new(raw: JsonValue) -> Self {
        Self(raw)
    }

    /// Returns the raw wire value.
    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    /// Consumes the level, returning the raw wire value.
    pub fn into_json(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for AccessLevel {
    fn from(raw: JsonValue) -> Self {
        Self(raw)
    }
}

impl From<&str> for AccessLevel {
    fn from(level: &str) -> Self {
        Self(JsonValue::String(level.to_string()))
    }
}

impl From<String> for AccessLevel {
    fn from(level: String) -> Self {
        Self(JsonValue::String(level))
    }
}

impl From<i64> for AccessLevel {
    fn from(level: i64) -> Self {
        Self(JsonValue::Number(level.into()))
    }
}

/// One grant entry in a record's ACL.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessControlEntry {
    /// Grant to a single principal.
    Direct {
        user_id: String,
        level: AccessLevel,
    },
    /// Grant to every principal satisfying a named relation.
    Relational {
        relation: String,
        level: AccessLevel,
    },
}

impl AccessControlEntry {
    /// Creates a direct grant.
    pub fn direct(user_id: impl Into<String>, level: impl Into<AccessLevel>) -> Self {
        Self::Direct {
            user_id: user_id.into(),
            level: level.into(),
        }
    }

    /// Creates a relational grant.
    pub fn relational(relation: impl Into<String>, level: impl Into<AccessLevel>) -> Self {
        Self::Relational {
            relation: relation.into(),
            level: level.into(),
        }
    }

    /// Returns the grant level of this entry.
    pub fn level(&self) -> &AccessLevel {
        match self {
            Self::Direct { level, .. } => level,
            Self::Relational { level, .. } => level,
        }
    }
}
