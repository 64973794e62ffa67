//! Builder API for ergonomic Record construction.
//!
//! # Example
//!
//! ```rust
//! use keel_record::model::builder::RecordBuilder;
//! use keel_record::{AccessControlEntry, RecordId};
//!
//! let record = RecordBuilder::new(RecordId::new("note", "n1"), "owner-1")
//!     .field("title", "Meeting notes")
//!     .field("starred", true)
//!     .grant(AccessControlEntry::direct("u2", "read"))
//!     .build();
//!
//! assert_eq!(record.acl.as_ref().map(Vec::len), Some(1));
//! ```

use rustc_hash::FxHashMap;

use crate::model::{AccessControlEntry, Record, RecordId, Value};

/// Builder for constructing a [`Record`].
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id: RecordId,
    owner_id: String,
    acl: Option<Vec<AccessControlEntry>>,
    data: FxHashMap<String, Value>,
}

impl RecordBuilder {
    /// Creates a builder for a record with the given identity and owner.
    ///
    /// The ACL starts unset ("defer to system default").
    pub fn new(id: RecordId, owner_id: impl Into<String>) -> Self {
        Self {
            id,
            owner_id: owner_id.into(),
            acl: None,
            data: FxHashMap::default(),
        }
    }

    /// Sets a data field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Replaces the ACL with an explicit list of entries.
    ///
    /// An empty iterator yields `Some(vec![])` — "explicitly no grants",
    /// which is distinct from the unset default.
    pub fn acl(mut self, entries: impl IntoIterator<Item = AccessControlEntry>) -> Self {
        self.acl = Some(entries.into_iter().collect());
        self
    }

    /// Appends one grant, making the ACL explicit if it was unset.
    pub fn grant(mut self, entry: AccessControlEntry) -> Self {
        self.acl.get_or_insert_with(Vec::new).push(entry);
        self
    }

    /// Builds the record.
    pub fn build(self) -> Record {
        Record {
            id: self.id,
            owner_id: self.owner_id,
            acl: self.acl,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let record = RecordBuilder::new(RecordId::new("note", "n1"), "owner").build();
        assert_eq!(record.acl, None);
        assert!(record.data.is_empty());
    }

    #[test]
    fn test_builder_fields_and_grants() {
        let record = RecordBuilder::new(RecordId::new("note", "n1"), "owner")
            .field("title", "hello")
            .grant(AccessControlEntry::relational("friend", "read"))
            .grant(AccessControlEntry::direct("u2", "write"))
            .build();

        assert_eq!(record.get("title"), Some(&Value::from("hello")));
        assert_eq!(record.acl.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_explicit_empty_acl_is_not_unset() {
        let record = RecordBuilder::new(RecordId::new("note", "n1"), "owner")
            .acl([])
            .build();
        assert_eq!(record.acl, Some(Vec::new()));
    }
}
