//! Reserved identifiers of the record wire format.
//!
//! Every key the codec treats specially is named here. Keys prefixed with
//! `_` carry envelope metadata and are never part of user data; keys
//! prefixed with `$` appear inside tagged value objects and access control
//! entries.

/// Envelope key holding the `"<type>/<key>"` record identifier.
pub const ENVELOPE_ID: &str = "_id";

/// Envelope key holding the owning principal's identifier.
pub const ENVELOPE_OWNER_ID: &str = "_ownerID";

/// Envelope key holding the ACL: `null` (unset) or an array of ACEs.
pub const ENVELOPE_ACCESS: &str = "_access";

/// Discriminator key of a tagged value object.
pub const TAG: &str = "$type";

/// `$type` value for a timestamp: `{"$type": "date", "$date": <RFC 3339>}`.
pub const TAG_DATE: &str = "date";

/// `$type` value for an asset reference: `{"$type": "asset", "$name": <name>}`.
pub const TAG_ASSET: &str = "asset";

/// `$type` value for a record reference: `{"$type": "ref", "$id": "<type>/<key>"}`.
pub const TAG_REF: &str = "ref";

/// Payload key of a `date`-tagged object.
pub const DATE_VALUE: &str = "$date";

/// Payload key of an `asset`-tagged object.
pub const ASSET_NAME: &str = "$name";

/// Payload key of a `ref`-tagged object.
pub const REF_ID: &str = "$id";

/// ACE key holding the opaque grant level.
pub const ACE_LEVEL: &str = "level";

/// ACE key holding the relation name, or [`DIRECT_RELATION`].
pub const ACE_RELATION: &str = "relation";

/// ACE key holding the principal of a direct grant.
pub const ACE_USER_ID: &str = "user_id";

/// Reserved `relation` value marking a grant to a single principal.
pub const DIRECT_RELATION: &str = "$direct";

/// Fault object key holding the error message.
pub const FAULT_NAME: &str = "name";

/// Fault object key holding the error detail.
pub const FAULT_DESC: &str = "desc";

/// Returns true if a wire key is reserved for envelope metadata.
///
/// Reserved keys are excluded from the decoded data mapping; this covers the
/// three known envelope keys and any future `_`-prefixed additions.
pub fn is_reserved_key(key: &str) -> bool {
    key.starts_with('_')
}
