//! Wire serialization of handler failures.
//!
//! When a plugin handler fails, the backend expects the error as a
//! `{"name": ..., "desc": ...}` object in place of the record payload.

use serde_json::{Map, Value as JsonValue};

use crate::keys;

/// Encodes an error as its wire fault object.
///
/// `name` is the error's display rendering; `desc` is the full source chain,
/// one cause per line.
pub fn encode_fault(err: &(dyn std::error::Error + 'static)) -> JsonValue {
    let mut desc = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        desc.push_str("\ncaused by: ");
        desc.push_str(&cause.to_string());
        source = cause.source();
    }

    let mut obj = Map::new();
    obj.insert(keys::FAULT_NAME.to_string(), err.to_string().into());
    obj.insert(keys::FAULT_DESC.to_string(), desc.into());
    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use serde_json::json;

    #[test]
    fn test_encode_fault() {
        let err = SchemaError::AclNotAList;
        assert_eq!(
            encode_fault(&err),
            json!({
                "name": "expected ACL to be a list",
                "desc": "expected ACL to be a list",
            })
        );
    }

    #[test]
    fn test_encode_fault_renders_source_chain() {
        #[derive(Debug)]
        struct Outer(SchemaError);

        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "record rejected")
            }
        }

        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let wire = encode_fault(&Outer(SchemaError::AclNotAList));
        assert_eq!(wire.get("name"), Some(&json!("record rejected")));
        assert_eq!(
            wire.get("desc"),
            Some(&json!("record rejected\ncaused by: expected ACL to be a list"))
        );
    }
}
