//! Low-level wire-mapping accessors shared by the codec modules.
//!
//! Each accessor carries a `&'static str` context so schema errors name the
//! field or object that was malformed.

use serde_json::{Map, Value as JsonValue};

use crate::error::SchemaError;

/// Requires a wire value to be a JSON object.
pub(crate) fn as_object<'a>(
    wire: &'a JsonValue,
    context: &'static str,
) -> Result<&'a Map<String, JsonValue>, SchemaError> {
    wire.as_object()
        .ok_or(SchemaError::ExpectedObject { context })
}

/// Reads a mandatory string field from a wire object.
pub(crate) fn get_str<'a>(
    obj: &'a Map<String, JsonValue>,
    field: &'static str,
) -> Result<&'a str, SchemaError> {
    match obj.get(field) {
        None => Err(SchemaError::MissingField { field }),
        Some(JsonValue::String(s)) => Ok(s),
        Some(_) => Err(SchemaError::ExpectedString { field }),
    }
}
