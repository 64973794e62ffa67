//! Value encoding/decoding for the record wire format.
//!
//! Values recurse through a shared dispatch rule so arbitrarily nested
//! mappings and sequences are handled uniformly. Three leaf types are
//! carried as `$type`-tagged wire objects: timestamps, asset references,
//! and record references.

use log::debug;
use rustc_hash::FxHashMap;
use serde_json::{Map, Value as JsonValue};

use crate::codec::primitives::get_str;
use crate::error::SchemaError;
use crate::keys;
use crate::model::{format_id, parse_id, Asset, Reference, Value};
use crate::util::datetime::{format_rfc3339_utc, parse_rfc3339};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a wire value into a domain [`Value`].
///
/// Mappings carrying a recognized string `$type` decode as the corresponding
/// tagged leaf; an unrecognized `$type` is not an error and falls through to
/// plain-mapping decoding with the discriminator key intact. Sequences
/// decode element-wise, order preserved. Scalars pass through unchanged.
pub fn decode_value(wire: &JsonValue) -> Result<Value, SchemaError> {
    match wire {
        JsonValue::Object(obj) => match obj.get(keys::TAG).and_then(JsonValue::as_str) {
            Some(keys::TAG_DATE) => decode_date(obj),
            Some(keys::TAG_ASSET) => decode_asset(obj),
            Some(keys::TAG_REF) => decode_reference(obj),
            Some(tag) => {
                // Unknown tags degrade to plain-mapping decoding.
                debug!("unrecognized $type {:?}, decoding as a plain mapping", tag);
                Ok(Value::Map(decode_map(obj)?))
            }
            None => Ok(Value::Map(decode_map(obj)?)),
        },
        JsonValue::Array(items) => Ok(Value::List(decode_list(items)?)),
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(v) => Ok(Value::Bool(*v)),
        JsonValue::Number(v) => Ok(Value::Number(v.clone())),
        JsonValue::String(v) => Ok(Value::String(v.clone())),
    }
}

/// Decodes every entry of a wire object into a domain mapping.
pub(crate) fn decode_map(
    obj: &Map<String, JsonValue>,
) -> Result<FxHashMap<String, Value>, SchemaError> {
    let mut map = FxHashMap::with_capacity_and_hasher(obj.len(), Default::default());
    for (key, value) in obj {
        map.insert(key.clone(), decode_value(value)?);
    }
    Ok(map)
}

fn decode_list(items: &[JsonValue]) -> Result<Vec<Value>, SchemaError> {
    items.iter().map(decode_value).collect()
}

fn decode_date(obj: &Map<String, JsonValue>) -> Result<Value, SchemaError> {
    let raw = get_str(obj, keys::DATE_VALUE)?;
    Ok(Value::DateTime(parse_rfc3339(raw)?))
}

fn decode_asset(obj: &Map<String, JsonValue>) -> Result<Value, SchemaError> {
    let name = get_str(obj, keys::ASSET_NAME)?;
    Ok(Value::Asset(Asset::new(name)))
}

fn decode_reference(obj: &Map<String, JsonValue>) -> Result<Value, SchemaError> {
    let target = parse_id(get_str(obj, keys::REF_ID)?)?;
    Ok(Value::Reference(Reference::new(target)))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a domain [`Value`] into its wire form.
///
/// The inverse of [`decode_value`]; infallible because the domain types can
/// only hold encodable shapes.
pub fn encode_value(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        Value::Number(v) => JsonValue::Number(v.clone()),
        Value::String(v) => JsonValue::String(v.clone()),
        Value::List(items) => JsonValue::Array(items.iter().map(encode_value).collect()),
        Value::Map(map) => JsonValue::Object(encode_map(map)),
        Value::DateTime(instant) => encode_datetime(instant),
        Value::Asset(asset) => encode_asset(asset),
        Value::Reference(reference) => encode_reference(reference),
    }
}

/// Encodes every entry of a domain mapping into a wire object.
pub(crate) fn encode_map(map: &FxHashMap<String, Value>) -> Map<String, JsonValue> {
    map.iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

fn encode_datetime(instant: &chrono::DateTime<chrono::Utc>) -> JsonValue {
    let mut obj = Map::new();
    obj.insert(keys::TAG.to_string(), keys::TAG_DATE.into());
    obj.insert(
        keys::DATE_VALUE.to_string(),
        format_rfc3339_utc(instant).into(),
    );
    JsonValue::Object(obj)
}

fn encode_asset(asset: &Asset) -> JsonValue {
    let mut obj = Map::new();
    obj.insert(keys::TAG.to_string(), keys::TAG_ASSET.into());
    obj.insert(keys::ASSET_NAME.to_string(), asset.name.clone().into());
    JsonValue::Object(obj)
}

fn encode_reference(reference: &Reference) -> JsonValue {
    let mut obj = Map::new();
    obj.insert(keys::TAG.to_string(), keys::TAG_REF.into());
    obj.insert(keys::REF_ID.to_string(), format_id(&reference.target).into());
    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use chrono::DateTime;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_scalars_pass_through() {
        for wire in [json!(null), json!(true), json!(42), json!(1.5), json!("text")] {
            let value = decode_value(&wire).unwrap();
            assert_eq!(encode_value(&value), wire);
        }
    }

    #[test]
    fn test_date_roundtrip() {
        let wire = json!({"$type": "date", "$date": "2017-07-23T19:30:24Z"});
        let value = decode_value(&wire).unwrap();
        assert_eq!(
            value,
            Value::DateTime(DateTime::from_timestamp(1500838224, 0).unwrap())
        );
        assert_eq!(encode_value(&value), wire);
    }

    #[test]
    fn test_date_offset_not_preserved() {
        // Decode normalizes to UTC; encode always renders Z.
        let wire = json!({"$type": "date", "$date": "2017-07-23T21:30:24+02:00"});
        let value = decode_value(&wire).unwrap();
        assert_eq!(
            encode_value(&value),
            json!({"$type": "date", "$date": "2017-07-23T19:30:24Z"})
        );
    }

    #[test]
    fn test_date_missing_payload() {
        let wire = json!({"$type": "date"});
        assert_eq!(
            decode_value(&wire).unwrap_err(),
            SchemaError::MissingField { field: "$date" }
        );
    }

    #[test]
    fn test_asset_roundtrip() {
        let wire = json!({"$type": "asset", "$name": "avatar.png"});
        let value = decode_value(&wire).unwrap();
        assert_eq!(value, Value::Asset(Asset::new("avatar.png")));
        assert_eq!(encode_value(&value), wire);
    }

    #[test]
    fn test_reference_roundtrip() {
        let wire = json!({"$type": "ref", "$id": "note/abc123"});
        let value = decode_value(&wire).unwrap();
        assert_eq!(
            value,
            Value::Reference(Reference::new(RecordId::new("note", "abc123")))
        );
        assert_eq!(encode_value(&value), wire);
    }

    #[test]
    fn test_unknown_tag_decodes_as_plain_mapping() {
        let wire = json!({"$type": "unknown-future-tag", "x": 1});
        let value = decode_value(&wire).unwrap();

        let mut expected = FxHashMap::default();
        expected.insert(
            "$type".to_string(),
            Value::String("unknown-future-tag".to_string()),
        );
        expected.insert("x".to_string(), Value::Number(1.into()));
        assert_eq!(value, Value::Map(expected));
    }

    #[test]
    fn test_non_string_tag_decodes_as_plain_mapping() {
        let wire = json!({"$type": 7});
        let value = decode_value(&wire).unwrap();
        assert!(matches!(value, Value::Map(_)));
    }

    #[test]
    fn test_asset_nested_two_levels_deep() {
        // Sibling structure around the tagged leaf must survive encoding.
        let mut inner = FxHashMap::default();
        inner.insert(
            "gallery".to_string(),
            Value::List(vec![
                Value::from("caption"),
                Value::Asset(Asset::new("avatar.png")),
            ]),
        );
        let wire = encode_value(&Value::Map(inner));

        assert_eq!(
            wire,
            json!({
                "gallery": ["caption", {"$type": "asset", "$name": "avatar.png"}],
            })
        );
    }

    #[test]
    fn test_list_order_preserved() {
        let wire = json!([3, 1, 2]);
        let value = decode_value(&wire).unwrap();
        assert_eq!(encode_value(&value), wire);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[a-z0-9 ]{0,12}".prop_map(Value::String),
            // Whole seconds only: the wire carries second resolution.
            (0i64..4_102_444_800).prop_map(|secs| {
                Value::DateTime(DateTime::from_timestamp(secs, 0).unwrap())
            }),
            "[a-z]{1,8}\\.png".prop_map(|name| Value::Asset(Asset::new(name))),
            ("[A-Za-z]{1,8}", "[a-z0-9]{1,8}").prop_map(|(record_type, key)| {
                Value::Reference(Reference::new(RecordId::new(record_type, key)))
            }),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|map| Value::Map(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_value_roundtrip(value in arb_value()) {
            let wire = encode_value(&value);
            let decoded = decode_value(&wire).unwrap();
            prop_assert_eq!(decoded, value);
        }
    }
}
