//! Simple decoder to inspect record wire objects.

use std::fs;

use keel_record::{decode_record, AccessControlEntry, Value};

fn format_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("{}", b),
        Value::Number(n) => format!("{}", n),
        Value::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::List(items) => format!("LIST[{}]", items.len()),
        Value::Map(map) => format!("MAP[{}]", map.len()),
        Value::DateTime(instant) => format!("DATE({})", instant),
        Value::Asset(asset) => format!("ASSET({})", asset.name),
        Value::Reference(reference) => format!("REF({})", reference.target),
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "record.json".to_string());

    println!("Reading: {}", path);

    let raw = fs::read_to_string(&path).expect("Failed to read file");
    let wire = serde_json::from_str(&raw).expect("Failed to parse JSON");
    let record = decode_record(&wire).expect("Failed to decode");

    println!("\n=== Record Info ===");
    println!("ID: {}", record.id);
    println!("Owner: {}", record.owner_id);

    match &record.acl {
        None => println!("ACL: unset (system default)"),
        Some(entries) => {
            println!("ACL: {} entries", entries.len());
            for entry in entries {
                match entry {
                    AccessControlEntry::Direct { user_id, level } => {
                        println!("  - user {} -> {}", user_id, level.as_json());
                    }
                    AccessControlEntry::Relational { relation, level } => {
                        println!("  - relation {} -> {}", relation, level.as_json());
                    }
                }
            }
        }
    }

    println!("\n=== Data ({} fields) ===", record.data.len());
    let mut fields: Vec<(&str, &Value)> = record
        .data
        .iter()
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    fields.sort_by_key(|field| field.0);
    for (key, value) in fields {
        println!("  {} = {}", key, format_value(value));
    }
}
