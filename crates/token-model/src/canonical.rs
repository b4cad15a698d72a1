//! Canonical serialization for structural comparison
//!
//! The merge engine classifies changes by comparing serialized values, so
//! the serialization must be genuinely canonical: two values differing only
//! in object key order produce identical strings. Every object is rebuilt
//! with sorted keys before serializing rather than relying on the
//! serializer's incidental map ordering.

use serde_json::{Map, Value};

/// Serialize a value with every object's keys in sorted order.
///
/// # Errors
///
/// Propagates the underlying serialization error; callers attach the
/// offending path.
pub fn canonical_string(value: &Value) -> serde_json::Result<String> {
    serde_json::to_string(&canonicalize(value))
}

/// Rebuild a value with sorted object keys at every nesting level
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, child) in entries {
                sorted.insert(key.clone(), canonicalize(child));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        _ => value.clone(),
    }
}
