//! Firestore typed value decoding
//!
//! The REST API wraps every value in a single-key object naming its type,
//! e.g. `{"integerValue": "30"}` or `{"mapValue": {"fields": {...}}}`.

use crate::types::{JsonObject, JsonValue};
use serde_json::Number;

/// Decode a `fields` object into plain JSON
pub fn decode_fields(fields: Option<&JsonValue>) -> JsonObject {
    let mut out = JsonObject::new();
    if let Some(JsonValue::Object(map)) = fields {
        for (key, value) in map {
            out.insert(key.clone(), decode_value(value));
        }
    }
    out
}

/// Decode a single typed value into plain JSON
///
/// Unknown value kinds decode to null.
pub fn decode_value(value: &JsonValue) -> JsonValue {
    let JsonValue::Object(map) = value else {
        return JsonValue::Null;
    };
    let Some((kind, inner)) = map.iter().next() else {
        return JsonValue::Null;
    };

    match kind.as_str() {
        "booleanValue" => inner.as_bool().map_or(JsonValue::Null, JsonValue::Bool),
        "integerValue" => decode_integer(inner),
        "doubleValue" => decode_double(inner),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => match inner {
            JsonValue::String(_) => inner.clone(),
            _ => JsonValue::Null,
        },
        "geoPointValue" => {
            let mut point = JsonObject::new();
            point.insert("latitude".to_string(), decode_double(&inner["latitude"]));
            point.insert("longitude".to_string(), decode_double(&inner["longitude"]));
            JsonValue::Object(point)
        }
        "arrayValue" => JsonValue::Array(
            inner
                .get("values")
                .and_then(JsonValue::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => JsonValue::Object(decode_fields(inner.get("fields"))),
        _ => JsonValue::Null,
    }
}

/// Integers arrive as decimal strings
fn decode_integer(inner: &JsonValue) -> JsonValue {
    match inner {
        JsonValue::String(s) => s
            .parse::<i64>()
            .map_or(JsonValue::Null, |n| JsonValue::Number(n.into())),
        JsonValue::Number(n) => n
            .as_i64()
            .map_or(JsonValue::Null, |n| JsonValue::Number(n.into())),
        _ => JsonValue::Null,
    }
}

/// Doubles stay floats even when integral (`30` decodes to `30.0`)
fn decode_double(inner: &JsonValue) -> JsonValue {
    let f = match inner {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    f.and_then(Number::from_f64)
        .map_or(JsonValue::Null, JsonValue::Number)
}
