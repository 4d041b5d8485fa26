//! Schema inference from a sample record

use super::types::{AttributeKind, AttributeSchema, AttributeSpec};
use crate::types::Record;
use serde_json::Value;

/// Infer the attribute kind of a single value
///
/// Booleans are checked before numbers so `true` never becomes an integer.
pub fn infer_kind(value: &Value) -> AttributeKind {
    match value {
        Value::Bool(_) => AttributeKind::Boolean,
        Value::Number(n) if n.is_i64() || n.is_u64() => AttributeKind::Integer,
        Value::Number(_) => AttributeKind::Float,
        Value::String(_) | Value::Object(_) | Value::Array(_) | Value::Null => {
            AttributeKind::String
        }
    }
}

/// Infer the attribute schema of a collection from its first record
pub fn infer_schema(sample: &Record) -> AttributeSchema {
    let mut schema = AttributeSchema::new();
    for (key, value) in &sample.fields {
        schema.push(AttributeSpec::inferred(key.clone(), infer_kind(value)));
    }
    schema
}
