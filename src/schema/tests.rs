//! Schema inference tests

use super::*;
use crate::types::Record;
use serde_json::{json, Value};
use test_case::test_case;

#[test_case(json!(true), AttributeKind::Boolean ; "boolean true")]
#[test_case(json!(false), AttributeKind::Boolean ; "boolean false")]
#[test_case(json!(30), AttributeKind::Integer ; "positive integer")]
#[test_case(json!(-7), AttributeKind::Integer ; "negative integer")]
#[test_case(json!(u64::MAX), AttributeKind::Integer ; "large unsigned integer")]
#[test_case(json!(1.5), AttributeKind::Float ; "float")]
#[test_case(json!(30.0), AttributeKind::Float ; "integral float")]
#[test_case(json!("Ana"), AttributeKind::String ; "text")]
#[test_case(json!({"b": 1}), AttributeKind::String ; "nested map")]
#[test_case(json!(["x", "y"]), AttributeKind::String ; "sequence")]
#[test_case(Value::Null, AttributeKind::String ; "null falls back to string")]
fn test_infer_kind(value: Value, expected: AttributeKind) {
    assert_eq!(infer_kind(&value), expected);
}

#[test]
fn test_infer_schema_from_sample() {
    let sample = Record::from_value(
        "u1",
        json!({"name": "Ana", "age": 30, "score": 9.5, "active": true}),
    );

    let schema = infer_schema(&sample);

    assert_eq!(schema.len(), 4);
    assert_eq!(schema.kind_of("name"), Some(AttributeKind::String));
    assert_eq!(schema.kind_of("age"), Some(AttributeKind::Integer));
    assert_eq!(schema.kind_of("score"), Some(AttributeKind::Float));
    assert_eq!(schema.kind_of("active"), Some(AttributeKind::Boolean));
}

#[test]
fn test_infer_schema_empty_record() {
    let sample = Record::from_value("empty", json!({}));
    assert!(infer_schema(&sample).is_empty());
}

#[test]
fn test_string_attributes_carry_size() {
    let sample = Record::from_value("u1", json!({"name": "Ana", "age": 30}));
    let schema = infer_schema(&sample);

    for spec in schema.iter() {
        assert!(!spec.required);
        match spec.kind {
            AttributeKind::String => assert_eq!(spec.size, Some(STRING_ATTRIBUTE_SIZE)),
            _ => assert_eq!(spec.size, None),
        }
    }
}

#[test]
fn test_attribute_kind_display() {
    assert_eq!(AttributeKind::String.to_string(), "string");
    assert_eq!(AttributeKind::Integer.to_string(), "integer");
    assert_eq!(AttributeKind::Float.to_string(), "float");
    assert_eq!(AttributeKind::Boolean.to_string(), "boolean");
}
