//! Document transformation
//!
//! Turns a source record into a destination payload. Nested maps and
//! sequences have no destination attribute type, so they are stored as
//! JSON text; every other value passes through untouched.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// Build the destination payload for a record
pub fn to_payload(record: &Record) -> Result<JsonObject> {
    let mut payload = JsonObject::new();
    for (key, value) in &record.fields {
        let converted = match value {
            JsonValue::Object(_) | JsonValue::Array(_) => JsonValue::String(to_json_text(value)?),
            other => other.clone(),
        };
        payload.insert(key.clone(), converted);
    }
    Ok(payload)
}

/// Encode a value as JSON text with `", "` and `": "` separators,
/// e.g. `{"b": 1}` and `["x", "y"]`
pub fn to_json_text(value: &JsonValue) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::Other(format!("JSON text is not UTF-8: {e}")))
}

/// Generate a random destination document id
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Compact formatter with a space after every separator
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
