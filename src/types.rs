//! Common types used throughout the migration tool
//!
//! This module contains the record type shared by the source reader,
//! the transformer and the engine.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Records
// ============================================================================

/// A single source document
///
/// `id` is the source document id. It is only used for logging; the
/// destination document gets a freshly generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Source document id
    pub id: String,
    /// Field name to value
    pub fields: JsonObject,
}

impl Record {
    /// Create a record from an id and a field map
    pub fn new(id: impl Into<String>, fields: JsonObject) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Create a record from a JSON object literal
    ///
    /// Non-object values produce a record with no fields.
    pub fn from_value(id: impl Into<String>, value: JsonValue) -> Self {
        let fields = match value {
            JsonValue::Object(map) => map,
            _ => JsonObject::new(),
        };
        Self::new(id, fields)
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
