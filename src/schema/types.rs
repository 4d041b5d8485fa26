//! Schema types

use serde::{Deserialize, Serialize};

/// Maximum size of every provisioned string attribute
pub const STRING_ATTRIBUTE_SIZE: u32 = 1000;

/// Destination attribute kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    String,
    Integer,
    Float,
    Boolean,
}

impl AttributeKind {
    /// Name used in the destination API path (`attributes/{name}`)
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Integer => "integer",
            AttributeKind::Float => "float",
            AttributeKind::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attribute to provision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Attribute key (source field name)
    pub key: String,
    /// Attribute kind
    pub kind: AttributeKind,
    /// Maximum size, strings only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Always false for inferred attributes
    pub required: bool,
}

impl AttributeSpec {
    /// Build the spec for an inferred field
    pub fn inferred(key: impl Into<String>, kind: AttributeKind) -> Self {
        let size = match kind {
            AttributeKind::String => Some(STRING_ATTRIBUTE_SIZE),
            _ => None,
        };
        Self {
            key: key.into(),
            kind,
            size,
            required: false,
        }
    }
}

/// Inferred schema of a collection, in sample field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    /// Attributes
    pub attributes: Vec<AttributeSpec>,
}

impl AttributeSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute
    pub fn push(&mut self, spec: AttributeSpec) {
        self.attributes.push(spec);
    }

    /// Look up the kind of a field
    pub fn kind_of(&self, key: &str) -> Option<AttributeKind> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.kind)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the schema has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate over attributes
    pub fn iter(&self) -> impl Iterator<Item = &AttributeSpec> {
        self.attributes.iter()
    }
}
