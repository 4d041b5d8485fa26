//! Schema inference module
//!
//! Derives a destination attribute schema from one sample record.
//!
//! # Rules
//!
//! Evaluated in order, first match wins:
//!
//! | Value              | Attribute kind |
//! |--------------------|----------------|
//! | boolean            | `boolean`      |
//! | integer number     | `integer`      |
//! | other number       | `float`        |
//! | text               | `string`       |
//! | map or sequence    | `string` (stored as JSON text) |
//! | null               | `string`       |
//!
//! Only the first record of a collection is sampled. Fields that first
//! appear in later records are never provisioned.

mod inference;
mod types;

pub use inference::{infer_kind, infer_schema};
pub use types::{AttributeKind, AttributeSchema, AttributeSpec, STRING_ATTRIBUTE_SIZE};

#[cfg(test)]
mod tests;
