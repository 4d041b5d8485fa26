//! Destination writers
//!
//! A destination accepts collection, attribute and document creation
//! requests. Every call is attempted once; the engine decides what to do
//! with a failure.

pub mod appwrite;

pub use appwrite::{AppwriteConfig, AppwriteWriter};

use crate::error::Result;
use crate::schema::AttributeKind;
use crate::types::JsonObject;
use async_trait::async_trait;

/// Trait for destination databases
#[async_trait]
pub trait DestinationWriter: Send + Sync {
    /// Create a collection whose id and display name are both `name`,
    /// with no permissions
    async fn create_collection(&self, name: &str) -> Result<()>;

    /// Create an optional attribute on a collection
    ///
    /// String attributes are created with a maximum size of
    /// [`crate::schema::STRING_ATTRIBUTE_SIZE`].
    async fn create_attribute(&self, collection: &str, key: &str, kind: AttributeKind)
        -> Result<()>;

    /// Create one document with an explicit id
    async fn create_document(&self, collection: &str, id: &str, payload: &JsonObject)
        -> Result<()>;
}
