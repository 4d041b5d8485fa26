//! Source readers
//!
//! A source lists its collections and returns every document of a
//! collection as a [`Record`]. The engine only talks to the
//! [`SourceReader`] trait.

pub mod firestore;
mod value;

pub use firestore::{FirestoreConfig, FirestoreReader};
pub use value::{decode_fields, decode_value};

use crate::error::Result;
use crate::types::Record;
use async_trait::async_trait;

/// Trait for source databases
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// List all top-level collection names, in source order
    async fn list_collections(&self) -> Result<Vec<String>>;

    /// Read every document of a collection
    ///
    /// All pages are drained before returning.
    async fn read_collection(&self, collection: &str) -> Result<Vec<Record>>;
}
