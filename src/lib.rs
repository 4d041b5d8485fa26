// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # firestore-to-appwrite
//!
//! One-shot migration of a Firestore database into an Appwrite database.
//!
//! Every source collection is read in full. The destination collection and
//! its attributes are created from the first document, then every document
//! is written under a fresh UUID. Nested maps and lists are stored as JSON
//! text.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use firestore_to_appwrite::{
//!     AppwriteConfig, AppwriteWriter, FirestoreReader, MigrationEngine, ServiceAccountKey,
//! };
//!
//! #[tokio::main]
//! async fn main() -> firestore_to_appwrite::Result<()> {
//!     let key = ServiceAccountKey::from_file("service-account.json")?;
//!     let source = FirestoreReader::from_service_account(&key)?;
//!     let destination = AppwriteWriter::new(AppwriteConfig::new(
//!         "https://cloud.appwrite.io/v1",
//!         "my-project",
//!         "my-api-key",
//!         "my-database",
//!     ))?;
//!
//!     let report = MigrationEngine::new(source, destination).run().await?;
//!     println!("{} documents migrated", report.total_migrated());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MigrationEngine                      │
//! │  list → read → infer schema → provision → write (once)   │
//! └───────────────┬──────────────────────────┬───────────────┘
//!                 │                          │
//!          SourceReader               DestinationWriter
//!                 │                          │
//! ┌───────────────┴────────┐   ┌─────────────┴──────────────┐
//! │ FirestoreReader        │   │ AppwriteWriter             │
//! │ typed value decoding   │   │ collections / attributes   │
//! │ page token draining    │   │ documents                  │
//! └───────────────┬────────┘   └─────────────┬──────────────┘
//!                 └──────── HttpClient ──────┘
//!                      service account JWT / API key
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client
pub mod http;

/// Schema inference from a sample record
pub mod schema;

/// Record to destination payload conversion
pub mod transform;

/// Source readers
pub mod source;

/// Destination writers
pub mod destination;

/// Migration engine
pub mod engine;

/// Environment configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use auth::ServiceAccountKey;
pub use config::MigrationConfig;
pub use destination::{AppwriteConfig, AppwriteWriter, DestinationWriter};
pub use engine::{
    CollectionOutcome, CollectionReport, MigrationEngine, MigrationReport, ProvisioningDelays,
};
pub use schema::{infer_kind, infer_schema, AttributeKind, AttributeSchema};
pub use source::{FirestoreConfig, FirestoreReader, SourceReader};
pub use transform::{new_document_id, to_payload};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
