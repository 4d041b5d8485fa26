//! Migration engine
//!
//! Drives a full run, one collection at a time:
//!
//! ```text
//! list collections
//!   └─ for each collection
//!        read all records ── empty? ── skip
//!        infer schema from the first record
//!        create collection, pause, create attributes, pause
//!        for each record: transform, assign a new id, write once
//! ```
//!
//! Collection and attribute creation failures are logged and do not stop
//! the run. A failed document write is logged with the source id and
//! only that document is lost. Listing failures on the source side are
//! returned to the caller.

mod types;

pub use types::{CollectionOutcome, CollectionReport, MigrationReport, ProvisioningDelays};

use crate::destination::DestinationWriter;
use crate::error::Result;
use crate::schema::{infer_schema, AttributeSchema};
use crate::source::SourceReader;
use crate::transform::{new_document_id, to_payload};
use crate::types::Record;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Migration engine over a source and a destination
pub struct MigrationEngine<S, D> {
    source: S,
    destination: D,
    delays: ProvisioningDelays,
}

impl<S: SourceReader, D: DestinationWriter> MigrationEngine<S, D> {
    /// Create an engine with the default provisioning delays
    pub fn new(source: S, destination: D) -> Self {
        Self {
            source,
            destination,
            delays: ProvisioningDelays::default(),
        }
    }

    /// Set provisioning delays
    #[must_use]
    pub fn with_delays(mut self, delays: ProvisioningDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Migrate every source collection, in source order
    pub async fn run(&self) -> Result<MigrationReport> {
        let start = Instant::now();
        let collections = self.source.list_collections().await?;
        let mut report = MigrationReport::new();

        for name in &collections {
            info!("Migrating collection: {}", name);
            report.push(self.migrate_collection(name).await?);
        }

        info!(
            "Migration finished: {} collections, {} documents migrated, {} failed, {} skipped ({} ms)",
            report.collections.len(),
            report.total_migrated(),
            report.total_failed(),
            report.skipped(),
            start.elapsed().as_millis()
        );
        Ok(report)
    }

    /// Migrate a single collection
    pub async fn migrate_collection(&self, name: &str) -> Result<CollectionReport> {
        let records = self.source.read_collection(name).await?;

        let Some(sample) = records.first() else {
            info!("Collection '{}' is empty, skipping.", name);
            return Ok(CollectionReport::skipped(name));
        };

        let schema = infer_schema(sample);
        let mut report = CollectionReport::migrated(name);
        report.failed_attributes = self.provision(name, &schema).await;

        for record in &records {
            match self.write_record(name, record).await {
                Ok(()) => report.migrated += 1,
                Err(e) => {
                    report.failed += 1;
                    error!("Failed to migrate document {}: {}", record.id, e);
                }
            }
        }

        info!("Migrated {} documents from '{}'.", report.migrated, name);
        Ok(report)
    }

    /// Create the collection and its attributes
    ///
    /// Returns the number of attributes that could not be created.
    async fn provision(&self, name: &str, schema: &AttributeSchema) -> usize {
        match self.destination.create_collection(name).await {
            Ok(()) => info!("Created collection: {}", name),
            Err(e) => warn!(
                "Collection '{}' may already exist or failed to create: {}",
                name, e
            ),
        }

        pause(self.delays.after_collection).await;

        let mut failed = 0;
        for spec in schema.iter() {
            match self
                .destination
                .create_attribute(name, &spec.key, spec.kind)
                .await
            {
                Ok(()) => info!("Created attribute: {} ({})", spec.key, spec.kind),
                Err(e) => {
                    failed += 1;
                    warn!("Failed to create attribute {}: {}", spec.key, e);
                }
            }
        }

        pause(self.delays.after_attributes).await;
        failed
    }

    async fn write_record(&self, collection: &str, record: &Record) -> Result<()> {
        let payload = to_payload(record)?;
        let id = new_document_id();
        debug!("Writing document {} as {}", record.id, id);
        self.destination
            .create_document(collection, &id, &payload)
            .await
    }
}

impl<S, D> std::fmt::Debug for MigrationEngine<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationEngine")
            .field("delays", &self.delays)
            .finish_non_exhaustive()
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
