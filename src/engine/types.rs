//! Engine types
//!
//! Provisioning delays and the report returned by a migration run.

use std::time::Duration;

/// Pauses inserted while provisioning a collection
///
/// The destination creates collections and attributes asynchronously;
/// documents written before the schema is live are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvisioningDelays {
    /// Pause after creating the collection, before creating attributes
    pub after_collection: Duration,
    /// Pause after creating attributes, before the first document write
    pub after_attributes: Duration,
}

impl Default for ProvisioningDelays {
    fn default() -> Self {
        Self {
            after_collection: Duration::from_secs(1),
            after_attributes: Duration::from_secs(2),
        }
    }
}

impl ProvisioningDelays {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            after_collection: Duration::ZERO,
            after_attributes: Duration::ZERO,
        }
    }
}

/// What happened to one collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// The source collection had no documents; nothing was sent
    Skipped,
    /// The collection was provisioned and its documents written
    Migrated,
}

/// Result of migrating one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    /// Collection name
    pub name: String,
    /// Outcome
    pub outcome: CollectionOutcome,
    /// Documents written successfully
    pub migrated: usize,
    /// Documents whose write failed
    pub failed: usize,
    /// Attributes that could not be created
    pub failed_attributes: usize,
}

impl CollectionReport {
    /// Report for an empty collection
    pub fn skipped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: CollectionOutcome::Skipped,
            migrated: 0,
            failed: 0,
            failed_attributes: 0,
        }
    }

    /// Empty report for a collection about to be migrated
    pub fn migrated(name: impl Into<String>) -> Self {
        Self {
            outcome: CollectionOutcome::Migrated,
            ..Self::skipped(name)
        }
    }

    /// Check if the collection was skipped
    pub fn is_skipped(&self) -> bool {
        self.outcome == CollectionOutcome::Skipped
    }
}

/// Result of a full migration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// One entry per source collection, in source order
    pub collections: Vec<CollectionReport>,
}

impl MigrationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a collection report
    pub fn push(&mut self, report: CollectionReport) {
        self.collections.push(report);
    }

    /// Total documents written
    pub fn total_migrated(&self) -> usize {
        self.collections.iter().map(|c| c.migrated).sum()
    }

    /// Total documents that failed to write
    pub fn total_failed(&self) -> usize {
        self.collections.iter().map(|c| c.failed).sum()
    }

    /// Number of collections skipped as empty
    pub fn skipped(&self) -> usize {
        self.collections.iter().filter(|c| c.is_skipped()).count()
    }

    /// Look up a collection report by name
    pub fn collection(&self, name: &str) -> Option<&CollectionReport> {
        self.collections.iter().find(|c| c.name == name)
    }
}
