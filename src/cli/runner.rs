//! CLI runner - wires configuration, clients and the engine together

use crate::auth::ServiceAccountKey;
use crate::config::MigrationConfig;
use crate::destination::AppwriteWriter;
use crate::engine::{MigrationEngine, MigrationReport, ProvisioningDelays};
use crate::error::Result;
use crate::source::FirestoreReader;
use tracing::info;

/// CLI runner
#[derive(Debug, Default)]
pub struct Runner {
    delays: ProvisioningDelays,
}

impl Runner {
    /// Create a runner with the default provisioning delays
    pub fn new() -> Self {
        Self::default()
    }

    /// Set provisioning delays
    #[must_use]
    pub fn with_delays(mut self, delays: ProvisioningDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Load configuration from the environment and run the migration
    pub async fn run(&self) -> Result<()> {
        let config = MigrationConfig::from_env()?;
        self.run_with_config(&config).await?;
        Ok(())
    }

    /// Run the migration with an explicit configuration
    pub async fn run_with_config(&self, config: &MigrationConfig) -> Result<MigrationReport> {
        let key = ServiceAccountKey::from_file(&config.source_credential_path)?;
        info!(
            "Migrating project '{}' into database '{}'",
            key.project_id, config.destination.database_id
        );

        let source = FirestoreReader::from_service_account(&key)?;
        let destination = AppwriteWriter::new(config.destination.clone())?;

        MigrationEngine::new(source, destination)
            .with_delays(self.delays)
            .run()
            .await
    }
}
