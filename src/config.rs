//! Runtime configuration
//!
//! Every setting comes from the environment. A `.env` file in the working
//! directory is loaded first; variables already set in the process win.
//!
//! | Variable                 | Meaning                                 |
//! |--------------------------|-----------------------------------------|
//! | `SOURCE_CREDENTIAL_PATH` | Service account JSON file of the source |
//! | `DEST_ENDPOINT`          | Destination API endpoint URL            |
//! | `DEST_PROJECT_ID`        | Destination project id                  |
//! | `DEST_API_KEY`           | Destination server API key              |
//! | `DEST_DATABASE_ID`       | Destination database id                 |

use crate::destination::AppwriteConfig;
use crate::error::{Error, Result};
use std::path::PathBuf;
use url::Url;

pub const SOURCE_CREDENTIAL_PATH: &str = "SOURCE_CREDENTIAL_PATH";
pub const DEST_ENDPOINT: &str = "DEST_ENDPOINT";
pub const DEST_PROJECT_ID: &str = "DEST_PROJECT_ID";
pub const DEST_API_KEY: &str = "DEST_API_KEY";
pub const DEST_DATABASE_ID: &str = "DEST_DATABASE_ID";

/// Settings for one migration run
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// Path of the source service account file
    pub source_credential_path: PathBuf,
    /// Destination connection settings
    pub destination: AppwriteConfig,
}

impl MigrationConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::config(format!("Failed to load .env: {e}"))),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup
    ///
    /// Missing and empty values are both rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::missing_field(key))
        };

        let source_credential_path = PathBuf::from(require(SOURCE_CREDENTIAL_PATH)?);
        let endpoint = require(DEST_ENDPOINT)?;
        Url::parse(&endpoint)?;

        let destination = AppwriteConfig::new(
            endpoint,
            require(DEST_PROJECT_ID)?,
            require(DEST_API_KEY)?,
            require(DEST_DATABASE_ID)?,
        );

        Ok(Self {
            source_credential_path,
            destination,
        })
    }
}
