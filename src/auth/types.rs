//! Auth configuration types

use crate::error::{Error, Result, ResultExt};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// OAuth scope granting read/write access to Firestore
pub const DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";

/// Default Google token endpoint, used when the key file omits `token_uri`
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Authentication configuration
#[derive(Debug, Clone)]
pub enum AuthConfig {
    /// API key sent in a header
    ApiKey {
        /// Header name (e.g. "X-Appwrite-Key")
        header_name: String,
        /// The API key value
        value: String,
    },

    /// Service account: RS256 JWT exchanged at the token endpoint
    ServiceAccount {
        /// Service account email (iss claim)
        client_email: String,
        /// Private key (PEM format)
        private_key: String,
        /// Token endpoint (aud claim and exchange URL)
        token_uri: String,
        /// Requested scopes
        scopes: Vec<String>,
        /// JWT lifetime in seconds
        token_lifetime_seconds: u64,
    },
}

impl AuthConfig {
    /// Service account auth for the given key, scoped to Firestore
    pub fn service_account(key: &ServiceAccountKey) -> Self {
        AuthConfig::ServiceAccount {
            client_email: key.client_email.clone(),
            private_key: key.private_key.clone(),
            token_uri: key.token_uri.clone(),
            scopes: vec![DATASTORE_SCOPE.to_string()],
            token_lifetime_seconds: 3600,
        }
    }
}

/// Service account key file, as downloaded from the cloud console
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Project the service account belongs to
    pub project_id: String,
    /// Service account email
    pub client_email: String,
    /// PEM-encoded private key
    pub private_key: String,
    /// OAuth token endpoint
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Load a key from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credential file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse a key from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        let key: Self = serde_json::from_str(content)?;
        if key.project_id.is_empty() {
            return Err(Error::auth("Credential file has an empty project_id"));
        }
        Ok(key)
    }
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

/// Cached token with expiration
#[derive(Debug, Clone)]
pub struct CachedToken {
    /// The access token
    pub token: String,
    /// When the token expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl CachedToken {
    /// Create a new cached token
    pub fn new(token: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { token, expires_at }
    }

    /// Create a token that expires in N seconds from now
    pub fn expires_in(token: String, seconds: i64) -> Self {
        let expires_at = Utc::now() + chrono::Duration::seconds(seconds);
        Self {
            token,
            expires_at: Some(expires_at),
        }
    }

    /// Check if the token is expired (with 30 second buffer)
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let buffer = chrono::Duration::seconds(30);
                Utc::now() + buffer >= expires_at
            }
            None => false,
        }
    }
}
