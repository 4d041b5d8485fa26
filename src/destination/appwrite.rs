//! Appwrite REST destination
//!
//! Talks to the Databases service of the Appwrite REST API. Requests are
//! scoped to one database and authenticated with a server API key.

use super::DestinationWriter;
use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::schema::{AttributeKind, AttributeSpec};
use crate::types::JsonObject;
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Header carrying the project id
pub const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Header carrying the API key
pub const KEY_HEADER: &str = "X-Appwrite-Key";

/// Appwrite connection settings
#[derive(Clone)]
pub struct AppwriteConfig {
    /// API endpoint, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: String,
    /// Project id
    pub project_id: String,
    /// Server API key
    pub api_key: String,
    /// Target database id
    pub database_id: String,
}

impl AppwriteConfig {
    /// Create settings for one database
    pub fn new(
        endpoint: impl Into<String>,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            database_id: database_id.into(),
        }
    }

    fn collections_path(&self) -> String {
        format!("databases/{}/collections", self.database_id)
    }
}

impl std::fmt::Debug for AppwriteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppwriteConfig")
            .field("endpoint", &self.endpoint)
            .field("project_id", &self.project_id)
            .field("api_key", &"[REDACTED]")
            .field("database_id", &self.database_id)
            .finish()
    }
}

/// Error body returned by Appwrite
#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    message: String,
}

/// Turn a failed request into a destination error
///
/// Appwrite error bodies contribute their `message`; anything else is
/// passed through as-is.
fn map_error(err: Error) -> Error {
    match err {
        Error::HttpStatus { status, body } => {
            let message = serde_json::from_str::<AppwriteErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            Error::destination(status, message)
        }
        other => other,
    }
}

/// Request body for an attribute of the given spec
fn attribute_body(spec: &AttributeSpec) -> serde_json::Value {
    let mut body = json!({
        "key": spec.key,
        "required": spec.required,
    });
    if let Some(size) = spec.size {
        body["size"] = json!(size);
    }
    body
}

/// Appwrite destination writer
#[derive(Debug)]
pub struct AppwriteWriter {
    config: AppwriteConfig,
    client: HttpClient,
}

impl AppwriteWriter {
    /// Create a writer for the configured database
    pub fn new(config: AppwriteConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(config.endpoint.clone())
            .header(PROJECT_HEADER, config.project_id.clone())
            .build();
        let auth = AuthConfig::ApiKey {
            header_name: KEY_HEADER.to_string(),
            value: config.api_key.clone(),
        };
        let client = HttpClient::with_auth(http_config, auth)?;
        Ok(Self { config, client })
    }

    /// Get the writer configuration
    pub fn config(&self) -> &AppwriteConfig {
        &self.config
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<()> {
        self.client
            .request(Method::POST, path, RequestConfig::new().json(body))
            .await
            .map_err(map_error)?;
        Ok(())
    }
}

#[async_trait]
impl DestinationWriter for AppwriteWriter {
    async fn create_collection(&self, name: &str) -> Result<()> {
        let body = json!({
            "collectionId": name,
            "name": name,
            "permissions": [],
        });
        self.post(&self.config.collections_path(), body).await?;
        debug!("Created collection '{}'", name);
        Ok(())
    }

    async fn create_attribute(
        &self,
        collection: &str,
        key: &str,
        kind: AttributeKind,
    ) -> Result<()> {
        let spec = AttributeSpec::inferred(key, kind);
        let path = format!(
            "{}/{}/attributes/{}",
            self.config.collections_path(),
            collection,
            kind.as_str()
        );
        self.post(&path, attribute_body(&spec)).await
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        payload: &JsonObject,
    ) -> Result<()> {
        let body = json!({
            "documentId": id,
            "data": payload,
        });
        let path = format!(
            "{}/{}/documents",
            self.config.collections_path(),
            collection
        );
        self.post(&path, body).await
    }
}
