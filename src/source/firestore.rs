//! Firestore REST source
//!
//! Reads collections through the Firestore v1 REST API:
//!
//! - `POST .../documents:listCollectionIds` for the collection list
//! - `GET .../documents/{collection}` for the documents of one collection
//!
//! Both endpoints are paginated with `pageSize` / `nextPageToken`.

use super::value::decode_fields;
use super::SourceReader;
use crate::auth::{AuthConfig, ServiceAccountKey};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{JsonValue, Record};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Public Firestore REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Database id used when a project has a single database
pub const DEFAULT_DATABASE_ID: &str = "(default)";

const DEFAULT_PAGE_SIZE: u32 = 300;

/// Firestore connection settings
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    /// REST base URL
    pub base_url: String,
    /// Google Cloud project id
    pub project_id: String,
    /// Database id
    pub database_id: String,
    /// Documents / collection ids per page
    pub page_size: u32,
}

impl FirestoreConfig {
    /// Settings for the default database of a project
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: project_id.into(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Path of the document root, relative to the base URL
    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.project_id, self.database_id
        )
    }
}

/// Response of `listCollectionIds`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCollectionIdsResponse {
    #[serde(default)]
    collection_ids: Vec<String>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// Response of `documents.list`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// A raw Firestore document
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    /// Full resource name, ending in the document id
    name: String,
    #[serde(default)]
    fields: Option<JsonValue>,
}

impl FirestoreDocument {
    fn into_record(self) -> Record {
        let id = document_id(&self.name).to_string();
        Record::new(id, decode_fields(self.fields.as_ref()))
    }
}

/// Last path segment of a document resource name
fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Treat a missing or empty page token as the last page
fn next_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

/// Firestore source reader
#[derive(Debug)]
pub struct FirestoreReader {
    config: FirestoreConfig,
    client: HttpClient,
}

impl FirestoreReader {
    /// Create a reader with explicit auth
    pub fn new(config: FirestoreConfig, auth: AuthConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(config.base_url.clone())
            .build();
        let client = HttpClient::with_auth(http_config, auth)?;
        Ok(Self { config, client })
    }

    /// Create a reader for the project of a service account key
    pub fn from_service_account(key: &ServiceAccountKey) -> Result<Self> {
        Self::new(
            FirestoreConfig::new(key.project_id.clone()),
            AuthConfig::service_account(key),
        )
    }

    /// Get the reader configuration
    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }
}

#[async_trait]
impl SourceReader for FirestoreReader {
    async fn list_collections(&self) -> Result<Vec<String>> {
        let url = format!("{}:listCollectionIds", self.config.documents_root());
        let mut collections = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut body = json!({ "pageSize": self.config.page_size });
            if let Some(token) = &page_token {
                body["pageToken"] = json!(token);
            }

            let page: ListCollectionIdsResponse = self
                .client
                .request_json(Method::POST, &url, RequestConfig::new().json(body))
                .await
                .map_err(|e| Error::source_api(format!("Failed to list collections: {e}")))?;

            collections.extend(page.collection_ids);

            page_token = next_token(page.next_page_token);
            if page_token.is_none() {
                break;
            }
        }

        debug!("Found {} source collections", collections.len());
        Ok(collections)
    }

    async fn read_collection(&self, collection: &str) -> Result<Vec<Record>> {
        let url = format!("{}/{}", self.config.documents_root(), collection);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut req = RequestConfig::new().query("pageSize", self.config.page_size.to_string());
            if let Some(token) = &page_token {
                req = req.query("pageToken", token);
            }

            let page: ListDocumentsResponse = self
                .client
                .request_json(Method::GET, &url, req)
                .await
                .map_err(|e| {
                    Error::source_api(format!("Failed to read collection '{collection}': {e}"))
                })?;

            records.extend(page.documents.into_iter().map(FirestoreDocument::into_record));

            page_token = next_token(page.next_page_token);
            if page_token.is_none() {
                break;
            }
        }

        debug!("Read {} documents from '{}'", records.len(), collection);
        Ok(records)
    }
}
