//! Authentication module
//!
//! Supports: API key headers and Google service account credentials
//! (signed JWT exchanged for an access token).
//!
//! The `Authenticator` applies auth to requests and caches exchanged
//! tokens until shortly before they expire.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken, ServiceAccountKey, DATASTORE_SCOPE};
