//! Authenticator implementation
//!
//! Handles applying authentication to requests and managing token refresh.

use super::types::{AuthConfig, CachedToken};
use crate::error::{Error, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Grant type for exchanging a signed JWT for an access token
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Authenticator handles applying authentication to HTTP requests
pub struct Authenticator {
    /// Auth configuration
    config: AuthConfig,
    /// Cached token for service account auth
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    /// HTTP client for token requests
    http_client: Client,
}

impl Authenticator {
    /// Create an authenticator that exchanges tokens over `http_client`
    pub fn with_client(config: AuthConfig, http_client: Client) -> Self {
        Self {
            config,
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::ApiKey { header_name, value } => Ok(req.header(header_name, value)),

            AuthConfig::ServiceAccount { .. } => {
                let token = self.get_or_refresh_token().await?;
                Ok(req.bearer_auth(token))
            }
        }
    }

    /// Get a valid token, refreshing if necessary
    async fn get_or_refresh_token(&self) -> Result<String> {
        {
            let cached = self.cached_token.read().await;
            if let Some(token) = cached.as_ref() {
                if !token.is_expired() {
                    return Ok(token.token.clone());
                }
            }
        }

        let mut cached = self.cached_token.write().await;

        // Another task may have refreshed while we waited for the write lock
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_new_token().await?;
        let token_str = new_token.token.clone();
        *cached = Some(new_token);

        Ok(token_str)
    }

    /// Fetch a new token based on auth type
    async fn fetch_new_token(&self) -> Result<CachedToken> {
        match &self.config {
            AuthConfig::ServiceAccount {
                client_email,
                private_key,
                token_uri,
                scopes,
                token_lifetime_seconds,
            } => {
                let assertion =
                    sign_jwt(client_email, private_key, token_uri, scopes, *token_lifetime_seconds)?;
                self.exchange_jwt(token_uri, &assertion).await
            }
            AuthConfig::ApiKey { .. } => Err(Error::auth(
                "Token refresh not supported for API key auth",
            )),
        }
    }

    /// Exchange a signed JWT for an access token
    async fn exchange_jwt(&self, token_uri: &str, assertion: &str) -> Result<CachedToken> {
        debug!("Exchanging service account JWT at {}", token_uri);

        let form = [("grant_type", JWT_BEARER_GRANT), ("assertion", assertion)];

        let response = self
            .http_client
            .post(token_uri)
            .form(&form)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Auth {
                message: format!("JWT token exchange failed with status {status}: {body}"),
            });
        }

        let token_response: TokenResponse = response.json().await.map_err(Error::Http)?;
        Ok(token_response.into_cached_token())
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.config {
            AuthConfig::ApiKey { .. } => "api_key",
            AuthConfig::ServiceAccount { .. } => "service_account",
        };
        f.debug_struct("Authenticator").field("kind", &kind).finish()
    }
}

/// Sign a service account JWT (RS256)
pub(crate) fn sign_jwt(
    client_email: &str,
    private_key: &str,
    token_uri: &str,
    scopes: &[String],
    lifetime_seconds: u64,
) -> Result<String> {
    let now = Utc::now().timestamp();
    #[allow(clippy::cast_possible_wrap)]
    let exp = now + lifetime_seconds as i64;

    let claims = JwtClaims {
        iss: client_email.to_string(),
        scope: scopes.join(" "),
        aud: token_uri.to_string(),
        iat: now,
        exp,
    };

    let encoding_key =
        EncodingKey::from_rsa_pem(private_key.as_bytes()).map_err(|e| Error::JwtGeneration {
            message: format!("Invalid private key: {e}"),
        })?;

    encode(&Header::new(Algorithm::RS256), &claims, &encoding_key).map_err(|e| {
        Error::JwtGeneration {
            message: format!("Failed to encode JWT: {e}"),
        }
    })
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl TokenResponse {
    fn into_cached_token(self) -> CachedToken {
        match self.expires_in {
            Some(secs) => CachedToken::expires_in(self.access_token, secs),
            None => CachedToken::new(self.access_token, None),
        }
    }
}

/// JWT claims for the service account grant
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JwtClaims {
    pub(crate) iss: String,
    pub(crate) scope: String,
    pub(crate) aud: String,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}
