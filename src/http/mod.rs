//! HTTP client module
//!
//! Thin wrapper over reqwest shared by the source and destination clients.
//!
//! # Features
//!
//! - **Base URL**: Relative paths are joined onto a configured base
//! - **Default Headers**: Sent with every request (e.g. project ids)
//! - **Authentication**: Integration with the auth module
//! - **Status Mapping**: Non-2xx responses become `Error::HttpStatus`
//!
//! Every request is sent exactly once. There is no retry or backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};

#[cfg(test)]
mod tests;
