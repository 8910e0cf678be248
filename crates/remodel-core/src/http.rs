//! Shared HTTP plumbing for the lookup clients
//!
//! The transformation walk is strictly sequential, so all outbound calls go
//! through blocking clients with per-client timeouts. The image-fetch client
//! carries a browser-like User-Agent since some origins reject requests
//! without one.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::{Error, Result};

/// Default User-Agent sent with image fetches
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for the blocking HTTP clients
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// User-Agent header sent with image fetches
    pub user_agent: String,
    /// Timeout for image byte fetches, in seconds
    pub image_timeout_secs: u64,
    /// Timeout for directory/catalog lookups, in seconds
    pub lookup_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            image_timeout_secs: 5,
            lookup_timeout_secs: 10,
        }
    }
}

/// Build a blocking client with the given timeout and optional User-Agent
pub(crate) fn build_client(timeout_secs: u64, user_agent: Option<&str>) -> Result<Client> {
    let mut builder = Client::builder().timeout(Duration::from_secs(timeout_secs));

    if let Some(agent) = user_agent {
        let value = HeaderValue::from_str(agent).map_err(|e| Error::Configuration {
            message: format!("Invalid User-Agent header: {}", e),
            source: Some(anyhow::anyhow!(e)),
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, value);
        builder = builder.default_headers(headers);
    }

    builder.build().map_err(|e| Error::Http {
        message: format!("Failed to create HTTP client: {}", e),
        status_code: None,
        source: Some(anyhow::anyhow!(e)),
    })
}
