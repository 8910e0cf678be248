//! Pixel dimension resolution with per-run memoization
//!
//! Fetches image bytes and decodes only the header to obtain width and
//! height. Every failure class (transport, non-2xx, undecodable payload) is
//! absorbed into the unknown outcome, and when caching is enabled that
//! outcome is memoized so a failing URL is not retried within the run.
//!
//! Copyright (c) 2026 Remodel Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::io::Cursor;

use image::ImageReader;
use reqwest::blocking::Client;

use crate::config::TransformConfig;
use crate::error::{Error, Result};
use crate::http::{build_client, HttpConfig};

/// Resolved dimensions: each side is either a known pixel count or unknown
pub type Dimensions = (Option<u32>, Option<u32>);

/// Source of raw pixel dimensions for an image URL
///
/// The production implementation performs a blocking HTTP fetch; tests
/// substitute scripted sources through this seam.
pub trait DimensionSource {
    /// Fetch and decode the image at `url`, returning (width, height)
    fn probe(&self, url: &str) -> Result<(u32, u32)>;
}

/// HTTP-backed dimension source
///
/// Issues a single bounded-timeout GET with a browser-like User-Agent and
/// reads the image header from the response body.
pub struct HttpDimensionSource {
    client: Client,
}

impl HttpDimensionSource {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(http.image_timeout_secs, Some(&http.user_agent))?,
        })
    }
}

impl DimensionSource for HttpDimensionSource {
    fn probe(&self, url: &str) -> Result<(u32, u32)> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| Error::Http {
                message: format!("Request for '{}' failed: {}", url, e),
                status_code: None,
                source: Some(anyhow::anyhow!(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                message: format!("Request for '{}' returned {}", url, status),
                status_code: Some(status.as_u16()),
                source: None,
            });
        }

        let bytes = response.bytes().map_err(|e| Error::Http {
            message: format!("Failed to read body of '{}': {}", url, e),
            status_code: Some(status.as_u16()),
            source: Some(anyhow::anyhow!(e)),
        })?;

        let reader = ImageReader::new(Cursor::new(bytes.as_ref()))
            .with_guessed_format()
            .map_err(|e| Error::ImageDecode {
                url: url.to_string(),
                message: format!("Unrecognized image format: {}", e),
                source: Some(anyhow::anyhow!(e)),
            })?;

        reader.into_dimensions().map_err(|e| Error::ImageDecode {
            url: url.to_string(),
            message: e.to_string(),
            source: Some(anyhow::anyhow!(e)),
        })
    }
}

/// Memoizing dimension resolver
///
/// Owns the dimension cache for one transformer instance. Access is strictly
/// sequential, so no synchronization is needed.
pub struct DimensionResolver {
    source: Box<dyn DimensionSource>,
    cache: HashMap<String, Dimensions>,
    fetch_enabled: bool,
    cache_enabled: bool,
}

impl DimensionResolver {
    /// Build an HTTP-backed resolver from the transform configuration
    pub fn new(config: &TransformConfig) -> Result<Self> {
        Ok(Self::with_source(
            Box::new(HttpDimensionSource::new(&config.http)?),
            config.fetch_dimensions,
            config.cache_dimensions,
        ))
    }

    /// Build a resolver over an arbitrary source (used by tests)
    pub fn with_source(
        source: Box<dyn DimensionSource>,
        fetch_enabled: bool,
        cache_enabled: bool,
    ) -> Self {
        Self {
            source,
            cache: HashMap::new(),
            fetch_enabled,
            cache_enabled,
        }
    }

    /// Resolve dimensions for `url`
    ///
    /// With fetching disabled this returns unknown immediately and touches
    /// neither the network nor the cache. A cached tuple is returned verbatim,
    /// including a cached failure.
    pub fn resolve(&mut self, url: &str) -> Dimensions {
        if !self.fetch_enabled {
            return (None, None);
        }

        if self.cache_enabled {
            if let Some(cached) = self.cache.get(url) {
                tracing::debug!(url = %url, "dimension cache hit");
                return *cached;
            }
        }

        tracing::debug!(url = %url, "fetching image dimensions");
        let resolved = match self.source.probe(url) {
            Ok((width, height)) => {
                tracing::debug!(url = %url, width, height, "resolved image dimensions");
                (Some(width), Some(height))
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "could not fetch image dimensions");
                (None, None)
            }
        };

        if self.cache_enabled {
            self.cache.insert(url.to_string(), resolved);
        }

        resolved
    }
}
