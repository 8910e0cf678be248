//! Structured image descriptors
//!
//! An [`ImageModel`] replaces a raw image URL string in the document. Width
//! and height appear only when known, encoded as decimal strings to match the
//! surrounding documents' convention of stringified numeric fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::TransformConfig;
use crate::dimensions::DimensionResolver;
use crate::error::Result;

/// Structured replacement for a raw image URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageModel {
    /// The original image URL, always present
    pub image_url: String,
    /// Pixel width as decimal text, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Pixel height as decimal text, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl From<ImageModel> for Value {
    fn from(model: ImageModel) -> Self {
        let mut map = Map::new();
        map.insert("imageUrl".to_string(), Value::String(model.image_url));
        if let Some(width) = model.width {
            map.insert("width".to_string(), Value::String(width));
        }
        if let Some(height) = model.height {
            map.insert("height".to_string(), Value::String(height));
        }
        Value::Object(map)
    }
}

/// Builds image descriptors, delegating dimension lookups to the resolver
pub struct ImageModelBuilder {
    resolver: DimensionResolver,
}

impl ImageModelBuilder {
    /// Build an HTTP-backed builder from the transform configuration
    pub fn new(config: &TransformConfig) -> Result<Self> {
        Ok(Self::with_resolver(DimensionResolver::new(config)?))
    }

    /// Build over an existing resolver (used by tests)
    pub fn with_resolver(resolver: DimensionResolver) -> Self {
        Self { resolver }
    }

    /// Produce the descriptor for `url`, fresh per occurrence
    pub fn build(&mut self, url: &str) -> ImageModel {
        let (width, height) = self.resolver.resolve(url);
        ImageModel {
            image_url: url.to_string(),
            width: width.map(|w| w.to_string()),
            height: height.map(|h| h.to_string()),
        }
    }
}
