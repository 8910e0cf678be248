//! Remodel Core - Recursive JSON re-modeling engine
//!
//! This crate rewrites arbitrary JSON documents according to two
//! domain-specific policies: string values classified as image URLs become
//! structured image descriptors enriched with pixel dimensions, and category
//! identifiers are remapped to the target identifier space through a
//! two-stage external lookup. Arrays under a `components` key additionally
//! receive a structural pass that lifts main-category banner items into a
//! single leading component.
//!
//! # Main Components
//!
//! - **Error Handling**: typed errors using `thiserror` and `anyhow`
//! - **ImageClassifier**: table-driven field-name and URL-shape heuristics
//! - **DimensionResolver**: memoized pixel-dimension fetching with fallback
//! - **CategoryIdRemapper**: memoized two-stage category id resolution
//! - **TreeTransformer**: the depth-first recursive rewrite
//!
//! # Example
//!
//! ```no_run
//! use remodel_core::{transform_str, Result, TransformConfig};
//!
//! fn example() -> Result<()> {
//!     let config = TransformConfig::default();
//!     let output = transform_str(r#"{"thumbnail": "https://cdn.example.com/a.png"}"#, &config)?;
//!     println!("{}", output);
//!     Ok(())
//! }
//! ```

pub mod category;
pub mod classifier;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod http;
pub mod image_model;
pub mod transform;

// Re-export main types for convenience
pub use category::{CategoryConfig, CategoryIdRemapper, CategoryLookup, HttpCategoryLookup};
pub use classifier::{ClassifierConfig, ImageClassifier};
pub use config::TransformConfig;
pub use dimensions::{DimensionResolver, DimensionSource, Dimensions, HttpDimensionSource};
pub use error::{Error, Result};
pub use http::HttpConfig;
pub use image_model::{ImageModel, ImageModelBuilder};
pub use transform::TreeTransformer;

use std::path::Path;

use serde_json::Value;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transform an in-memory JSON value
///
/// Builds a fresh transformer (and fresh caches) for the call; the input
/// value is never mutated.
pub fn transform_document(document: &Value, config: &TransformConfig) -> Result<Value> {
    let mut transformer = TreeTransformer::new(config)?;
    Ok(transformer.transform(document))
}

/// Parse and transform a JSON string
///
/// Malformed syntax is a fatal [`Error::Parse`].
pub fn transform_str(input: &str, config: &TransformConfig) -> Result<Value> {
    let document: Value = serde_json::from_str(input).map_err(|e| Error::Parse {
        message: e.to_string(),
        path: None,
        source: e,
    })?;
    transform_document(&document, config)
}

/// Read, parse, and transform a JSON document from disk
///
/// A missing file is a fatal [`Error::InputNotFound`]; malformed syntax is a
/// fatal [`Error::Parse`] carrying the path.
pub fn transform_file(path: &Path, config: &TransformConfig) -> Result<Value> {
    let document = load_document(path)?;
    transform_document(&document, config)
}

/// Read and parse a JSON document, classifying the fatal input errors
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| Error::Parse {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
        source: e,
    })
}
