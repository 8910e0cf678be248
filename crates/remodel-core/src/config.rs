//! Configuration surface for the transformation engine
//!
//! One transformer instance is configured once up front; all sub-configs
//! default to the reference constants so `TransformConfig::default()` is a
//! fully working setup.

use crate::category::CategoryConfig;
use crate::classifier::ClassifierConfig;
use crate::http::HttpConfig;

/// Configuration for a [`TreeTransformer`](crate::TreeTransformer) instance
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Fetch pixel dimensions for classified image URLs
    pub fetch_dimensions: bool,
    /// Memoize dimension fetch outcomes (including failures) per URL
    pub cache_dimensions: bool,
    /// Remap category identifiers through the two-stage lookup
    pub convert_category_ids: bool,
    /// Image classification tables
    pub classifier: ClassifierConfig,
    /// Category lookup endpoints, credentials, and placeholder id
    pub category: CategoryConfig,
    /// HTTP client settings shared by both lookup subsystems
    pub http: HttpConfig,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            fetch_dimensions: true,
            cache_dimensions: true,
            convert_category_ids: true,
            classifier: ClassifierConfig::default(),
            category: CategoryConfig::default(),
            http: HttpConfig::default(),
        }
    }
}
