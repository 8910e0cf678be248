//! Category identifier remapping through a two-stage external lookup
//!
//! Stage 1 resolves a source-side category id to its human-readable name via
//! the directory service; stage 2 resolves that name to the target-side id
//! via the catalog service. A stage-1 miss keeps the original id, a stage-2
//! miss yields the fixed placeholder id, and every outcome is memoized per
//! source id for the lifetime of the transformer instance.
//!
//! Copyright (c) 2026 Remodel Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;

use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::config::TransformConfig;
use crate::error::{Error, Result};
use crate::http::{build_client, HttpConfig};

/// Fallback target id used when a name is known but has no catalog entry
pub const DEFAULT_PLACEHOLDER_ID: &str = "1139";

/// Endpoints and credentials for the two lookup services
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    /// Directory service endpoint (name lookup by id)
    pub directory_endpoint: String,
    /// Catalog service endpoint (id lookup by name)
    pub catalog_endpoint: String,
    /// Directory service consumer key, sent as a query parameter
    pub consumer_key: String,
    /// Directory service consumer secret, sent as a query parameter
    pub consumer_secret: String,
    /// Target id substituted on a stage-2 miss
    pub placeholder_id: String,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            directory_endpoint: "https://www.mataaa.com/wp-json/wc/v2/products/categories"
                .to_string(),
            catalog_endpoint:
                "https://staging.mataaa.com/gateway/CatalogManagement/api/v1/Category/Filter"
                    .to_string(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            placeholder_id: DEFAULT_PLACEHOLDER_ID.to_string(),
        }
    }
}

/// The two chained lookups behind category remapping
///
/// Both methods report "not found" as `Ok(None)`; transport and decode
/// problems surface as errors, which the remapper treats identically.
pub trait CategoryLookup {
    /// Resolve a source category id to its human-readable name
    fn category_name(&self, id: &str) -> Result<Option<String>>;

    /// Resolve a category name to the target-side identifier
    fn catalog_id(&self, name: &str) -> Result<Option<String>>;
}

/// HTTP-backed lookup against the directory and catalog services
pub struct HttpCategoryLookup {
    client: Client,
    directory_endpoint: Url,
    catalog_endpoint: Url,
    consumer_key: String,
    consumer_secret: String,
}

impl HttpCategoryLookup {
    pub fn new(category: &CategoryConfig, http: &HttpConfig) -> Result<Self> {
        let directory_endpoint =
            Url::parse(&category.directory_endpoint).map_err(|e| Error::Configuration {
                message: format!(
                    "Invalid directory endpoint '{}': {}",
                    category.directory_endpoint, e
                ),
                source: Some(anyhow::anyhow!(e)),
            })?;
        let catalog_endpoint =
            Url::parse(&category.catalog_endpoint).map_err(|e| Error::Configuration {
                message: format!(
                    "Invalid catalog endpoint '{}': {}",
                    category.catalog_endpoint, e
                ),
                source: Some(anyhow::anyhow!(e)),
            })?;

        Ok(Self {
            client: build_client(http.lookup_timeout_secs, None)?,
            directory_endpoint,
            catalog_endpoint,
            consumer_key: category.consumer_key.clone(),
            consumer_secret: category.consumer_secret.clone(),
        })
    }

    fn get_json(&self, url: Url, query: &[(&str, &str)]) -> Result<Option<Value>> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| Error::Http {
                message: format!("Lookup request failed: {}", e),
                status_code: None,
                source: Some(anyhow::anyhow!(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "lookup service returned non-success status");
            return Ok(None);
        }

        let body = response.json::<Value>().map_err(|e| Error::Http {
            message: format!("Failed to parse lookup response as JSON: {}", e),
            status_code: Some(status.as_u16()),
            source: Some(anyhow::anyhow!(e)),
        })?;
        Ok(Some(body))
    }
}

impl CategoryLookup for HttpCategoryLookup {
    fn category_name(&self, id: &str) -> Result<Option<String>> {
        let query = [
            ("include", id),
            ("consumer_key", self.consumer_key.as_str()),
            ("consumer_secret", self.consumer_secret.as_str()),
        ];
        let Some(body) = self.get_json(self.directory_endpoint.clone(), &query)? else {
            return Ok(None);
        };

        // 200 with an empty array means the id has no directory record. A
        // record without a name resolves to the empty string.
        match body.as_array().and_then(|records| records.first()) {
            Some(record) => {
                let name = record
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Ok(Some(name.to_string()))
            }
            None => Ok(None),
        }
    }

    fn catalog_id(&self, name: &str) -> Result<Option<String>> {
        let Some(body) = self.get_json(self.catalog_endpoint.clone(), &[("Name", name)])? else {
            return Ok(None);
        };

        if body.get("status").and_then(Value::as_str) != Some("success") {
            return Ok(None);
        }

        let entry = body
            .get("data")
            .and_then(Value::as_array)
            .and_then(|data| data.first());
        Ok(entry
            .and_then(|entry| entry.get("mattaId"))
            .and_then(target_id))
    }
}

/// Extract a usable target id; zero and empty values count as "not found"
fn target_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Memoizing two-stage category id remapper
pub struct CategoryIdRemapper {
    lookup: Box<dyn CategoryLookup>,
    cache: HashMap<String, String>,
    enabled: bool,
    placeholder_id: String,
}

impl CategoryIdRemapper {
    /// Build an HTTP-backed remapper from the transform configuration
    pub fn new(config: &TransformConfig) -> Result<Self> {
        Ok(Self::with_lookup(
            Box::new(HttpCategoryLookup::new(&config.category, &config.http)?),
            config.convert_category_ids,
            config.category.placeholder_id.clone(),
        ))
    }

    /// Build a remapper over an arbitrary lookup (used by tests)
    pub fn with_lookup(
        lookup: Box<dyn CategoryLookup>,
        enabled: bool,
        placeholder_id: String,
    ) -> Self {
        Self {
            lookup,
            cache: HashMap::new(),
            enabled,
            placeholder_id,
        }
    }

    /// Remap `source_id` to the target identifier space
    ///
    /// Runs the full lookup chain at most once per distinct id per run;
    /// repeated occurrences return the memoized result.
    pub fn remap(&mut self, source_id: &str) -> String {
        if !self.enabled {
            return source_id.to_string();
        }

        if let Some(cached) = self.cache.get(source_id) {
            return cached.clone();
        }

        let name = match self.lookup.category_name(source_id) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(id = %source_id, error = %e, "directory lookup failed");
                None
            }
        };

        let resolved = match name {
            None => {
                tracing::debug!(id = %source_id, "category not in directory, keeping id");
                source_id.to_string()
            }
            Some(name) => {
                let catalog = match self.lookup.catalog_id(&name) {
                    Ok(catalog) => catalog,
                    Err(e) => {
                        tracing::warn!(name = %name, error = %e, "catalog lookup failed");
                        None
                    }
                };
                match catalog {
                    Some(id) => id,
                    None => {
                        tracing::debug!(name = %name, "no catalog entry, using placeholder");
                        self.placeholder_id.clone()
                    }
                }
            }
        };

        self.cache.insert(source_id.to_string(), resolved.clone());
        resolved
    }

    /// Number of distinct ids resolved this run
    pub fn conversions(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap as StdHashMap;
    use std::rc::Rc;

    struct ScriptedLookup {
        names: StdHashMap<String, String>,
        catalog: StdHashMap<String, String>,
        name_calls: Rc<Cell<usize>>,
        fail_directory: bool,
    }

    impl ScriptedLookup {
        fn new(names: &[(&str, &str)], catalog: &[(&str, &str)]) -> Self {
            Self {
                names: names
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                catalog: catalog
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                name_calls: Rc::new(Cell::new(0)),
                fail_directory: false,
            }
        }
    }

    impl CategoryLookup for ScriptedLookup {
        fn category_name(&self, id: &str) -> Result<Option<String>> {
            self.name_calls.set(self.name_calls.get() + 1);
            if self.fail_directory {
                return Err(Error::Http {
                    message: "connection refused".to_string(),
                    status_code: None,
                    source: None,
                });
            }
            Ok(self.names.get(id).cloned())
        }

        fn catalog_id(&self, name: &str) -> Result<Option<String>> {
            Ok(self.catalog.get(name).cloned())
        }
    }

    fn remapper(lookup: ScriptedLookup) -> CategoryIdRemapper {
        CategoryIdRemapper::with_lookup(
            Box::new(lookup),
            true,
            DEFAULT_PLACEHOLDER_ID.to_string(),
        )
    }

    #[test]
    fn test_full_chain_success() {
        let mut remapper = remapper(ScriptedLookup::new(
            &[("42", "Shoes")],
            &[("Shoes", "777")],
        ));
        assert_eq!(remapper.remap("42"), "777");
        assert_eq!(remapper.conversions(), 1);
    }

    #[test]
    fn test_stage_one_miss_keeps_source_id() {
        let mut remapper = remapper(ScriptedLookup::new(&[], &[("Shoes", "777")]));
        assert_eq!(remapper.remap("42"), "42");
    }

    #[test]
    fn test_stage_two_miss_uses_placeholder() {
        let mut remapper = remapper(ScriptedLookup::new(&[("42", "Shoes")], &[]));
        assert_eq!(remapper.remap("42"), DEFAULT_PLACEHOLDER_ID);
    }

    #[test]
    fn test_directory_error_treated_as_miss() {
        let mut lookup = ScriptedLookup::new(&[("42", "Shoes")], &[("Shoes", "777")]);
        lookup.fail_directory = true;
        let mut remapper = remapper(lookup);
        assert_eq!(remapper.remap("42"), "42");
    }

    #[test]
    fn test_chain_runs_once_per_id() {
        let lookup = ScriptedLookup::new(&[("42", "Shoes")], &[("Shoes", "777")]);
        let calls = lookup.name_calls.clone();
        let mut remapper = remapper(lookup);
        assert_eq!(remapper.remap("42"), "777");
        assert_eq!(remapper.remap("42"), "777");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_misses_are_cached_too() {
        let lookup = ScriptedLookup::new(&[], &[]);
        let calls = lookup.name_calls.clone();
        let mut remapper = remapper(lookup);
        remapper.remap("42");
        remapper.remap("42");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_disabled_passes_through_without_caching() {
        let lookup = ScriptedLookup::new(&[("42", "Shoes")], &[("Shoes", "777")]);
        let calls = lookup.name_calls.clone();
        let mut remapper =
            CategoryIdRemapper::with_lookup(Box::new(lookup), false, "1139".to_string());
        assert_eq!(remapper.remap("42"), "42");
        assert_eq!(calls.get(), 0);
        assert_eq!(remapper.conversions(), 0);
    }

    #[test]
    fn test_target_id_truthiness() {
        use serde_json::json;
        assert_eq!(target_id(&json!(777)), Some("777".to_string()));
        assert_eq!(target_id(&json!("777")), Some("777".to_string()));
        assert_eq!(target_id(&json!(0)), None);
        assert_eq!(target_id(&json!(0.0)), None);
        assert_eq!(target_id(&json!("")), None);
        assert_eq!(target_id(&json!(null)), None);
    }
}
