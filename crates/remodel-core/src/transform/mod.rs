//! Generic recursive rewrite of JSON documents
//!
//! [`TreeTransformer`] walks a document depth-first and dispatches each
//! key/value pair to the category remapper, the image model builder, or
//! recursion. Arrays found under a `components` key additionally go through
//! the banner regrouping pass after their elements are transformed. The
//! input value is never mutated; the walk builds a fresh tree.
//!
//! Copyright (c) 2026 Remodel Team
//! Licensed under the Apache-2.0 license

pub mod regroup;

use serde_json::{Map, Value};

use crate::category::CategoryIdRemapper;
use crate::classifier::ImageClassifier;
use crate::config::TransformConfig;
use crate::error::Result;
use crate::image_model::ImageModelBuilder;

/// Key whose array values receive the banner regrouping pass
const COMPONENTS_KEY: &str = "components";

/// Recursive document rewriter
///
/// Owns one instance of each analytic component; the dimension and category
/// caches live exactly as long as the transformer.
pub struct TreeTransformer {
    classifier: ImageClassifier,
    images: ImageModelBuilder,
    categories: CategoryIdRemapper,
}

impl TreeTransformer {
    /// Build a transformer with HTTP-backed lookups from the configuration
    pub fn new(config: &TransformConfig) -> Result<Self> {
        Ok(Self::with_components(
            ImageClassifier::new(&config.classifier),
            ImageModelBuilder::new(config)?,
            CategoryIdRemapper::new(config)?,
        ))
    }

    /// Assemble a transformer from prebuilt components (used by tests)
    pub fn with_components(
        classifier: ImageClassifier,
        images: ImageModelBuilder,
        categories: CategoryIdRemapper,
    ) -> Self {
        Self {
            classifier,
            images,
            categories,
        }
    }

    /// Rewrite `value` into a new tree
    pub fn transform(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut transformed = Map::with_capacity(map.len());
                for (key, entry) in map {
                    let rewritten = match entry {
                        Value::Array(items) if key == COMPONENTS_KEY => {
                            let items = items.iter().map(|item| self.transform(item)).collect();
                            Value::Array(regroup::regroup_components(items))
                        }
                        _ => self.transform_entry(key, entry),
                    };
                    transformed.insert(key.clone(), rewritten);
                }
                Value::Object(transformed)
            }
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.transform(item)).collect())
            }
            scalar => scalar.clone(),
        }
    }

    /// Number of distinct category ids resolved so far
    pub fn category_conversions(&self) -> usize {
        self.categories.conversions()
    }

    /// Apply the per-pair rule to a single key/value pair
    ///
    /// Rule order matters: a non-digit string under a category key is not
    /// remapped but still falls through to the image-URL test.
    fn transform_entry(&mut self, key: &str, value: &Value) -> Value {
        if is_category_key(key) {
            if let Some(source_id) = digit_id(value) {
                let remapped = self.categories.remap(&source_id);
                return match value {
                    // Integer inputs round-trip to integers when the remapped
                    // id parses; otherwise the string stands.
                    Value::Number(_) => remapped
                        .parse::<i64>()
                        .map(Value::from)
                        .unwrap_or(Value::String(remapped)),
                    _ => Value::String(remapped),
                };
            }
        }

        match value {
            Value::String(s) => {
                if self.is_image(key, s) {
                    Value::from(self.images.build(s))
                } else {
                    Value::String(s.clone())
                }
            }
            Value::Array(items) => {
                // String elements inherit the field-name test from the
                // parent key; everything else recurses as a full sub-value.
                let items = items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) if self.is_image(key, s) => {
                            Value::from(self.images.build(s))
                        }
                        other => self.transform(other),
                    })
                    .collect();
                Value::Array(items)
            }
            Value::Object(_) => self.transform(value),
            scalar => scalar.clone(),
        }
    }

    fn is_image(&self, key: &str, value: &str) -> bool {
        self.classifier.is_image_field(key) || self.classifier.is_image_url(value)
    }
}

/// True for the category id keys, compared case-insensitively
fn is_category_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("category") || key.eq_ignore_ascii_case("categoryid")
}

/// The decimal-digit string form of a category value, when it has one
///
/// Accepts digit-only strings and non-negative integers. Floats, negative
/// integers, and strings with any non-digit character are rejected so
/// non-numeric category labels are never corrupted.
fn digit_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Some(s.clone())
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i >= 0).then(|| i.to_string())
            } else {
                n.as_u64().map(|u| u.to_string())
            }
        }
        _ => None,
    }
}
