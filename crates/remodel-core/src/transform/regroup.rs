//! Banner regrouping pass for `components` arrays
//!
//! Banner components whose items are all main categories are lifted out of
//! the sequence: their items accumulate into a single synthetic
//! `mainCategoryList` component inserted at index 0, and the originals are
//! removed. Runs after the elements themselves have been transformed, so the
//! extracted `image` values are already image descriptors.
//!
//! Copyright (c) 2026 Remodel Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

const BANNER_LAYOUT: &str = "banner";
const MAIN_CATEGORY_LIST_LAYOUT: &str = "mainCategoryList";

/// Regroup an already-transformed `components` sequence
///
/// When no component qualifies the sequence comes back structurally
/// unchanged; survivors always keep their relative order.
pub fn regroup_components(components: Vec<Value>) -> Vec<Value> {
    let mut collected: Vec<Value> = Vec::new();
    let mut survivors: Vec<Value> = Vec::with_capacity(components.len());

    for component in components {
        if let Some(items) = qualifying_items(&component) {
            for item in items {
                let mut record = Map::new();
                record.insert("id".to_string(), Value::String(item_id(item)));
                record.insert(
                    "image".to_string(),
                    item.get("image").cloned().unwrap_or(Value::Null),
                );
                collected.push(Value::Object(record));
            }
        } else {
            survivors.push(component);
        }
    }

    if collected.is_empty() {
        return survivors;
    }

    let mut config = Map::new();
    config.insert("categories".to_string(), Value::Array(collected));
    let mut lead = Map::new();
    lead.insert(
        "layout".to_string(),
        Value::String(MAIN_CATEGORY_LIST_LAYOUT.to_string()),
    );
    lead.insert("config".to_string(), Value::Object(config));

    let mut regrouped = Vec::with_capacity(survivors.len() + 1);
    regrouped.push(Value::Object(lead));
    regrouped.extend(survivors);
    regrouped
}

/// The items of a qualifying banner component
///
/// A component qualifies iff its layout is `banner` and `config.items` is a
/// non-empty array whose every element has a truthy `isMainCategory`. An
/// empty or missing items array never qualifies.
fn qualifying_items(component: &Value) -> Option<&Vec<Value>> {
    if component.get("layout").and_then(Value::as_str) != Some(BANNER_LAYOUT) {
        return None;
    }
    let items = component.get("config")?.get("items")?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .all(|item| is_truthy(item.get("isMainCategory").unwrap_or(&Value::Null)))
        .then_some(items)
}

/// String form of the item's `category` value
fn item_id(item: &Value) -> String {
    match item.get("category") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => Value::Null.to_string(),
    }
}

/// JSON truthiness: null, false, zero, and empty containers are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
