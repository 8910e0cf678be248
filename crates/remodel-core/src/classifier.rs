//! Image field and URL classification heuristics
//!
//! Decides whether a key or a string value refers to an image. The field-name
//! set, extension list, and host-pattern list are configuration data so tests
//! and embedders can override them; classification itself is pure and makes
//! no external calls.
//!
//! Copyright (c) 2026 Remodel Team
//! Licensed under the Apache-2.0 license

use std::collections::HashSet;

/// Tables driving the image classification heuristics
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Field names whose string values are always treated as image URLs
    pub image_fields: Vec<String>,
    /// File extensions recognized as image suffixes
    pub image_extensions: Vec<String>,
    /// Substrings (CDN hosts, path segments) recognized as image hosting
    pub image_url_patterns: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            image_fields: [
                "image",
                "small_img",
                "slider_images",
                "homeTabBarBackgroundImage",
                "sectionTabBackgroundImage",
                "sectionBackgrondImg",
                "influencer_pfp",
                "backgroundImage",
                "banner_image",
                "profile_image",
                "thumbnail",
                "cover_image",
                "logo",
                "icon",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            image_extensions: [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            image_url_patterns: [
                "cdn.digitaloceanspaces.com",
                "amazonaws.com",
                "cloudinary.com",
                "imgur.com",
                "unsplash.com",
                "/images/",
                "/img/",
                "/media/",
                "/assets/",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Stateless classifier over keys and string values
///
/// This is a heuristic, not a guarantee: false positives and negatives are
/// accepted by design.
#[derive(Debug, Clone)]
pub struct ImageClassifier {
    fields: HashSet<String>,
    extensions: Vec<String>,
    patterns: Vec<String>,
}

impl ImageClassifier {
    /// Build a classifier, normalizing all tables to lowercase
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            fields: config
                .image_fields
                .iter()
                .map(|f| f.to_lowercase())
                .collect(),
            extensions: config
                .image_extensions
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            patterns: config
                .image_url_patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
        }
    }

    /// True iff the key names a known image field, case-insensitively
    pub fn is_image_field(&self, key: &str) -> bool {
        self.fields.contains(&key.to_lowercase())
    }

    /// True iff the string ends with an image extension or contains a known
    /// image-hosting pattern
    pub fn is_image_url(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext))
            || self.patterns.iter().any(|pat| lower.contains(pat))
    }
}

impl Default for ImageClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_field_case_insensitive() {
        let classifier = ImageClassifier::default();
        assert!(classifier.is_image_field("image"));
        assert!(classifier.is_image_field("Thumbnail"));
        assert!(classifier.is_image_field("HOMETABBARBACKGROUNDIMAGE"));
        assert!(!classifier.is_image_field("title"));
    }

    #[test]
    fn test_image_url_by_extension() {
        let classifier = ImageClassifier::default();
        assert!(classifier.is_image_url("https://example.com/photo.png"));
        assert!(classifier.is_image_url("https://example.com/PHOTO.JPG"));
        assert!(!classifier.is_image_url("https://example.com/report.pdf"));
    }

    #[test]
    fn test_image_url_by_pattern() {
        let classifier = ImageClassifier::default();
        assert!(classifier.is_image_url("https://bucket.amazonaws.com/x"));
        assert!(classifier.is_image_url("https://example.com/images/banner"));
        assert!(!classifier.is_image_url("https://example.com/docs/banner"));
    }

    #[test]
    fn test_overridden_tables() {
        let config = ClassifierConfig {
            image_fields: vec!["poster".to_string()],
            image_extensions: vec![".tiff".to_string()],
            image_url_patterns: vec!["/pics/".to_string()],
        };
        let classifier = ImageClassifier::new(&config);
        assert!(classifier.is_image_field("Poster"));
        assert!(!classifier.is_image_field("image"));
        assert!(classifier.is_image_url("scan.tiff"));
        assert!(classifier.is_image_url("https://example.com/pics/1"));
        assert!(!classifier.is_image_url("photo.png"));
    }
}
