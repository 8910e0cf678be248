//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use remodel_core::TransformConfig;
use std::path::PathBuf;

/// Remodel - transform JSON documents into image-model form
///
/// Recursively rewrites a JSON document: image URL strings become structured
/// image descriptors enriched with pixel dimensions, and category identifiers
/// are remapped to the catalog identifier space.
#[derive(Parser, Debug)]
#[command(name = "remodel", version, author, about, long_about = None)]
pub struct Cli {
    /// Path to the input JSON document
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the output file (stdout if not specified)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// JSON output indentation; 0 emits compact output
    #[arg(long, default_value = "2", value_name = "N")]
    pub indent: usize,

    /// Skip fetching image dimensions for faster processing
    #[arg(long)]
    pub no_dimensions: bool,

    /// Disable in-memory caching of dimension fetch outcomes
    #[arg(long)]
    pub no_dimension_cache: bool,

    /// Leave category identifiers unconverted
    #[arg(long)]
    pub no_category_remap: bool,

    /// Consumer key for the category directory service
    #[arg(long, env = "REMODEL_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,

    /// Consumer secret for the category directory service
    #[arg(long, env = "REMODEL_CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: Option<String>,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse arguments from the process environment
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    /// Effective verbosity level
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Derive the engine configuration from the parsed flags
    pub fn transform_config(&self) -> TransformConfig {
        let mut config = TransformConfig::default();
        config.fetch_dimensions = !self.no_dimensions;
        config.cache_dimensions = !self.no_dimension_cache;
        config.convert_category_ids = !self.no_category_remap;
        if let Some(key) = &self.consumer_key {
            config.category.consumer_key = key.clone();
        }
        if let Some(secret) = &self.consumer_secret {
            config.category.consumer_secret = secret.clone();
        }
        config
    }
}
