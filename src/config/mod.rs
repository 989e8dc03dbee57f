//! Configuration module for Sitemap-Scribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use sitemap_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Pages will be saved to: {}", config.output.directory);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Backend, BrowserConfig, Config, OutputConfig, SitemapConfig, DEFAULT_OUTPUT_DIR,
    DEFAULT_SITEMAP_URL,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
