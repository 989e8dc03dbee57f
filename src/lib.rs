//! Sitemap-Scribe: a sitemap-driven page archiver
//!
//! This crate reads a sitemap, visits every listed page in order through a
//! single browsing session, and saves each page's markdown rendering and raw
//! HTML to an output directory.

pub mod config;
pub mod crawler;
pub mod output;
pub mod sitemap;
pub mod state;

use thiserror::Error;

/// Main error type for Sitemap-Scribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sitemap error: {0}")]
    Sitemap(#[from] sitemap::SitemapError),

    #[error("Session error: {0}")]
    Session(#[from] crawler::SessionError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::RunState,
        to: state::RunState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Sitemap-Scribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_all, run, run_with, CrawlResult, PageCrawler, RunConfig};
pub use output::{file_stem_for_url, OutputWriter, RunStats};
pub use sitemap::{fetch_sitemap, fetch_urls, parse_sitemap};
pub use state::RunState;
