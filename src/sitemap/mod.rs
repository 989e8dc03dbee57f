//! Sitemap discovery
//!
//! This module turns a sitemap URL into the ordered list of page URLs to
//! crawl:
//! - Fetching the sitemap document over HTTP
//! - Parsing `<loc>` entries in the sitemap namespace
//! - Classifying failures so callers can tell "broken" from "empty"

mod fetcher;
mod parser;

pub use fetcher::{build_sitemap_client, fetch_sitemap, fetch_urls};
pub use parser::{parse_sitemap, SITEMAP_NAMESPACE};

use thiserror::Error;

/// Errors that can occur while retrieving a sitemap
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Sitemap {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request for sitemap {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Malformed sitemap XML: {0}")]
    Parse(#[from] roxmltree::Error),
}

/// Result type for sitemap operations
pub type SitemapResult<T> = Result<T, SitemapError>;
