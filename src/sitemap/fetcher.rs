//! HTTP retrieval of sitemap documents

use super::{parse_sitemap, SitemapError, SitemapResult};
use crate::config::SitemapConfig;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client used for sitemap requests
///
/// # Example
///
/// ```no_run
/// use sitemap_scribe::config::SitemapConfig;
/// use sitemap_scribe::sitemap::build_sitemap_client;
///
/// let client = build_sitemap_client(&SitemapConfig::default()).unwrap();
/// ```
pub fn build_sitemap_client(config: &SitemapConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!("sitemap-scribe/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a sitemap and returns its URLs, keeping failures typed
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The `<loc>` entries in document order (possibly empty)
/// * `Err(SitemapError::Status)` - The server answered with a non-2xx status
/// * `Err(SitemapError::Transport)` - The request or body read failed
/// * `Err(SitemapError::Parse)` - The body is not well-formed XML
pub async fn fetch_sitemap(client: &Client, sitemap_url: &str) -> SitemapResult<Vec<String>> {
    let transport = |source: reqwest::Error| SitemapError::Transport {
        url: sitemap_url.to_string(),
        source,
    };

    let response = client.get(sitemap_url).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(SitemapError::Status {
            url: sitemap_url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(transport)?;
    parse_sitemap(&body)
}

/// Fetches a sitemap and returns its URLs, or nothing on any failure
///
/// An empty result means "nothing to do". Failures and empty sitemaps are
/// logged differently so the two cases stay distinguishable in the output.
pub async fn fetch_urls(client: &Client, sitemap_url: &str) -> Vec<String> {
    match fetch_sitemap(client, sitemap_url).await {
        Ok(urls) => {
            if urls.is_empty() {
                tracing::warn!("Sitemap {} contains no <loc> entries", sitemap_url);
            } else {
                tracing::debug!("Sitemap {} lists {} URLs", sitemap_url, urls.len());
            }
            urls
        }
        Err(e) => {
            tracing::error!("Error fetching sitemap: {}", e);
            Vec::new()
        }
    }
}
