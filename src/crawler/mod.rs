//! Crawler module for sequential page fetching
//!
//! This module contains the crawl pipeline, including:
//! - The `PageCrawler` seam and its WebDriver and HTTP backends
//! - Markdown rendering of fetched pages
//! - The coordinator that walks the URL list through one session

mod coordinator;
mod http;
pub mod markdown;
mod traits;
mod webdriver;

pub use coordinator::{crawl_all, Coordinator};
pub use http::HttpCrawler;
pub use traits::{CrawlResult, PageCrawler, RunConfig, SessionError, SessionResult};
pub use webdriver::WebDriverCrawler;

use crate::config::{Backend, BrowserConfig, Config};
use crate::output::RunStats;
use crate::sitemap::{build_sitemap_client, fetch_urls};
use crate::ScribeError;

/// Builds the page crawler selected by the configuration
pub fn build_crawler(config: &BrowserConfig) -> Box<dyn PageCrawler> {
    match config.backend {
        Backend::Webdriver => Box::new(WebDriverCrawler::new(config.clone())),
        Backend::Http => Box::new(HttpCrawler::new(config.clone())),
    }
}

/// Runs a complete sitemap crawl
///
/// This is the main entry point. It will:
/// 1. Fetch the sitemap and collect its URLs
/// 2. Stop early if there is nothing to crawl
/// 3. Build the configured page crawler
/// 4. Crawl every URL through one session and save the results
///
/// # Example
///
/// ```no_run
/// use sitemap_scribe::config::Config;
/// use sitemap_scribe::crawler::run;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run(Config::default()).await?;
/// stats.log_summary();
/// # Ok(())
/// # }
/// ```
pub async fn run(config: Config) -> Result<RunStats, ScribeError> {
    let mut crawler = build_crawler(&config.browser);
    run_with(&config, crawler.as_mut()).await
}

/// Runs a complete sitemap crawl with a caller-supplied page crawler
///
/// No session is started when the sitemap yields no URLs.
pub async fn run_with<C: PageCrawler + ?Sized>(
    config: &Config,
    crawler: &mut C,
) -> Result<RunStats, ScribeError> {
    let client = build_sitemap_client(&config.sitemap)?;
    let urls = fetch_urls(&client, &config.sitemap.url).await;

    if urls.is_empty() {
        tracing::info!("No URLs found to crawl");
        return Ok(RunStats::default());
    }

    tracing::info!("Found {} URLs to crawl", urls.len());
    let run_config = RunConfig::from(&config.browser);
    crawl_all(crawler, &urls, &config.output, &run_config).await
}
