//! HTTP-only page crawler
//!
//! Fetches pages without a browser. The session is a cookie jar shared by
//! every request of the run. Pages that need JavaScript to render will come
//! back as their server-side HTML.

use crate::config::BrowserConfig;
use crate::crawler::markdown::render_page;
use crate::crawler::{CrawlResult, PageCrawler, RunConfig, SessionResult};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Page crawler backed by a cookie-keeping `reqwest` client
pub struct HttpCrawler {
    config: BrowserConfig,
    client: Option<Client>,
}

impl HttpCrawler {
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    fn build_client(&self) -> Result<Client, reqwest::Error> {
        let user_agent = self
            .config
            .user_agent
            .clone()
            .unwrap_or_else(|| concat!("sitemap-scribe/", env!("CARGO_PKG_VERSION")).to_string());

        let mut builder = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true);

        if let Some(secs) = self.config.page_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }
}

#[async_trait]
impl PageCrawler for HttpCrawler {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn start(&mut self) -> SessionResult<()> {
        self.client = Some(self.build_client()?);
        Ok(())
    }

    async fn fetch(&mut self, url: &str, config: &RunConfig) -> CrawlResult {
        let Some(client) = self.client.as_ref() else {
            return CrawlResult::failure(url, "http session is not started");
        };

        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return CrawlResult::failure(url, "timeout"),
            Err(e) => return CrawlResult::failure(url, e.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return CrawlResult::failure(url, format!("HTTP {}", status.as_u16()))
                .with_status(status.as_u16());
        }

        match response.text().await {
            Ok(html) => render_page(url, html, config).with_status(status.as_u16()),
            Err(e) if e.is_timeout() => CrawlResult::failure(url, "timeout"),
            Err(e) => CrawlResult::failure(url, e.to_string()),
        }
    }

    async fn close(&mut self) -> SessionResult<()> {
        self.client = None;
        Ok(())
    }
}
