//! Browser-backed page crawler
//!
//! Drives a real browser through a WebDriver endpoint (chromedriver by
//! default). One WebDriver session is opened per run, so cookies and login
//! state carry over from page to page.

use crate::config::BrowserConfig;
use crate::crawler::markdown::render_page;
use crate::crawler::{CrawlResult, PageCrawler, RunConfig, SessionError, SessionResult};
use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::{Client, ClientBuilder};
use serde_json::json;
use std::time::Duration;
use webdriver::capabilities::Capabilities;

/// Page crawler backed by a WebDriver-controlled browser
pub struct WebDriverCrawler {
    config: BrowserConfig,
    client: Option<Client>,
}

impl WebDriverCrawler {
    /// Creates a crawler; no browser is launched until [`PageCrawler::start`]
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    /// Browser arguments derived from the configuration
    pub fn browser_args(&self) -> Vec<String> {
        let mut args = self.config.extra_args.clone();

        if self.config.headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }

        if let Some(agent) = &self.config.user_agent {
            args.push(format!("--user-agent={}", agent));
        }

        args
    }

    /// WebDriver capabilities requesting a Chrome session with our arguments
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::new();
        caps.insert(
            "goog:chromeOptions".to_string(),
            json!({ "args": self.browser_args() }),
        );
        caps
    }
}

/// Navigates to `url` and returns the rendered page source
async fn navigate(client: &Client, url: &str) -> Result<String, CmdError> {
    client.goto(url).await?;
    client.source().await
}

#[async_trait]
impl PageCrawler for WebDriverCrawler {
    fn name(&self) -> &'static str {
        "webdriver"
    }

    async fn start(&mut self) -> SessionResult<()> {
        tracing::debug!(
            "Connecting to WebDriver at {} (headless: {})",
            self.config.webdriver_url,
            self.config.headless
        );

        let client = ClientBuilder::native()
            .capabilities(self.capabilities())
            .connect(&self.config.webdriver_url)
            .await
            .map_err(|e| SessionError::Start(e.to_string()))?;

        self.client = Some(client);
        Ok(())
    }

    async fn fetch(&mut self, url: &str, config: &RunConfig) -> CrawlResult {
        let Some(client) = self.client.as_ref() else {
            return CrawlResult::failure(url, "browser session is not started");
        };

        let navigation = navigate(client, url);
        let html = match self.config.page_timeout_secs {
            Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), navigation).await {
                Ok(result) => result,
                Err(_) => return CrawlResult::failure(url, "timeout"),
            },
            None => navigation.await,
        };

        match html {
            Ok(html) => render_page(url, html, config),
            Err(e) => CrawlResult::failure(url, e.to_string()),
        }
    }

    async fn close(&mut self) -> SessionResult<()> {
        if let Some(client) = self.client.take() {
            client
                .close()
                .await
                .map_err(|e| SessionError::Close(e.to_string()))?;
        }
        Ok(())
    }
}
