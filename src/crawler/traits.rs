//! Page crawler trait and associated types
//!
//! The coordinator never talks to a browser or HTTP client directly; it
//! drives whatever implements [`PageCrawler`]. Failing to fetch a page is
//! reported inside the [`CrawlResult`], not as an error, so one bad page
//! cannot abort a run.

use crate::config::BrowserConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while managing a browsing session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to start session: {0}")]
    Start(String),

    #[error("Failed to close session: {0}")]
    Close(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Per-fetch settings shared by every page of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Identifier of the session reused across the whole run
    pub session_id: String,

    /// Whether the crawler should produce markdown for each page
    pub markdown: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            session_id: "session1".to_string(),
            markdown: true,
        }
    }
}

impl From<&BrowserConfig> for RunConfig {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            session_id: config.session_id.clone(),
            markdown: config.markdown,
        }
    }
}

/// Outcome of crawling one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    /// The URL that was requested
    pub url: String,

    /// Whether the page was fetched and rendered
    pub success: bool,

    /// Why the crawl failed (only set when `success` is false)
    pub error_message: Option<String>,

    /// Markdown rendering of the page
    pub markdown: String,

    /// Raw HTML of the page
    pub html: String,

    /// HTTP status code, when the backend can observe it
    pub status_code: Option<u16>,

    /// Contents of the page's `<title>`
    pub title: Option<String>,
}

impl CrawlResult {
    /// A successful crawl
    pub fn success(url: &str, markdown: String, html: String) -> Self {
        Self {
            url: url.to_string(),
            success: true,
            markdown,
            html,
            ..Self::default()
        }
    }

    /// A failed crawl carrying the reason
    pub fn failure(url: &str, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            success: false,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

/// A capability that fetches pages inside one long-lived session
///
/// Implementations keep cookies and other browsing state between `fetch`
/// calls. The coordinator calls `start` once, `fetch` once per URL in order,
/// and `close` exactly once after a successful `start`.
#[async_trait]
pub trait PageCrawler: Send {
    /// Short backend name for log lines
    fn name(&self) -> &'static str;

    /// Opens the session
    async fn start(&mut self) -> SessionResult<()>;

    /// Fetches and renders one page
    async fn fetch(&mut self, url: &str, config: &RunConfig) -> CrawlResult;

    /// Releases the session
    async fn close(&mut self) -> SessionResult<()>;
}
