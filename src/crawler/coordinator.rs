//! Crawl coordinator - sequential crawl orchestration
//!
//! This module owns the run loop:
//! - Preparing the output directory
//! - Opening the single browsing session
//! - Fetching each URL in order and handing successful pages to the writer
//! - Closing the session on every path once it has been opened

use crate::config::OutputConfig;
use crate::crawler::{PageCrawler, RunConfig};
use crate::output::{OutputWriter, RunStats};
use crate::state::RunState;
use crate::{Result, ScribeError};

/// Drives one page crawler over a list of URLs
pub struct Coordinator<'a, C: PageCrawler + ?Sized> {
    crawler: &'a mut C,
    writer: OutputWriter,
    run: RunConfig,
    state: RunState,
}

impl<'a, C: PageCrawler + ?Sized> Coordinator<'a, C> {
    /// Creates a coordinator; nothing is started until [`Coordinator::run`]
    pub fn new(crawler: &'a mut C, writer: OutputWriter, run: RunConfig) -> Self {
        Self {
            crawler,
            writer,
            run,
            state: RunState::NotStarted,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Crawls every URL in order and returns the run statistics
    ///
    /// The session is closed exactly once if it was opened, even when the
    /// loop returns an error. If closing fails after a clean loop, the close
    /// error is returned.
    pub async fn run(&mut self, urls: &[String]) -> Result<RunStats> {
        self.writer.ensure_directory()?;
        self.open_session().await?;

        let outcome = self.crawl_urls(urls).await;
        let closed = self.close_session().await;

        match (outcome, closed) {
            (Ok(stats), Ok(())) => Ok(stats),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                tracing::error!("Failed to close session after error: {}", close_err);
                Err(e)
            }
        }
    }

    async fn open_session(&mut self) -> Result<()> {
        if !self.state.can_transition_to(RunState::SessionActive) {
            return Err(ScribeError::InvalidTransition {
                from: self.state,
                to: RunState::SessionActive,
            });
        }

        self.crawler.start().await?;
        self.state.transition(RunState::SessionActive)?;
        tracing::info!(
            "Started {} session '{}'",
            self.crawler.name(),
            self.run.session_id
        );
        Ok(())
    }

    async fn close_session(&mut self) -> Result<()> {
        self.state.transition(RunState::Closed)?;
        self.crawler.close().await?;
        tracing::info!("Closed session '{}'", self.run.session_id);
        Ok(())
    }

    async fn crawl_urls(&mut self, urls: &[String]) -> Result<RunStats> {
        if !self.state.is_active() {
            return Err(ScribeError::InvalidTransition {
                from: self.state,
                to: RunState::SessionActive,
            });
        }

        let mut stats = RunStats::new(urls.len());

        for (index, url) in urls.iter().enumerate() {
            tracing::debug!("[{}/{}] Fetching {}", index + 1, urls.len(), url);
            self.process_url(url, &mut stats).await;
        }

        Ok(stats)
    }

    /// Fetches one page and persists it; failures are recorded, never raised
    async fn process_url(&mut self, url: &str, stats: &mut RunStats) {
        let result = self.crawler.fetch(url, &self.run).await;

        if result.success {
            match &result.title {
                Some(title) => tracing::info!("Successfully crawled: {} ({})", url, title),
                None => tracing::info!("Successfully crawled: {}", url),
            }
            let outcome = self.writer.write(url, &result.markdown, &result.html);
            stats.record_success(&outcome);
        } else {
            let message = result.error_message.as_deref().unwrap_or("unknown error");
            tracing::warn!("Failed: {} - Error: {}", url, message);
            stats.record_failure(url, message);
        }
    }
}

/// Crawls `urls` sequentially through one session of `crawler`
///
/// # Arguments
///
/// * `crawler` - The page crawler; started and closed by this call
/// * `urls` - Pages to crawl, in order
/// * `output` - Where the artifacts go
/// * `run` - Per-fetch settings (session id, markdown conversion)
///
/// # Returns
///
/// * `Ok(RunStats)` - The run finished; individual pages may still have failed
/// * `Err(ScribeError)` - The output directory or the session could not be managed
///
/// # Example
///
/// ```no_run
/// use sitemap_scribe::config::{BrowserConfig, OutputConfig};
/// use sitemap_scribe::crawler::{crawl_all, HttpCrawler, RunConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut crawler = HttpCrawler::new(BrowserConfig::default());
/// let urls = vec!["https://example.com/".to_string()];
/// let stats = crawl_all(&mut crawler, &urls, &OutputConfig::default(), &RunConfig::default()).await?;
/// println!("{} pages saved", stats.pages_crawled);
/// # Ok(())
/// # }
/// ```
pub async fn crawl_all<C: PageCrawler + ?Sized>(
    crawler: &mut C,
    urls: &[String],
    output: &OutputConfig,
    run: &RunConfig,
) -> Result<RunStats> {
    tracing::info!("Sequential crawling with session reuse");
    let writer = OutputWriter::new(&output.directory);
    let mut coordinator = Coordinator::new(crawler, writer, run.clone());
    coordinator.run(urls).await
}
