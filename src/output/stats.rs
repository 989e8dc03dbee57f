//! Run statistics
//!
//! Counters collected while a crawl runs, reported once at the end.

use super::WriteOutcome;

/// A page the crawler could not fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlFailure {
    pub url: String,
    pub message: String,
}

/// Summary of a finished run
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// URLs handed to the coordinator
    pub urls_total: usize,

    /// Pages the crawler reported as successful
    pub pages_crawled: usize,

    /// Pages the crawler reported as failed
    pub pages_failed: usize,

    /// Artifact files written
    pub artifacts_written: usize,

    /// Artifact files that could not be written
    pub write_failures: usize,

    /// Every crawl failure, in crawl order
    pub failures: Vec<CrawlFailure>,
}

impl RunStats {
    /// Creates empty statistics for a run over `urls_total` URLs
    pub fn new(urls_total: usize) -> Self {
        Self {
            urls_total,
            ..Self::default()
        }
    }

    /// Records a successful crawl and the result of writing its artifacts
    pub fn record_success(&mut self, outcome: &WriteOutcome) {
        self.pages_crawled += 1;
        self.artifacts_written += outcome.written();
        self.write_failures += outcome.failed();
    }

    /// Records a failed crawl
    pub fn record_failure(&mut self, url: &str, message: &str) {
        self.pages_failed += 1;
        self.failures.push(CrawlFailure {
            url: url.to_string(),
            message: message.to_string(),
        });
    }

    /// Pages that finished, successfully or not
    pub fn pages_attempted(&self) -> usize {
        self.pages_crawled + self.pages_failed
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_attempted();
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_crawled as f64 / attempted as f64) * 100.0
    }

    /// Logs the summary at info level
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawled {}/{} pages ({:.1}% success), {} files written, {} write failures",
            self.pages_crawled,
            self.urls_total,
            self.success_rate(),
            self.artifacts_written,
            self.write_failures
        );
        for failure in &self.failures {
            tracing::debug!("  failed: {} ({})", failure.url, failure.message);
        }
    }
}
