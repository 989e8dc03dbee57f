//! Output module for persisting crawled pages
//!
//! This module handles:
//! - Deriving filesystem-safe file names from page URLs
//! - Writing the markdown and HTML artifacts of each page
//! - Recording run statistics

pub mod stats;
mod writer;

pub use stats::{CrawlFailure, RunStats};
pub use writer::{file_stem_for_url, Artifact, OutputWriter, WriteOutcome};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
