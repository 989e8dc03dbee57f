//! Artifact writer
//!
//! Each crawled page produces two sibling files in the output directory:
//! `<stem>_markdown.txt` and `<stem>_html.txt`. Files are truncated on every
//! write, so rerunning a crawl replaces earlier output instead of appending.

use super::{OutputError, OutputResult};
use std::fs;
use std::path::{Path, PathBuf};

/// The two files written for every page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Markdown,
    Html,
}

impl Artifact {
    /// File name suffix appended to the URL stem
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Markdown => "_markdown.txt",
            Self::Html => "_html.txt",
        }
    }
}

/// Derives a file stem from a URL
///
/// The scheme (everything through the first `://`) is removed, then every
/// `/` and `:` becomes `_`.
///
/// # Example
///
/// ```
/// use sitemap_scribe::output::file_stem_for_url;
///
/// assert_eq!(file_stem_for_url("https://example.com/a"), "example.com_a");
/// assert_eq!(file_stem_for_url("http://localhost:8000/docs/"), "localhost_8000_docs_");
/// ```
pub fn file_stem_for_url(url: &str) -> String {
    let without_scheme = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    without_scheme.replace(|c: char| c == '/' || c == ':', "_")
}

/// Result of writing one page's artifacts
///
/// The two writes are independent; one may fail while the other succeeds.
#[derive(Debug)]
pub struct WriteOutcome {
    pub markdown: OutputResult<PathBuf>,
    pub html: OutputResult<PathBuf>,
}

impl WriteOutcome {
    /// Number of artifacts written successfully
    pub fn written(&self) -> usize {
        [self.markdown.is_ok(), self.html.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count()
    }

    /// Number of artifacts that could not be written
    pub fn failed(&self) -> usize {
        2 - self.written()
    }
}

/// Writes page artifacts into a single output directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    directory: PathBuf,
}

impl OutputWriter {
    /// Creates a writer targeting `directory` (nothing is touched on disk yet)
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory artifacts are written to
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Creates the output directory and any missing parents
    ///
    /// Calling this on an existing directory is a no-op.
    pub fn ensure_directory(&self) -> OutputResult<()> {
        fs::create_dir_all(&self.directory).map_err(|source| OutputError::CreateDir {
            path: self.directory.clone(),
            source,
        })
    }

    /// Full path of one artifact for `url`
    pub fn artifact_path(&self, url: &str, artifact: Artifact) -> PathBuf {
        let name = format!("{}{}", file_stem_for_url(url), artifact.suffix());
        self.directory.join(name)
    }

    /// Writes both artifacts for `url`
    ///
    /// Failures are logged and reported in the outcome; they never stop the
    /// sibling write.
    pub fn write(&self, url: &str, markdown: &str, html: &str) -> WriteOutcome {
        let markdown = self.write_artifact(url, Artifact::Markdown, markdown);
        match &markdown {
            Ok(path) => tracing::info!("Saved to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save file for {}: {}", url, e),
        }

        let html = self.write_artifact(url, Artifact::Html, html);
        match &html {
            Ok(path) => tracing::info!("Saved HTML to: {}", path.display()),
            Err(e) => tracing::error!("Failed to save HTML file for {}: {}", url, e),
        }

        WriteOutcome { markdown, html }
    }

    fn write_artifact(&self, url: &str, artifact: Artifact, content: &str) -> OutputResult<PathBuf> {
        let path = self.artifact_path(url, artifact);
        fs::write(&path, content).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
