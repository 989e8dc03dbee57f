use serde::Deserialize;

/// Sitemap used when no configuration overrides it
pub const DEFAULT_SITEMAP_URL: &str = "https://ai.pydantic.dev/sitemap.xml";

/// Output directory used when no configuration overrides it
pub const DEFAULT_OUTPUT_DIR: &str = "../pydantic_ai_docs";

/// Main configuration structure for Sitemap-Scribe
///
/// Every field has a default, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sitemap: SitemapConfig,
    pub browser: BrowserConfig,
    pub output: OutputConfig,
}

/// Where the sitemap lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// URL of the sitemap XML document
    pub url: String,

    /// Timeout for the sitemap request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITEMAP_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Which page crawler drives the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// A real browser controlled over WebDriver
    #[default]
    Webdriver,

    /// Plain HTTP requests sharing one cookie jar
    Http,
}

/// Page crawler configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub backend: Backend,

    /// WebDriver endpoint (chromedriver, geckodriver, ...)
    #[serde(rename = "webdriver-url")]
    pub webdriver_url: String,

    /// Run the browser without a window
    pub headless: bool,

    /// Additional command-line arguments passed to the browser
    #[serde(rename = "extra-args")]
    pub extra_args: Vec<String>,

    /// Session identifier reused for every page of a run
    #[serde(rename = "session-id")]
    pub session_id: String,

    /// User agent for the HTTP backend
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,

    /// Per-page timeout (seconds). Unset means pages may take as long as they need.
    #[serde(rename = "page-timeout-secs")]
    pub page_timeout_secs: Option<u64>,

    /// Convert each page to markdown
    pub markdown: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            extra_args: vec![
                "--disable-dev-shm-usage".to_string(),
                "--no-sandbox".to_string(),
            ],
            session_id: "session1".to_string(),
            user_agent: None,
            page_timeout_secs: None,
            markdown: true,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the markdown and HTML files
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}
