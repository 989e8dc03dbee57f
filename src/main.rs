//! Sitemap-Scribe main entry point
//!
//! This is the command-line interface for the Sitemap-Scribe page archiver.

use anyhow::Context;
use clap::Parser;
use sitemap_scribe::config::{load_config, Backend, Config};
use sitemap_scribe::crawler::run;
use sitemap_scribe::sitemap::{build_sitemap_client, fetch_urls};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemap-Scribe: save every page of a sitemap as markdown and HTML
///
/// Reads the sitemap, visits each listed page in order through a single
/// browsing session, and writes `<page>_markdown.txt` and `<page>_html.txt`
/// into the output directory.
#[derive(Parser, Debug)]
#[command(name = "sitemap-scribe")]
#[command(version)]
#[command(about = "Save every page of a sitemap as markdown and HTML", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Sitemap URL to read
    #[arg(long, value_name = "URL")]
    sitemap_url: Option<String>,

    /// Directory receiving the saved pages
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Page crawler backend
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Session identifier reused for every page
    #[arg(long)]
    session_id: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List the sitemap URLs without starting a session
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config).await
    } else {
        handle_crawl(config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemap_scribe=info,warn"),
            1 => EnvFilter::new("sitemap_scribe=debug,info"),
            2 => EnvFilter::new("sitemap_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(url) = &cli.sitemap_url {
        config.sitemap.url = url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(backend) = cli.backend {
        config.browser.backend = backend;
    }
    if let Some(session_id) = &cli.session_id {
        config.browser.session_id = session_id.clone();
    }

    sitemap_scribe::config::validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: lists what would be crawled
async fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== Sitemap-Scribe Dry Run ===\n");
    println!("Sitemap: {}", config.sitemap.url);
    println!("Output:  {}", config.output.directory);
    println!("Backend: {:?}", config.browser.backend);
    println!("Session: {}\n", config.browser.session_id);

    let client = build_sitemap_client(&config.sitemap)?;
    let urls = fetch_urls(&client, &config.sitemap.url).await;

    println!("Would crawl {} URLs:", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} into {}",
        config.sitemap.url,
        config.output.directory
    );

    match run(config).await {
        Ok(stats) => {
            stats.log_summary();
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
