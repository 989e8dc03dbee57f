//! Integration tests for the sitemap crawl
//!
//! These tests use wiremock to serve a sitemap and its pages and run the
//! full pipeline end-to-end with the HTTP backend.

use async_trait::async_trait;
use sitemap_scribe::config::{Backend, Config};
use sitemap_scribe::crawler::{run, run_with, CrawlResult, PageCrawler, RunConfig, SessionResult};
use sitemap_scribe::output::file_stem_for_url;
use sitemap_scribe::sitemap::{build_sitemap_client, fetch_sitemap, fetch_urls, SitemapError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a sitemap document listing the given URLs
fn sitemap_xml(urls: &[String]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for url in urls {
        xml.push_str(&format!("\n  <url><loc>{}</loc></url>", url));
    }
    xml.push_str("\n</urlset>\n");
    xml
}

/// Creates a test configuration pointing at the mock server
fn create_test_config(sitemap_url: String, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.sitemap.url = sitemap_url;
    config.sitemap.timeout_secs = 5;
    config.browser.backend = Backend::Http;
    config.browser.page_timeout_secs = Some(5);
    config.output.directory = output_dir.to_string_lossy().into_owned();
    config
}

async fn mount_sitemap(server: &MockServer, urls: &[String]) {
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sitemap_xml(urls))
                .insert_header("content-type", "application/xml"),
        )
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page_path: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    "<html><head><title>{0}</title></head><body><h1>{0}</h1><p>Body of {0}</p></body></html>",
                    title
                ))
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Page crawler that records how it is used
#[derive(Default)]
struct CountingCrawler {
    started: usize,
    fetched: Vec<String>,
    closed: usize,
}

#[async_trait]
impl PageCrawler for CountingCrawler {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn start(&mut self) -> SessionResult<()> {
        self.started += 1;
        Ok(())
    }

    async fn fetch(&mut self, url: &str, _config: &RunConfig) -> CrawlResult {
        self.fetched.push(url.to_string());
        CrawlResult::success(url, String::new(), String::new())
    }

    async fn close(&mut self) -> SessionResult<()> {
        self.closed += 1;
        Ok(())
    }
}

#[tokio::test]
async fn test_full_crawl_with_http_backend() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let urls = vec![format!("{}/a", base_url), format!("{}/b", base_url)];

    mount_sitemap(&mock_server, &urls).await;
    mount_page(&mock_server, "/a", "Page A").await;
    mount_page(&mock_server, "/b", "Page B").await;

    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("docs");
    let config = create_test_config(format!("{}/sitemap.xml", base_url), &out);

    let stats = run(config).await.expect("Crawl failed");

    assert_eq!(stats.urls_total, 2);
    assert_eq!(stats.pages_crawled, 2);
    assert_eq!(stats.artifacts_written, 4);

    for (url, title) in urls.iter().zip(["Page A", "Page B"]) {
        let stem = file_stem_for_url(url);
        assert!(!stem.contains(':'));

        let markdown = fs::read_to_string(out.join(format!("{}_markdown.txt", stem)))
            .expect("markdown file missing");
        let html = fs::read_to_string(out.join(format!("{}_html.txt", stem)))
            .expect("html file missing");

        assert!(markdown.contains(title));
        assert!(!markdown.contains("<h1>"));
        assert!(html.contains(&format!("<h1>{}</h1>", title)));
    }

    assert_eq!(fs::read_dir(&out).unwrap().count(), 4);
}

#[tokio::test]
async fn test_failed_page_does_not_stop_the_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let urls = vec![
        format!("{}/ok-1", base_url),
        format!("{}/broken", base_url),
        format!("{}/ok-2", base_url),
    ];

    mount_sitemap(&mock_server, &urls).await;
    mount_page(&mock_server, "/ok-1", "First").await;
    mount_page(&mock_server, "/ok-2", "Second").await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    let config = create_test_config(format!("{}/sitemap.xml", base_url), tmp.path());

    let stats = run(config).await.expect("Crawl failed");

    assert_eq!(stats.pages_crawled, 2);
    assert_eq!(stats.pages_failed, 1);
    assert_eq!(stats.failures[0].url, urls[1]);
    assert_eq!(stats.failures[0].message, "HTTP 500");

    let broken_stem = file_stem_for_url(&urls[1]);
    assert!(!tmp.path().join(format!("{}_markdown.txt", broken_stem)).exists());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 4);
}

#[tokio::test]
async fn test_cookies_persist_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let urls = vec![format!("{}/login", base_url), format!("{}/private", base_url)];

    mount_sitemap(&mock_server, &urls).await;
    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>Welcome</body></html>")
                .insert_header("set-cookie", "session=abc; Path=/"),
        )
        .mount(&mock_server)
        .await;
    // Without the cookie the request falls through to wiremock's default 404.
    Mock::given(method("GET"))
        .and(path("/private"))
        .and(header("cookie", "session=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>Secret</body></html>"))
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    let config = create_test_config(format!("{}/sitemap.xml", base_url), tmp.path());

    let stats = run(config).await.expect("Crawl failed");

    assert_eq!(stats.pages_failed, 0, "failures: {:?}", stats.failures);
    let stem = file_stem_for_url(&urls[1]);
    let html = fs::read_to_string(tmp.path().join(format!("{}_html.txt", stem))).unwrap();
    assert!(html.contains("Secret"));
}

#[tokio::test]
async fn test_sitemap_error_means_zero_crawls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("docs");
    let config = create_test_config(format!("{}/sitemap.xml", mock_server.uri()), &out);

    let mut crawler = CountingCrawler::default();
    let stats = run_with(&config, &mut crawler).await.expect("Run failed");

    assert_eq!(stats.urls_total, 0);
    assert_eq!(crawler.started, 0);
    assert!(crawler.fetched.is_empty());
    assert_eq!(crawler.closed, 0);
    assert!(!out.exists());
}

#[tokio::test]
async fn test_sitemap_order_drives_crawl_order() {
    let mock_server = MockServer::start().await;
    let urls: Vec<String> = ["/c", "/a", "/b", "/a"]
        .iter()
        .map(|p| format!("{}{}", mock_server.uri(), p))
        .collect();
    mount_sitemap(&mock_server, &urls).await;

    let tmp = TempDir::new().unwrap();
    let config = create_test_config(format!("{}/sitemap.xml", mock_server.uri()), tmp.path());

    let mut crawler = CountingCrawler::default();
    let stats = run_with(&config, &mut crawler).await.expect("Run failed");

    assert_eq!(stats.urls_total, 4);
    assert_eq!(crawler.fetched, urls);
    assert_eq!(crawler.started, 1);
    assert_eq!(crawler.closed, 1);
}

#[tokio::test]
async fn test_fetch_sitemap_distinguishes_failures() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset><url>"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/empty.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sitemap_xml(&[])))
        .mount(&mock_server)
        .await;

    let client = build_sitemap_client(&Config::default().sitemap).unwrap();
    let base = mock_server.uri();

    let missing = fetch_sitemap(&client, &format!("{}/missing.xml", base)).await;
    assert!(matches!(missing, Err(SitemapError::Status { status: 404, .. })));

    let broken = fetch_sitemap(&client, &format!("{}/broken.xml", base)).await;
    assert!(matches!(broken, Err(SitemapError::Parse(_))));

    let empty = fetch_sitemap(&client, &format!("{}/empty.xml", base)).await;
    assert!(empty.unwrap().is_empty());

    // The lenient wrapper flattens all three to "nothing to do".
    for name in ["missing", "broken", "empty"] {
        let urls = fetch_urls(&client, &format!("{}/{}.xml", base, name)).await;
        assert!(urls.is_empty(), "{} should yield no URLs", name);
    }
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let urls = vec![format!("{}/a", base_url)];
    mount_sitemap(&mock_server, &urls).await;
    mount_page(&mock_server, "/a", "Page A").await;

    let tmp = TempDir::new().unwrap();
    let config = create_test_config(format!("{}/sitemap.xml", base_url), tmp.path());

    run(config.clone()).await.expect("First crawl failed");
    let stem = file_stem_for_url(&urls[0]);
    let md_path = tmp.path().join(format!("{}_markdown.txt", stem));
    let first = fs::read_to_string(&md_path).unwrap();

    run(config).await.expect("Second crawl failed");
    let second = fs::read_to_string(&md_path).unwrap();

    assert_eq!(first, second);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 2);
}
