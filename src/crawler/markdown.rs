//! Page rendering helpers
//!
//! Turns fetched HTML into the pieces of a [`CrawlResult`]: the markdown
//! rendering and the page title.

use crate::crawler::{CrawlResult, RunConfig};
use scraper::{Html, Selector};

/// Converts an HTML document to markdown
pub fn html_to_markdown(html: &str) -> String {
    html2md::parse_html(html)
}

/// Extracts the page title from the HTML document
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Builds a successful result from fetched HTML
///
/// Markdown is only produced when the run asks for it.
pub fn render_page(url: &str, html: String, config: &RunConfig) -> CrawlResult {
    let markdown = if config.markdown {
        html_to_markdown(&html)
    } else {
        String::new()
    };
    let title = extract_title(&html);

    CrawlResult::success(url, markdown, html).with_title(title)
}
