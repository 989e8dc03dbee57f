//! Sitemap XML parser
//!
//! Extracts every `<loc>` element in the sitemap namespace, in document
//! order. Entries are returned as written; no URL validation happens here.

use super::SitemapResult;
use roxmltree::{Document, ParsingOptions};

/// Namespace of the sitemaps.org protocol
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Parses a sitemap document and returns its `<loc>` values
///
/// Works for both `<urlset>` and `<sitemapindex>` documents; for an index
/// the child sitemap URLs are returned (they are not followed).
///
/// # Example
///
/// ```
/// use sitemap_scribe::sitemap::parse_sitemap;
///
/// let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
///   <url><loc>https://example.com/a</loc></url>
/// </urlset>"#;
/// assert_eq!(parse_sitemap(xml).unwrap(), vec!["https://example.com/a"]);
/// ```
pub fn parse_sitemap(xml: &str) -> SitemapResult<Vec<String>> {
    // Sitemaps occasionally carry a `<!DOCTYPE urlset>` line, which roxmltree
    // rejects unless asked.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(xml, options)?;

    let urls = document
        .descendants()
        .filter(|node| node.has_tag_name((SITEMAP_NAMESPACE, "loc")))
        .filter_map(|node| node.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect();

    Ok(urls)
}
