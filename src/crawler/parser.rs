//! Link extraction for the crawl frontier
//!
//! Every `<a href>` on a page is resolved against the page URL with standard
//! URL joining. Fragments are dropped so `/post#comments` and `/post` are the
//! same frontier entry.

use crate::page::ParsedPage;
use crate::url::strip_fragment;
use once_cell::sync::Lazy;
use scraper::Selector;
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Extracts the absolute URL of every anchor on the page
///
/// # Example
///
/// ```
/// use site_downloader::crawler::extract_links;
/// use site_downloader::page::ParsedPage;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page#top">Link</a></body></html>"#;
/// let page = ParsedPage::parse(Url::parse("https://example.com/").unwrap(), html);
/// let links = extract_links(&page);
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(page: &ParsedPage) -> Vec<Url> {
    page.document()
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, page.url()))
        .collect()
}

/// Resolves a link href to an absolute URL without its fragment
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    Some(strip_fragment(absolute_url))
}
