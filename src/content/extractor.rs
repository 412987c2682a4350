//! Metadata extraction, DOM pruning and body conversion for one page

use crate::content::convert::MarkdownConverter;
use crate::content::selectors::{
    BODY_CANDIDATES, CATEGORY_LINKS, DOCUMENT_TITLE, FIRST_HEADING, META_DESCRIPTION,
    PRIMARY_HEADING, PRUNED, TAG_LINKS,
};
use crate::content::types::{CategoryLink, PageMetadata, PageResult, UNCATEGORIZED, UNTITLED};
use crate::page::{element_text, ParsedPage};
use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Selector;

/// Site-name separators in `<title>`: `Post » Site`, `Post - Site`, `Post – Site`
static TITLE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" (?:»|–|—|-) ").expect("valid title separator regex"));

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where a page title may come from, in priority order
#[derive(Debug, Clone, Copy)]
enum TitleSource {
    /// Text of the first element matching the selector
    Element(&'static Lazy<Selector>),
    /// `<title>` with the site-name suffix cut off
    DocumentTitle,
}

const TITLE_SOURCES: &[TitleSource] = &[
    TitleSource::Element(&PRIMARY_HEADING),
    TitleSource::Element(&FIRST_HEADING),
    TitleSource::DocumentTitle,
];

impl TitleSource {
    fn extract(&self, page: &ParsedPage) -> Option<String> {
        let text = match self {
            Self::Element(selector) => page.first_text(selector)?,
            Self::DocumentTitle => {
                let title = page.first_text(&DOCUMENT_TITLE)?;
                TITLE_SEPARATOR_RE
                    .split(&title)
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            }
        };
        Some(text).filter(|t| !t.is_empty())
    }
}

/// Turns a rewritten page into metadata plus a Markdown body
///
/// The page is pruned in place; it should be dropped afterwards.
#[derive(Default)]
pub struct ContentExtractor {
    converter: MarkdownConverter,
}

impl ContentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the page, stamping it with the current local time
    pub fn process(&self, page: &mut ParsedPage, url: &str) -> PageResult {
        self.process_at(page, url, Local::now().naive_local())
    }

    /// Extracts the page, stamping it with `captured_at`
    pub fn process_at(
        &self,
        page: &mut ParsedPage,
        url: &str,
        captured_at: NaiveDateTime,
    ) -> PageResult {
        let title = extract_title(page);
        let description = extract_description(page);

        let category_data = extract_category_links(page);
        let categories = dedup_preserving_order(category_data.iter().map(|c| c.name.clone()));
        let category = categories
            .into_iter()
            .next()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());

        let tags = dedup_preserving_order(
            page.document()
                .select(&TAG_LINKS)
                .map(element_text),
        );

        let pruned = page.remove_matching(&PRUNED);
        tracing::trace!("Pruned {} elements from {}", pruned, url);

        let body_html = select_body(page).unwrap_or_default();
        let content = match self.converter.convert(&body_html) {
            Ok(markdown) => markdown,
            Err(e) => {
                tracing::warn!("Failed to convert {} to Markdown: {}", url, e);
                String::new()
            }
        };

        PageResult {
            metadata: PageMetadata {
                title,
                description,
                original_url: url.to_string(),
                date: captured_at.format(DATE_FORMAT).to_string(),
                category,
                tags,
            },
            content,
            category_data,
        }
    }
}

fn extract_title(page: &ParsedPage) -> String {
    TITLE_SOURCES
        .iter()
        .find_map(|source| source.extract(page))
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn extract_description(page: &ParsedPage) -> String {
    page.document()
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

fn extract_category_links(page: &ParsedPage) -> Vec<CategoryLink> {
    page.document()
        .select(&CATEGORY_LINKS)
        .map(|anchor| CategoryLink {
            name: element_text(anchor),
            url: anchor.value().attr("href").map(str::to_string),
        })
        .collect()
}

/// Inner markup of the first content container present on the page
fn select_body(page: &ParsedPage) -> Option<String> {
    BODY_CANDIDATES
        .iter()
        .find_map(|selector| page.first_inner_html(selector))
}

fn dedup_preserving_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}
