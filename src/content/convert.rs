//! HTML → Markdown conversion and the WordPress cleanup rewrites

use crate::DownloaderError;
use htmd::HtmlToMarkdown;
use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose content is never page text; dropped whole
///
/// Other tags without a Markdown form (`form`, `button`, `svg`, ...) lose
/// their markup but keep their text.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "template", "input", "embed", "canvas",
];

static POSTED_IN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Posted in \[.*?\]\(.*?\)) \*\*\|\*\* Comments Off on .*")
        .expect("valid posted-in regex")
});

static CATEGORY_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/category/([a-zA-Z0-9-]+)/?").expect("valid category path regex"));

const COMMENTS_CLOSED: &str = "Comments are closed.";

/// Converts HTML fragments to Markdown
pub struct MarkdownConverter {
    inner: HtmlToMarkdown,
}

impl MarkdownConverter {
    pub fn new() -> Self {
        Self {
            inner: HtmlToMarkdown::builder()
                .skip_tags(SKIPPED_TAGS.to_vec())
                .build(),
        }
    }

    /// Converts `html` and applies [`clean_markdown`]
    pub fn convert(&self, html: &str) -> Result<String, DownloaderError> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let markdown = self
            .inner
            .convert(html)
            .map_err(|e| DownloaderError::Convert(e.to_string()))?;

        Ok(clean_markdown(&markdown))
    }
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the fixed text rewrites to converted Markdown
///
/// 1. `Posted in [..](..) **|** Comments Off on ...` → `Posted in [..](..)`
/// 2. `/category/{slug}/` → `/{slug}.html`
/// 3. `Comments are closed.` removed
///
/// ```
/// use site_downloader::content::clean_markdown;
///
/// assert_eq!(clean_markdown("[Tech](/category/tech/)"), "[Tech](/tech.html)");
/// ```
pub fn clean_markdown(markdown: &str) -> String {
    let collapsed = POSTED_IN_RE.replace_all(markdown, "$1");
    let relinked = CATEGORY_PATH_RE.replace_all(&collapsed, "/$1.html");
    relinked.replace(COMMENTS_CLOSED, "")
}
