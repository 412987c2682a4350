//! Output path derivation
//!
//! Pages land at `{category-slug}/{page-slug}.md`; the site root is the only
//! page written at the top level, as `index.md`.

use crate::content::{PageMetadata, UNCATEGORIZED};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use url::Url;

/// File name of the site root page
pub const INDEX_FILE: &str = "index.md";

static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

const ROOT_PATHS: &[&str] = &["/", "/index.html", "/index.php"];

/// Lowercases `text`, turns every run of non-alphanumerics into `-` and trims `-`
///
/// ```
/// use site_downloader::output::slugify;
///
/// assert_eq!(slugify("Web Development & Design"), "web-development-design");
/// assert_eq!(slugify("  --Hello--  "), "hello");
/// assert_eq!(slugify("日本語"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_SLUG_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Path of the Markdown file for a page, relative to the output root
///
/// # Arguments
///
/// * `url` - The page URL
/// * `metadata` - Extracted metadata; its category selects the directory
///
/// # Returns
///
/// `index.md` for the site root, otherwise `{category-slug}/{slug}.md`
pub fn compute_output_path(url: &Url, metadata: &PageMetadata) -> PathBuf {
    if ROOT_PATHS.contains(&url.path()) {
        return PathBuf::from(INDEX_FILE);
    }

    let category_slug = Some(slugify(&metadata.category))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| slugify(UNCATEGORIZED));

    PathBuf::from(category_slug).join(format!("{}.md", page_slug(url.path())))
}

/// Last path segment without its page extension
///
/// `index` and empty segments defer to the parent segment.
fn page_slug(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let last = segments.last().copied().unwrap_or_default();
    let slug = last
        .strip_suffix(".html")
        .or_else(|| last.strip_suffix(".php"))
        .unwrap_or(last);

    if !slug.is_empty() && slug != "index" {
        return slug.to_string();
    }

    segments
        .len()
        .checked_sub(2)
        .map(|i| segments[i].to_string())
        .unwrap_or_else(|| "index".to_string())
}
