use crate::UrlError;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static PAGE_EXTENSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(html|php|jsp|asp|aspx)$").expect("valid page extension regex")
});

static PAGINATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/page/\d+/?$").expect("valid pagination regex"));

/// Normalizes the seed URL a crawl starts from
///
/// # Normalization Steps
///
/// 1. Strip trailing slashes
/// 2. Parse the URL; reject if malformed
/// 3. Require an HTTP or HTTPS scheme
/// 4. Require a host
///
/// # Examples
///
/// ```
/// use site_downloader::url::normalize_seed;
///
/// let url = normalize_seed("https://example.com/blog/").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/blog");
/// ```
pub fn normalize_seed(seed: &str) -> Result<Url, UrlError> {
    let trimmed = seed.trim().trim_end_matches('/');

    let url = Url::parse(trimmed).map_err(|e| UrlError::Parse(format!("{}: {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost(seed.to_string())),
    }
}

/// Returns the URL with its fragment removed
pub fn strip_fragment(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}

/// Strips a trailing page extension (`.html`, `.php`, `.jsp`, `.asp`, `.aspx`)
///
/// ```
/// use site_downloader::url::strip_page_extension;
///
/// assert_eq!(strip_page_extension("/about.html"), "/about");
/// assert_eq!(strip_page_extension("/Index.ASPX"), "/Index");
/// assert_eq!(strip_page_extension("/photo.jpg"), "/photo.jpg");
/// ```
pub fn strip_page_extension(path: &str) -> String {
    PAGE_EXTENSION_RE.replace(path, "").into_owned()
}

/// True for paginated listing paths such as `/page/3/`
pub fn is_pagination_path(path: &str) -> bool {
    PAGINATION_RE.is_match(path)
}

/// True for paths under a `/category/` archive
pub fn is_category_archive(path: &str) -> bool {
    path.contains("/category/")
}
