use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_downloader::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Scheme and host of the seed URL; the same-origin boundary of a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseOrigin {
    scheme: String,
    host: String,
}

impl BaseOrigin {
    /// Derives the origin from a seed URL, `None` if it has no host
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = extract_domain(url).filter(|h| !h.is_empty())?;
        Some(Self {
            scheme: url.scheme().to_string(),
            host,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// True if the URL's host equals the origin host
    ///
    /// Scheme and port are not compared: `http://` links on an `https://` site
    /// still belong to the site.
    pub fn contains(&self, url: &Url) -> bool {
        extract_domain(url).as_deref() == Some(self.host.as_str())
    }
}
