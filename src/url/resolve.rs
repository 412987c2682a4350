use url::Url;

/// Reference schemes that never point at a page or asset we can mirror
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Resolves an `href`/`src` reference against the URL of the page it appears on
///
/// # Resolution Rules
///
/// | Reference | Result |
/// |-----------|--------|
/// | starts with `http` | returned unchanged |
/// | `//host/path` | prefixed with `https:` |
/// | `/path` | base scheme + host (+ port) + path |
/// | anything else | base scheme + host (+ port) + base directory + reference |
///
/// The base directory is the base path up to and including its last `/`.
/// Returns `None` for empty references and for `javascript:`, `mailto:`,
/// `tel:` and `data:` references.
///
/// # Examples
///
/// ```
/// use site_downloader::url::resolve_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/blog/post.html").unwrap();
/// assert_eq!(resolve_url("/img/a.png", &base).as_deref(), Some("https://example.com/img/a.png"));
/// assert_eq!(resolve_url("b.png", &base).as_deref(), Some("https://example.com/blog/b.png"));
/// assert_eq!(resolve_url("//cdn.net/c.png", &base).as_deref(), Some("https://cdn.net/c.png"));
/// ```
pub fn resolve_url(reference: &str, base: &Url) -> Option<String> {
    let reference = reference.trim();

    if reference.is_empty() {
        return None;
    }

    let lowered = reference.to_ascii_lowercase();
    if SKIPPED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return None;
    }

    if reference.starts_with("http") {
        return Some(reference.to_string());
    }

    if reference.starts_with("//") {
        return Some(format!("https:{}", reference));
    }

    let origin = origin_prefix(base)?;

    if reference.starts_with('/') {
        return Some(format!("{}{}", origin, reference));
    }

    Some(format!("{}{}{}", origin, base_directory(base.path()), reference))
}

/// `scheme://host[:port]` of the base URL
fn origin_prefix(base: &Url) -> Option<String> {
    let host = base.host_str()?;
    Some(match base.port() {
        Some(port) => format!("{}://{}:{}", base.scheme(), host, port),
        None => format!("{}://{}", base.scheme(), host),
    })
}

/// The portion of a path up to and including its last `/`
fn base_directory(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..=idx],
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post.html").unwrap()
    }

    #[test]
    fn test_absolute_reference_unchanged() {
        assert_eq!(
            resolve_url("https://other.com/x", &base()).as_deref(),
            Some("https://other.com/x")
        );
        assert_eq!(
            resolve_url("http://example.com/y", &base()).as_deref(),
            Some("http://example.com/y")
        );
    }

    #[test]
    fn test_protocol_relative_reference() {
        assert_eq!(
            resolve_url("//cdn.example.com/a.png", &base()).as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn test_root_relative_reference() {
        assert_eq!(
            resolve_url("/about.html", &base()).as_deref(),
            Some("https://example.com/about.html")
        );
    }

    #[test]
    fn test_directory_relative_reference() {
        assert_eq!(
            resolve_url("images/pic.jpg", &base()).as_deref(),
            Some("https://example.com/blog/images/pic.jpg")
        );
    }

    #[test]
    fn test_relative_reference_against_root() {
        let base = Url::parse("https://example.com").unwrap();
        assert_eq!(
            resolve_url("pic.jpg", &base).as_deref(),
            Some("https://example.com/pic.jpg")
        );
    }

    #[test]
    fn test_port_is_preserved() {
        let base = Url::parse("http://127.0.0.1:8080/docs/").unwrap();
        assert_eq!(
            resolve_url("/img/a.png", &base).as_deref(),
            Some("http://127.0.0.1:8080/img/a.png")
        );
        assert_eq!(
            resolve_url("a.png", &base).as_deref(),
            Some("http://127.0.0.1:8080/docs/a.png")
        );
    }

    #[test]
    fn test_skipped_schemes() {
        assert_eq!(resolve_url("mailto:me@example.com", &base()), None);
        assert_eq!(resolve_url("javascript:void(0)", &base()), None);
        assert_eq!(resolve_url("tel:+1234", &base()), None);
        assert_eq!(resolve_url("data:image/png;base64,AAAA", &base()), None);
        assert_eq!(resolve_url("   ", &base()), None);
    }
}
