//! In-place rewriting of images and internal links
//!
//! For every `<img src>` the asset is downloaded once per crawl into
//! `{source_dir}/{asset_dir}/images/` and `src` is pointed at the local copy.
//! For every `<a href>` on the same host the page extension is dropped and the
//! href becomes root-relative, matching the paths of the generated site.

use crate::assets::cache::{asset_filename, AssetCache, AssetKind};
use crate::crawler::fetch_asset;
use crate::page::ParsedPage;
use crate::url::{extract_domain, resolve_url, strip_page_extension};
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::Selector;
use std::path::PathBuf;
use url::Url;

static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img[src]").expect("valid image selector"));

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

/// Download counters for one crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetStats {
    pub downloaded: u64,
    pub failed: u64,
    pub cache_hits: u64,
}

/// Mirrors images and rewrites internal links of parsed pages
pub struct AssetRewriter {
    client: Client,
    source_dir: PathBuf,
    asset_dir: String,
    cache: AssetCache,
    stats: AssetStats,
}

impl AssetRewriter {
    /// Creates a rewriter writing under `{source_dir}/{asset_dir}`
    pub fn new(client: Client, source_dir: impl Into<PathBuf>, asset_dir: &str) -> Self {
        Self {
            client,
            source_dir: source_dir.into(),
            asset_dir: asset_dir.trim_matches('/').to_string(),
            cache: AssetCache::default(),
            stats: AssetStats::default(),
        }
    }

    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    pub fn stats(&self) -> AssetStats {
        self.stats
    }

    /// Forgets every cached asset and zeroes the counters
    pub fn reset(&mut self) {
        self.cache = AssetCache::default();
        self.stats = AssetStats::default();
    }

    /// Rewrites images and internal links of `page` in place
    ///
    /// Images are resolved against `base_url`. Failed downloads leave the
    /// original `src` untouched.
    pub async fn process(&mut self, page: &mut ParsedPage, base_url: &Url) {
        self.rewrite_images(page, base_url).await;
        rewrite_links(page, base_url);
    }

    async fn rewrite_images(&mut self, page: &mut ParsedPage, base_url: &Url) {
        for id in page.select_ids(&IMAGE_SELECTOR) {
            let Some(src) = page.attr(id, "src") else {
                continue;
            };
            if src.is_empty() {
                continue;
            }

            if let Some(local_path) = self.download_asset(&src, base_url, AssetKind::Images).await {
                page.set_attr(id, "src", &local_path);
            }
        }
    }

    /// Returns the site-relative path of the local copy, downloading on a cache miss
    async fn download_asset(&mut self, src: &str, base_url: &Url, kind: AssetKind) -> Option<String> {
        let absolute_url = resolve_url(src, base_url)?;

        if let Some(local_path) = self.cache.get(&absolute_url) {
            self.stats.cache_hits += 1;
            return Some(local_path.to_string());
        }

        let bytes = match fetch_asset(&self.client, &absolute_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("Failed to download asset {}: {}", absolute_url, e);
                self.stats.failed += 1;
                return None;
            }
        };

        let filename = asset_filename(&absolute_url);
        let relative_path = format!("/{}/{}/{}", self.asset_dir, kind.dir_name(), filename);
        let full_path = self
            .source_dir
            .join(&self.asset_dir)
            .join(kind.dir_name())
            .join(&filename);

        let written = match full_path.parent() {
            Some(dir) => std::fs::create_dir_all(dir).and_then(|_| std::fs::write(&full_path, &bytes)),
            None => std::fs::write(&full_path, &bytes),
        };
        if let Err(e) = written {
            tracing::error!("Failed to write asset {}: {}", full_path.display(), e);
            self.stats.failed += 1;
            return None;
        }

        tracing::info!("Downloaded asset: {} -> {}", absolute_url, relative_path);
        self.stats.downloaded += 1;
        self.cache.insert(absolute_url, relative_path.clone());

        Some(relative_path)
    }
}

/// Rewrites every internal `<a href>` on the page to a root-relative path
pub fn rewrite_links(page: &mut ParsedPage, base_url: &Url) {
    for id in page.select_ids(&ANCHOR_SELECTOR) {
        let Some(href) = page.attr(id, "href") else {
            continue;
        };

        if let Some(new_href) = rewrite_link(&href, base_url) {
            if new_href != href {
                page.set_attr(id, "href", &new_href);
            }
        }
    }
}

/// Computes the rewritten form of one href
///
/// Returns `None` when the href must be left untouched: fragment-only
/// anchors, unresolvable references and links to other hosts.
///
/// ```
/// use site_downloader::assets::rewrite_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com").unwrap();
/// assert_eq!(rewrite_link("/about.html", &base).as_deref(), Some("/about"));
/// assert_eq!(rewrite_link("https://other.com/x", &base), None);
/// assert_eq!(rewrite_link("#section", &base), None);
/// ```
pub fn rewrite_link(href: &str, base_url: &Url) -> Option<String> {
    if href.starts_with('#') {
        return None;
    }

    let absolute_url = resolve_url(href, base_url)?;
    let parsed = Url::parse(&absolute_url).ok()?;

    if extract_domain(&parsed) != extract_domain(base_url) {
        return None;
    }

    Some(strip_page_extension(parsed.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAgentConfig;
    use crate::crawler::build_http_client;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    fn rewriter(dir: &TempDir) -> AssetRewriter {
        let client = build_http_client(&UserAgentConfig::default()).unwrap();
        AssetRewriter::new(client, dir.path(), "assets")
    }

    #[test]
    fn test_rewrite_internal_link_strips_extension() {
        assert_eq!(rewrite_link("/about.html", &base()).as_deref(), Some("/about"));
        assert_eq!(rewrite_link("/shop/cart.PHP", &base()).as_deref(), Some("/shop/cart"));
        assert_eq!(rewrite_link("/docs/", &base()).as_deref(), Some("/docs/"));
    }

    #[test]
    fn test_rewrite_absolute_internal_link() {
        assert_eq!(
            rewrite_link("https://example.com/post.html?x=1#c", &base()).as_deref(),
            Some("/post")
        );
    }

    #[test]
    fn test_rewrite_relative_link() {
        let base = Url::parse("https://example.com/blog/index.html").unwrap();
        assert_eq!(rewrite_link("next.html", &base).as_deref(), Some("/blog/next"));
    }

    #[test]
    fn test_external_and_fragment_links_untouched() {
        assert_eq!(rewrite_link("https://other.com/x", &base()), None);
        assert_eq!(rewrite_link("//cdn.other.com/x.html", &base()), None);
        assert_eq!(rewrite_link("#section", &base()), None);
        assert_eq!(rewrite_link("mailto:me@example.com", &base()), None);
    }

    #[test]
    fn test_rewrite_links_in_page() {
        let mut page = ParsedPage::parse(
            base(),
            r##"<html><body>
                <a href="/about.html">About</a>
                <a href="https://google.com">Google</a>
                <a href="#section">Jump</a>
            </body></html>"##,
        );

        rewrite_links(&mut page, &base());

        let hrefs: Vec<_> = page
            .select_ids(&ANCHOR_SELECTOR)
            .into_iter()
            .filter_map(|id| page.attr(id, "href"))
            .collect();
        assert_eq!(hrefs, vec!["/about", "https://google.com", "#section"]);
    }

    #[tokio::test]
    async fn test_process_downloads_images() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/img/test.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"image-content".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut rewriter = rewriter(&dir);
        let base_url = Url::parse(&server.uri()).unwrap();
        let mut page = ParsedPage::parse(base_url.clone(), r#"<html><body><img src="/img/test.jpg"></body></html>"#);

        rewriter.process(&mut page, &base_url).await;

        let absolute = format!("{}/img/test.jpg", server.uri());
        let filename = asset_filename(&absolute);
        let saved = dir.path().join("assets").join("images").join(&filename);
        assert_eq!(std::fs::read(&saved).unwrap(), b"image-content");

        let ids = page.select_ids(&IMAGE_SELECTOR);
        assert_eq!(
            page.attr(ids[0], "src").unwrap(),
            format!("/assets/images/{}", filename)
        );
        assert_eq!(rewriter.stats().downloaded, 1);
    }

    #[tokio::test]
    async fn test_asset_fetched_once_per_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logo.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 8]))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut rewriter = rewriter(&dir);
        let base_url = Url::parse(&server.uri()).unwrap();

        let mut srcs = Vec::new();
        for _ in 0..3 {
            let mut page = ParsedPage::parse(
                base_url.clone(),
                r#"<html><body><img src="/logo.png"><img src="/logo.png"></body></html>"#,
            );
            rewriter.process(&mut page, &base_url).await;
            for id in page.select_ids(&IMAGE_SELECTOR) {
                srcs.push(page.attr(id, "src").unwrap());
            }
        }

        assert_eq!(srcs.len(), 6);
        assert!(srcs.iter().all(|s| s == &srcs[0]));
        assert!(srcs[0].starts_with("/assets/images/"));
        assert_eq!(rewriter.stats().downloaded, 1);
        assert_eq!(rewriter.stats().cache_hits, 5);
        assert_eq!(rewriter.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_download_leaves_src() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.png"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut rewriter = rewriter(&dir);
        let base_url = Url::parse(&server.uri()).unwrap();
        let mut page = ParsedPage::parse(base_url.clone(), r#"<html><body><img src="/missing.png"></body></html>"#);

        rewriter.process(&mut page, &base_url).await;

        let ids = page.select_ids(&IMAGE_SELECTOR);
        assert_eq!(page.attr(ids[0], "src").as_deref(), Some("/missing.png"));
        assert!(rewriter.cache().is_empty());
        assert_eq!(rewriter.stats().failed, 1);
        assert!(!dir.path().join("assets").exists());
    }
}
