//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small site and drive the full crawl
//! cycle end-to-end, checking the Markdown tree written to a temp directory.

use site_downloader::assets::asset_filename;
use site_downloader::config::Config;
use site_downloader::crawler::Coordinator;
use site_downloader::state::PageOutcome;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        r#"<html><head><title>Home - My Site</title></head><body>
            <nav><a href="/nav-only">Nav</a></nav>
            <main>
                <h1>Welcome</h1>
                <p>Read the <a href="/post">latest post</a> or <a href="/about.html">about us</a>.</p>
                <img src="/img/logo.png" alt="Logo">
                <a href="/category/tech/" rel="category tag">Tech</a>
            </main>
        </body></html>"#,
    )
    .await;

    mount_page(&server, "/nav-only", "<html><body><p>Nav target</p></body></html>").await;

    mount_page(
        &server,
        "/post",
        r#"<html><head>
            <title>Ignored - My Site</title>
            <meta name="description" content="A post about things.">
        </head><body>
            <h1 class="entry-title">Post Title</h1>
            <div class="entry-content">
                <p>This is the <strong>content</strong>.</p>
                <img src="/img/logo.png" alt="Same logo">
                <img src="/img/logo.png" alt="Logo again">
                <p><a href="/about.html#team">Team</a></p>
                <p>Posted in <a href="/category/tech/" rel="category tag">Tech</a></p>
                <a href="/tag/rust/" rel="tag">Rust</a>
            </div>
            <div class="sidebar">Sidebar</div>
        </body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/about.html",
        "<html><head><title>About » My Site</title></head><body><article><p>About text</p></article></body></html>",
    )
    .await;

    mount_page(
        &server,
        "/category/tech/",
        r#"<html><body><article><a href="/post">Post Title</a></article></body></html>"#,
    )
    .await;

    mount_page(&server, "/tag/rust/", "<html><body><p>Tagged</p></body></html>").await;

    Mock::given(method("GET"))
        .and(path("/img/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES.to_vec(), "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();
    let stats = coordinator.crawl(&base).await;

    // Site root
    let index = read(dir.path(), "index.md");
    assert!(index.starts_with("---\ntitle: \"Welcome\"\n"));
    assert!(!index.contains("category:"));
    assert!(index.contains("(/post)"));
    assert!(index.contains("(/about)"));
    assert!(!index.contains("Nav"));

    // Regular post
    let post = read(dir.path(), "tech/post.md");
    assert!(post.contains("title: \"Post Title\""));
    assert!(post.contains("description: \"A post about things.\""));
    assert!(post.contains(&format!("original_url: \"{}/post\"", base)));
    assert!(post.contains("category: \"Tech\""));
    assert!(post.contains("tags:\n  - \"Rust\"\n"));
    assert!(post.contains("This is the **content**."));
    assert!(post.contains("[Team](/about)"));
    assert!(post.contains("Posted in [Tech](/tech.html)"));
    assert!(!post.contains("Sidebar"));

    let image_name = asset_filename(&format!("{}/img/logo.png", base));
    assert!(post.contains(&format!("/assets/images/{}", image_name)));
    assert_eq!(
        fs::read(dir.path().join("assets/images").join(&image_name)).unwrap(),
        PNG_BYTES
    );

    // Extension stripped from the slug, no category link on the page
    let about = read(dir.path(), "uncategorized/about.md");
    assert!(about.contains("title: \"About\""));
    assert!(about.contains("About text"));

    // Archive pages are not written; a category index replaces them
    assert!(!dir.path().join("category").exists());
    assert!(!dir.path().join("uncategorized/tech.md").exists());
    assert_eq!(
        read(dir.path(), "tech.md"),
        "---\ntitle: \"Tech\"\ntype: \"category\"\ntemplate: \"category\"\n---\n"
    );

    assert_eq!(stats.pages_visited, 6);
    assert_eq!(stats.pages_saved(), 5);
    assert_eq!(stats.count(PageOutcome::SkippedArchive), 1);
    assert_eq!(stats.assets_downloaded, 1);
    assert_eq!(stats.assets_failed, 0);
    assert_eq!(stats.category_pages, 1);
}

#[tokio::test]
async fn test_non_html_seed_writes_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(br#"<a href="/hidden">x</a>"#.to_vec(), "image/jpeg"),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/hidden"))
        .respond_with(html("<html><body>hidden</body></html>"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();
    let stats = coordinator.crawl(&server.uri()).await;

    assert_eq!(stats.pages_visited, 1);
    assert_eq!(stats.count(PageOutcome::NotHtml), 1);
    assert_eq!(stats.pages_saved(), 0);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_http_errors_are_skipped() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><main><a href="/missing">Missing</a><a href="/broken">Broken</a></main></body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();
    let stats = coordinator.crawl(&server.uri()).await;

    assert_eq!(stats.pages_visited, 3);
    assert_eq!(stats.count(PageOutcome::HttpError), 2);
    assert_eq!(stats.pages_saved(), 1);
    assert!(dir.path().join("index.md").exists());
    assert!(!dir.path().join("uncategorized").exists());
}

#[tokio::test]
async fn test_pagination_and_archive_pages_followed_not_saved() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><main>
            <a href="/page/2/">Older</a>
            <a href="/category/news/">News</a>
        </main></body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/page/2/",
        r#"<html><body><main><a href="/older-post">Older post</a></main></body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/category/news/",
        r#"<html><body><main><a href="/news-item">News item</a></main></body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/older-post",
        "<html><body><article><p>Old</p></article></body></html>",
    )
    .await;

    mount_page(
        &server,
        "/news-item",
        r#"<html><body><article><p>Fresh</p>
            <a href="/category/news/" rel="category tag">News</a>
        </article></body></html>"#,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();
    let stats = coordinator.crawl(&server.uri()).await;

    assert_eq!(stats.count(PageOutcome::SkippedPagination), 1);
    assert_eq!(stats.count(PageOutcome::SkippedArchive), 1);
    assert_eq!(stats.pages_saved(), 3);

    assert!(dir.path().join("index.md").exists());
    assert!(dir.path().join("uncategorized/older-post.md").exists());
    assert!(dir.path().join("news/news-item.md").exists());
    assert!(dir.path().join("news.md").exists());
    assert!(!dir.path().join("uncategorized/2.md").exists());
    assert!(!dir.path().join("uncategorized/news.md").exists());
}

#[tokio::test]
async fn test_external_links_not_fetched() {
    let server = MockServer::start().await;
    let external = MockServer::start().await;

    // Same port range, different host name
    let external_base = external.uri().replace("127.0.0.1", "localhost");

    Mock::given(method("GET"))
        .respond_with(html("<html><body>external</body></html>"))
        .expect(0)
        .mount(&external)
        .await;

    mount_page(
        &server,
        "/",
        &format!(
            r#"<html><body><main>
                <a href="{}/elsewhere">Elsewhere</a>
                <a href="/local">Local</a>
            </main></body></html>"#,
            external_base
        ),
    )
    .await;

    mount_page(&server, "/local", "<html><body><p>Local</p></body></html>").await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();
    let stats = coordinator.crawl(&server.uri()).await;

    assert_eq!(stats.pages_visited, 2);

    let session = coordinator.session().unwrap();
    let host = session.origin().host().to_string();
    for visited in session.visited() {
        let visited = url::Url::parse(visited).unwrap();
        assert_eq!(visited.host_str(), Some(host.as_str()));
    }

    // The external anchor is left as it was
    let index = read(dir.path(), "index.md");
    assert!(index.contains(&format!("({}/elsewhere)", external_base)));
}

#[tokio::test]
async fn test_category_pages_idempotent() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><main>
            <a href="/a">A</a>
            <a href="/b">B</a>
        </main></body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/a",
        r#"<html><body><article><p>A</p>
            <a href="/category/dev/" rel="category tag">Dev</a>
        </article></body></html>"#,
    )
    .await;

    mount_page(
        &server,
        "/b",
        r#"<html><body><article><p>B</p>
            <a href="/category/dev/" rel="category tag">Web Development</a>
            <a href="/category/misc/" rel="category tag">!!!</a>
        </article></body></html>"#,
    )
    .await;

    mount_page(&server, "/category/dev/", "<html><body><p>Dev</p></body></html>").await;
    mount_page(&server, "/category/misc/", "<html><body><p>Misc</p></body></html>").await;

    let dir = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(&Config::default(), dir.path()).unwrap();

    let first = coordinator.crawl(&server.uri()).await;
    let first_bytes = fs::read(dir.path().join("web-development.md")).unwrap();

    let second = coordinator.crawl(&server.uri()).await;
    let second_bytes = fs::read(dir.path().join("web-development.md")).unwrap();

    // Last name seen for /category/dev/ wins; the unsluggable name is skipped
    assert!(!dir.path().join("dev.md").exists());
    assert_eq!(first.category_pages, 1);
    assert_eq!(second.category_pages, 1);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(
        String::from_utf8(first_bytes).unwrap(),
        "---\ntitle: \"Web Development\"\ntype: \"category\"\ntemplate: \"category\"\n---\n"
    );

    // A second crawl starts from a fresh session
    assert_eq!(first.pages_visited, second.pages_visited);
}
