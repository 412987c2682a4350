//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that ties the stages together:
//! - Seeding and draining the FIFO frontier of one `CrawlSession`
//! - Fetching pages and queueing same-host links
//! - Running the asset rewriter and the content extractor on each page
//! - Deciding which pages are written and emitting category index pages

use crate::assets::AssetRewriter;
use crate::config::Config;
use crate::content::{ContentExtractor, PageResult};
use crate::crawler::parser::extract_links;
use crate::crawler::session::CrawlSession;
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::output::{CrawlStatistics, SiteWriter};
use crate::page::ParsedPage;
use crate::state::PageOutcome;
use crate::url::{is_category_archive, is_pagination_path, normalize_seed};
use crate::DownloaderError;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

/// Progress is logged every this many visited pages
const PROGRESS_INTERVAL: u64 = 10;

/// Main crawler coordinator structure
pub struct Coordinator {
    client: Client,
    session: Option<CrawlSession>,
    rewriter: AssetRewriter,
    extractor: ContentExtractor,
    writer: SiteWriter,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a coordinator writing the site under `source_dir`
    ///
    /// # Arguments
    ///
    /// * `config` - User agent and asset directory settings
    /// * `source_dir` - Output root; overrides `config.output.source_dir`
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to crawl
    /// * `Err(DownloaderError)` - The HTTP client could not be built
    pub fn new(config: &Config, source_dir: impl Into<PathBuf>) -> Result<Self, DownloaderError> {
        let source_dir = source_dir.into();
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            rewriter: AssetRewriter::new(client.clone(), &source_dir, &config.output.asset_dir),
            client,
            session: None,
            extractor: ContentExtractor::new(),
            writer: SiteWriter::new(source_dir),
            stats: CrawlStatistics::default(),
        })
    }

    /// Session of the last crawl, `None` before the first one
    pub fn session(&self) -> Option<&CrawlSession> {
        self.session.as_ref()
    }

    /// Crawls every same-host page reachable from `seed`
    ///
    /// An unusable seed is logged and yields empty statistics without any
    /// request being made. Each call starts from an empty frontier, visited
    /// set and asset cache.
    pub async fn crawl(&mut self, seed: &str) -> CrawlStatistics {
        self.stats = CrawlStatistics::default();
        self.rewriter.reset();

        let Some(mut session) = start_session(seed) else {
            self.session = None;
            return self.stats.clone();
        };

        tracing::info!("Starting crawl of {}", session.origin().host());
        let start_time = std::time::Instant::now();

        while let Some(url) = session.next_url() {
            let outcome = self.process_url(&mut session, url).await;
            self.stats.record(outcome);

            if self.stats.pages_visited % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier",
                    self.stats.pages_visited,
                    session.frontier_size()
                );
            }
        }

        tracing::info!("Frontier is empty, crawl complete");
        self.generate_category_pages(&mut session);

        let assets = self.rewriter.stats();
        self.stats.assets_downloaded = assets.downloaded;
        self.stats.assets_failed = assets.failed;

        tracing::info!(
            "Crawl completed: {} pages visited in {:?}",
            self.stats.pages_visited,
            start_time.elapsed()
        );

        self.session = Some(session);
        self.stats.clone()
    }

    /// Processes a single URL
    ///
    /// This method:
    /// 1. Fetches the page
    /// 2. Queues every same-host link not yet visited
    /// 3. Rewrites images and internal links, then extracts the content
    /// 4. Records category links
    /// 5. Writes the page unless it is a pagination or category archive page
    async fn process_url(&mut self, session: &mut CrawlSession, url: Url) -> PageOutcome {
        tracing::info!("Crawling: {}", url);

        let body = match fetch_page(&self.client, url.as_str()).await {
            FetchResult::Success {
                final_url, body, ..
            } => {
                if final_url != url.as_str() {
                    tracing::debug!("Redirected: {} -> {}", url, final_url);
                }
                body
            }
            FetchResult::ContentMismatch { content_type } => {
                tracing::info!("Skipping non-HTML content: {} ({})", url, content_type);
                return PageOutcome::NotHtml;
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("HTTP {} for {}", status_code, url);
                return PageOutcome::HttpError;
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Request failed for {}: {}", url, error);
                return PageOutcome::TransportError;
            }
        };

        let mut page = ParsedPage::parse(url.clone(), &body);

        let queued = extract_links(&page)
            .into_iter()
            .filter(|link| session.enqueue(link.clone()))
            .count();
        tracing::debug!("Queued {} links from {}", queued, url);

        self.rewriter.process(&mut page, &url).await;
        let result = self.extractor.process(&mut page, url.as_str());
        drop(page);

        record_categories(session, &result);

        if is_pagination_path(url.path()) {
            tracing::info!("Skipping save for pagination page: {}", url);
            return PageOutcome::SkippedPagination;
        }

        if is_category_archive(url.path()) {
            tracing::info!("Skipping save for category archive page: {}", url);
            return PageOutcome::SkippedArchive;
        }

        match self.writer.save_page(&result, &url) {
            Ok(path) => {
                tracing::info!("Saved: {}", path.display());
                PageOutcome::Saved
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", url, e);
                PageOutcome::WriteFailed
            }
        }
    }

    /// Writes one `{slug}.md` index page per collected category
    fn generate_category_pages(&mut self, session: &mut CrawlSession) {
        let categories = session.take_categories();
        tracing::info!("Generating {} category index pages...", categories.len());

        for (url, name) in categories.iter() {
            match self.writer.write_category_page(name) {
                Ok(Some(path)) => {
                    tracing::info!("Generated category index: {}", path.display());
                    self.stats.category_pages += 1;
                }
                Ok(None) => {
                    tracing::debug!("Category {:?} ({}) has no usable slug", name, url);
                }
                Err(e) => {
                    tracing::error!("Failed to write category page for {:?}: {}", name, e);
                    self.stats.category_pages_failed += 1;
                }
            }
        }
    }
}

/// Validates the seed and opens a session for it
fn start_session(seed: &str) -> Option<CrawlSession> {
    let seed_url = match normalize_seed(seed) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!("Invalid start URL {}: {}", seed, e);
            return None;
        }
    };

    let session = CrawlSession::new(seed_url);
    if session.is_none() {
        tracing::error!("Invalid start URL {}: no host", seed);
    }
    session
}

/// Merges category links carrying an href into the session, last name wins
fn record_categories(session: &mut CrawlSession, result: &PageResult) {
    for link in &result.category_data {
        if let Some(href) = link.url.as_deref().filter(|href| !href.is_empty()) {
            session.categories_mut().insert(href, &link.name);
        }
    }
}

/// Runs a complete crawl with a fresh coordinator
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `source_dir` - Output root
/// * `seed` - Start URL
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl finished; individual page failures are counted, not returned
/// * `Err(DownloaderError)` - The coordinator could not be set up
pub async fn run_crawl(
    config: &Config,
    source_dir: impl Into<PathBuf>,
    seed: &str,
) -> Result<CrawlStatistics, DownloaderError> {
    let mut coordinator = Coordinator::new(config, source_dir)?;
    Ok(coordinator.crawl(seed).await)
}
