//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of pages and assets
//! - Link extraction for the frontier
//! - Per-crawl state (frontier, visited set, categories)
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod parser;
mod session;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{
    build_http_client, fetch_asset, fetch_page, is_html_content_type, FetchFailure, FetchResult,
};
pub use parser::extract_links;
pub use session::{CategoryAccumulator, CrawlSession};

use crate::config::Config;
use crate::output::CrawlStatistics;
use crate::DownloaderError;
use std::path::PathBuf;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch the seed and every same-host page it leads to
/// 3. Mirror images and rewrite internal links
/// 4. Write each page as Markdown with front matter
/// 5. Generate category index pages
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `source_dir` - Output root
/// * `seed` - Start URL
///
/// # Returns
///
/// * `Ok(CrawlStatistics)` - Crawl finished
/// * `Err(DownloaderError)` - Crawl could not be started
pub async fn crawl(
    config: &Config,
    source_dir: impl Into<PathBuf>,
    seed: &str,
) -> Result<CrawlStatistics, DownloaderError> {
    run_crawl(config, source_dir, seed).await
}
