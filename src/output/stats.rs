//! Crawl statistics
//!
//! Counters accumulated by the coordinator during one crawl and the
//! console summary printed by the binary when it finishes.

use crate::state::PageOutcome;
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of distinct URLs dequeued and processed
    pub pages_visited: u64,

    /// Count of pages by outcome
    pub pages_by_outcome: HashMap<PageOutcome, u64>,

    /// Images downloaded and written
    pub assets_downloaded: u64,

    /// Image downloads or writes that failed
    pub assets_failed: u64,

    /// Synthetic category index pages written
    pub category_pages: u64,

    /// Category index pages that could not be written
    pub category_pages_failed: u64,
}

impl CrawlStatistics {
    /// Records the outcome of one visited URL
    pub fn record(&mut self, outcome: PageOutcome) {
        self.pages_visited += 1;
        *self.pages_by_outcome.entry(outcome).or_insert(0) += 1;
    }

    pub fn count(&self, outcome: PageOutcome) -> u64 {
        self.pages_by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    pub fn pages_saved(&self) -> u64 {
        self.count(PageOutcome::Saved)
    }

    /// Pages that ended in an error outcome
    pub fn pages_failed(&self) -> u64 {
        PageOutcome::all()
            .iter()
            .filter(|outcome| outcome.is_error())
            .map(|outcome| self.count(*outcome))
            .sum()
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Pages saved: {}", stats.pages_saved());
    println!("  Category pages generated: {}", stats.category_pages);
    if stats.category_pages_failed > 0 {
        println!("  Category pages failed: {}", stats.category_pages_failed);
    }
    println!("  Assets downloaded: {}", stats.assets_downloaded);
    println!("  Asset failures: {}", stats.assets_failed);
    println!();

    println!("Pages by Outcome:");
    for outcome in PageOutcome::all() {
        let count = stats.count(outcome);
        if count == 0 {
            continue;
        }
        let percentage = if stats.pages_visited > 0 {
            (count as f64 / stats.pages_visited as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", outcome, count, percentage);
    }
    println!();

    let failed = stats.pages_failed();
    if failed > 0 {
        println!("Errors: {} pages could not be fetched or written", failed);
        println!();
    }
}
