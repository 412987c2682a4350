//! Output module for the generated site
//!
//! This module handles:
//! - Deriving the output path of each page from its URL and category
//! - Serializing front matter
//! - Writing pages and category index pages under the output root
//! - Recording and printing crawl statistics

mod front_matter;
mod paths;
pub mod stats;
mod writer;

pub use front_matter::{FrontMatter, FrontMatterValue};
pub use paths::{compute_output_path, slugify, INDEX_FILE};
pub use stats::{print_statistics, CrawlStatistics};
pub use writer::{clean_directory, SiteWriter};
