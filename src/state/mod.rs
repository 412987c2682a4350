//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageOutcome`: what happened to each dequeued URL (saved, skipped, failed)

mod page_outcome;

pub use page_outcome::PageOutcome;
