//! Content extraction module
//!
//! This module turns a rewritten page into what gets written to disk:
//! - Metadata (title, description, categories, tags) with fixed fallbacks
//! - Removal of page chrome such as navigation, sidebars and comments
//! - Selection of the main content container
//! - HTML → Markdown conversion followed by WordPress cleanup rewrites

mod convert;
mod extractor;
mod selectors;
mod types;

pub use convert::{clean_markdown, MarkdownConverter};
pub use extractor::ContentExtractor;
pub use types::{CategoryLink, PageMetadata, PageResult, UNCATEGORIZED, UNTITLED};
