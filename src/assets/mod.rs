//! Asset mirroring and internal link rewriting
//!
//! This module mutates a parsed page before content extraction:
//! - Downloads each distinct image once per crawl and points `src` at the copy
//! - Rewrites same-host anchors to root-relative, extension-less paths

mod cache;
mod rewriter;

pub use cache::{asset_filename, AssetCache, AssetKind};
pub use rewriter::{rewrite_link, rewrite_links, AssetRewriter, AssetStats};
