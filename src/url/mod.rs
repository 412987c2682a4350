//! URL handling module for Site-Downloader
//!
//! This module provides reference resolution, seed normalization, the
//! same-origin boundary and the path predicates the crawler uses to decide
//! what gets written.

mod domain;
mod normalize;
mod resolve;

// Re-export main functions
pub use domain::{extract_domain, BaseOrigin};
pub use normalize::{
    is_category_archive, is_pagination_path, normalize_seed, strip_fragment,
    strip_page_extension,
};
pub use resolve::resolve_url;
