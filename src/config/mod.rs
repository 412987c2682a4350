//! Configuration module for Site-Downloader
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so a crawl can run without one.
//!
//! # Example
//!
//! ```no_run
//! use site_downloader::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("site-downloader.toml")).unwrap();
//! println!("User agent: {}", config.user_agent.header_value());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::load_config;
pub use validation::validate;
