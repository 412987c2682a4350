//! Site-Downloader main entry point
//!
//! This is the command-line interface that mirrors a website into a
//! Markdown content tree.

use anyhow::{Context, Result};
use clap::Parser;
use site_downloader::config::{load_config, Config};
use site_downloader::crawler::crawl;
use site_downloader::output::{clean_directory, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Downloader: mirror a website as Markdown
///
/// Crawls every page on the target's host, downloads its images, rewrites
/// internal links and writes each page as Markdown with front matter,
/// grouped by category.
#[derive(Parser, Debug)]
#[command(name = "site-download")]
#[command(version = "1.0.0")]
#[command(about = "Download a site and convert it to Markdown", long_about = None)]
struct Cli {
    /// The target URL to spider; `https://` is assumed when no scheme is given
    #[arg(value_name = "URL")]
    url: String,

    /// Output directory [default: output.source-dir from the config, else "content"]
    #[arg(short, long, value_name = "DIR", env = "SOURCE_DIR")]
    output: Option<PathBuf>,

    /// Do not empty the output directory before starting
    #[arg(long)]
    no_clean: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded: user agent {}", config.user_agent.header_value());
            config
        }
        None => Config::default(),
    };

    let url = with_default_scheme(&cli.url);
    let source_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.source_dir));

    println!("Target URL: {}", url);
    println!("Source Dir: {}", source_dir.display());

    if !cli.no_clean {
        println!("Cleaning source directory...");
        let removed = clean_directory(&source_dir)
            .with_context(|| format!("Failed to clean {}", source_dir.display()))?;
        tracing::debug!("Removed {} entries from {}", removed, source_dir.display());
    }

    println!("Starting crawl...");
    let stats = crawl(&config, source_dir, &url)
        .await
        .context("Crawl could not be started")?;

    println!();
    print_statistics(&stats);
    println!("Done.");

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_downloader=info,warn"),
            1 => EnvFilter::new("site_downloader=debug,info"),
            2 => EnvFilter::new("site_downloader=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prefixes `https://` unless the URL already names http or https
fn with_default_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
