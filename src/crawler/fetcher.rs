//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the identifying user agent
//! - GET requests for pages, gated on an HTML Content-Type
//! - GET requests for binary assets
//!
//! Redirects are followed by the client. Nothing is retried.

use crate::config::UserAgentConfig;
use reqwest::{redirect::Policy, Client};
use thiserror::Error;

/// Result of a page fetch
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched an HTML page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Content-Type header value
        content_type: String,
        /// Page body content
        body: String,
    },

    /// Page is not HTML (Content-Type mismatch)
    ContentMismatch {
        /// The actual Content-Type received, empty if the header was missing
        content_type: String,
    },

    /// Server answered with status >= 400
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, DNS failure, body read failure)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Why an asset download produced no bytes
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use site_downloader::config::UserAgentConfig;
/// use site_downloader::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// True if a Content-Type header value declares an HTML document
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

/// Fetches a page
///
/// | Condition | Result |
/// |-----------|--------|
/// | Transport failure | `NetworkError` |
/// | Status >= 400 | `HttpError` |
/// | Content-Type without `text/html` | `ContentMismatch` |
/// | Otherwise | `Success` with the body |
pub async fn fetch_page(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: e.to_string(),
            }
        }
    };

    let status = response.status();
    if status.as_u16() >= 400 {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_html_content_type(&content_type) {
        return FetchResult::ContentMismatch { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            content_type,
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}

/// Downloads an asset's raw bytes
pub async fn fetch_asset(client: &Client, url: &str) -> Result<Vec<u8>, FetchFailure> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(FetchFailure::Status(status));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    Ok(bytes.to_vec())
}
