//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured browser identity
//! - GET requests for artist index and lyrics pages
//! - Error classification into ordinary (non-exceptional) outcomes

use crate::config::SourceConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of a fetch operation
///
/// Non-200 answers and network failures are ordinary outcomes here; the
/// caller decides whether they skip a song or an artist.
#[derive(Debug)]
pub enum FetchResult {
    /// Page answered 200 OK
    Success {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// Page answered with a non-200 status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Request never produced a response (connection refused, timeout, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short human-readable reason for a failed fetch
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }
}

/// Builds an HTTP client with the configured identity and timeout
///
/// # Example
///
/// ```no_run
/// use lyric_harvest::config::SourceConfig;
/// use lyric_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&SourceConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &SourceConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.timeout_secs.min(10)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Outcome Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | HTTP 200 | Success |
/// | Any other status | HttpError |
/// | Timeout | NetworkError ("Request timeout") |
/// | Connection refused | NetworkError ("Connection refused") |
/// | Body read failure | NetworkError |
///
/// There is no retry; re-running the crawl is the retry mechanism.
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    tracing::debug!("GET {}", url);

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if status != StatusCode::OK {
                tracing::debug!("{} answered {}", url, status);
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success { final_url, body },
                Err(e) => FetchResult::NetworkError {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}
