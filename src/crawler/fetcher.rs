//! HTTP fetcher
//!
//! This module builds the shared HTTP client and performs single-page
//! fetches. Every request is bounded by the configured timeout; a timeout
//! or transport error is classified, never propagated as a fatal error,
//! because the caller treats any failed fetch as a silently-dropped URL.

use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching one URL
#[derive(Debug)]
pub enum FetchOutcome {
    /// Redirect/success status (200-399) with the response body
    Success {
        /// HTTP status code
        status: u16,
        /// Response body text
        body: String,
    },

    /// A response arrived but its status is outside 200-399
    HttpError {
        /// HTTP status code
        status: u16,
    },

    /// The request failed before a usable response (timeout, connection error)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by page fetches and site probes
///
/// The client-level timeout is the per-request timeout: when it fires the
/// single request is aborted and surfaces as a `NetworkError`.
pub fn build_http_client(user_agent: &str, timeout_ms: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_millis(timeout_ms))
        .connect_timeout(Duration::from_millis(timeout_ms.min(10_000)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and classifies the outcome
///
/// Redirects are followed by the client; the status checked here is the
/// final one. Statuses in 200-399 count as success, everything else is a
/// recoverable failure for the caller to absorb.
pub async fn fetch_page(client: &Client, url: &Url) -> FetchOutcome {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            if !(200..400).contains(&status) {
                return FetchOutcome::HttpError { status };
            }
            match response.text().await {
                Ok(body) => FetchOutcome::Success { status, body },
                Err(e) => FetchOutcome::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            FetchOutcome::NetworkError { error }
        }
    }
}
