//! HTTP client creation and configuration utilities

use reqwest::Client;
use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates the shared HTTP client used by every ranking provider.
///
/// One client is built per aggregation and cloned into each fetcher so all
/// providers share the connection pool.
///
/// # Arguments
/// * `timeout_seconds` - Per-request timeout; strategy timeouts sit on top of it
///
/// # Returns
/// * `Result<Client, reqwest::Error>` - A configured reqwest HTTP client or error
///
/// # Features
/// * Browser-like User-Agent and Accept-Language on every request
/// * Connection pooling with centralized pool size configuration
/// * Retry logic for transient failures lives in `fetch_utils`
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(crate::constants::USER_AGENT)
        .default_headers(headers)
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing with a short timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(5).expect("Failed to create test HTTP client")
}
