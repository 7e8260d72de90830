//! Generic HTTP fetching utilities with retry logic and error handling

use reqwest::Client;
use reqwest::header::{ACCEPT, REFERER};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Kind of document a strategy expects, used for the Accept header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
}

impl ContentKind {
    fn accept_header(self) -> &'static str {
        match self {
            ContentKind::Html => "text/html,application/xhtml+xml,*/*",
            ContentKind::Json => "application/json, */*",
        }
    }
}

/// Fetches a URL as text with retry logic and HTTP status mapping.
///
/// This function:
/// - Sends provider-specific Accept and Referer headers
/// - Retries timeouts, connection errors, 429 and 5xx with exponential backoff
/// - Respects Retry-After headers (capped) for rate limiting
/// - Maps non-success status codes to typed [`AppError`] variants
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `url` - URL to fetch
/// * `kind` - Expected document kind
/// * `referer` - Optional Referer header some providers require
///
/// # Returns
/// * `Result<String, AppError>` - Response body or error
#[instrument(skip(client))]
pub async fn fetch_text(
    client: &Client,
    url: &str,
    kind: ContentKind,
    referer: Option<&str>,
) -> Result<String, AppError> {
    info!("Fetching {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        let mut request = client.get(url).header(ACCEPT, kind.accept_header());
        if let Some(referer) = referer {
            request = request.header(REFERER, referer);
        }

        let error = match request.send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    break resp;
                }
                let status_code = status.as_u16();
                let reason = status.canonical_reason().unwrap_or("Unknown error");
                let error = status_error(status_code, reason, url);

                if error.is_retryable() && attempt < retry::MAX_RETRIES {
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(|secs| Duration::from_secs(secs.min(retry::MAX_RETRY_AFTER_SECONDS)));
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        retry::MAX_RETRIES
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }

                warn!("HTTP {} - {} (URL: {})", status_code, reason, url);
                error
            }
            Err(e) => {
                let error = request_error(e, url);
                if error.is_retryable() && attempt < retry::MAX_RETRIES {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        error,
                        url,
                        backoff,
                        attempt + 1,
                        retry::MAX_RETRIES
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, error);
                error
            }
        };
        return Err(error);
    };

    debug!("Response status: {}", response.status());

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Maps a non-success HTTP status to its error variant
fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

fn request_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Fetches a URL and parses the body as JSON into `T`.
///
/// Parse failures are classified the same way for every provider: an empty
/// body is "no data", a body that does not look like JSON is "malformed", and
/// valid JSON of the wrong shape is "unexpected structure".
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    referer: Option<&str>,
) -> Result<T, AppError> {
    let body = fetch_text(client, url, ContentKind::Json, referer).await?;
    parse_json_body(&body, url)
}

/// Fetches untyped JSON for providers whose payload shape drifts over time
pub async fn fetch_json_value(
    client: &Client,
    url: &str,
    referer: Option<&str>,
) -> Result<serde_json::Value, AppError> {
    fetch_json(client, url, referer).await
}

pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(body).map_err(|e| {
        let trimmed = body.trim_start();
        let preview: String = trimmed.chars().take(200).collect();
        debug!("Failed to parse JSON from {url}: {e}; body starts with: {preview}");

        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
