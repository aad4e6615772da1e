//! Generic HTTP fetching utilities with status and payload error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

fn status_error(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Fetches the body of `url` as text.
///
/// One attempt only: the poll loop is the retry. Timeouts and connection
/// failures map to their own error variants; non-success statuses map to
/// the HTTP status taxonomy.
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        error!("HTTP {} (URL: {})", status, url);
        return Err(status_error(status, url));
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) if e.is_timeout() => {
            error!("Timed out reading response body from URL {}", url);
            return Err(AppError::network_timeout(url));
        }
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", body.len());
    Ok(body)
}

/// Fetches `url` and parses the body as JSON into `T`.
#[instrument(skip(client))]
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let body = fetch_text(client, url).await?;

    match serde_json::from_str::<T>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            let preview: String = body.chars().take(200).collect();
            debug!("Response text (first 200 chars): {preview}");

            let trimmed = body.trim_start();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
