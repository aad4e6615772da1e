//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, USER_AGENT};

/// Creates the HTTP client shared by both data sources.
///
/// # Features
/// * Bounded timeout per request; a timed-out fetch is a failed fetch
/// * Small connection pool, both sources are polled sequentially
/// * Browser User-Agent, the stats site rejects default client agents
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}
