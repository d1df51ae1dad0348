// src/fetcher.rs

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 3;
const RETRYABLE_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Why a page could not be retrieved. Kept distinct from scan results so
/// callers never confuse "could not fetch" with "fetched, zero findings".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// A successfully retrieved page, carrying the URL after redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: Url,
    pub status: StatusCode,
    pub html: String,
}

/// Retrieves pages to scan.
///
/// Requests carry a browser-like User-Agent and a 10-second timeout.
/// Transient failures (429/500/502/503/504, timeouts, connection errors)
/// are retried up to three times with exponential backoff.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches the HTML behind `input`. Schemeless input defaults to
    /// `https://`.
    pub async fn fetch(&self, input: &str) -> Result<FetchedPage, FetchError> {
        let url = normalize_url(input)?;
        info!(url = %url, "Fetching page.");

        let mut attempt = 0;
        loop {
            match self.try_fetch(url.clone()).await {
                Ok(page) => {
                    info!(url = %page.final_url, status = %page.status, "Page fetched.");
                    return Ok(page);
                }
                Err(error) if attempt < MAX_RETRIES && is_transient(&error) => {
                    let delay = Duration::from_secs(1 << attempt);
                    attempt += 1;
                    warn!(
                        url = %url,
                        attempt,
                        error = %error,
                        "Transient fetch failure, retrying."
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn try_fetch(&self, url: Url) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let final_url = response.url().clone();
        let html = response.text().await?;
        Ok(FetchedPage {
            final_url,
            status,
            html,
        })
    }
}

fn normalize_url(input: &str) -> Result<Url, url::ParseError> {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("https://{trimmed}"))
    }
}

fn is_transient(error: &FetchError) -> bool {
    match error {
        FetchError::Status(status) => RETRYABLE_STATUSES.contains(&status.as_u16()),
        FetchError::Request(error) => error.is_timeout() || error.is_connect(),
        FetchError::InvalidUrl(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemeless_input_defaults_to_https() {
        let url = normalize_url("example.com/page").expect("normalize");
        assert_eq!(url.as_str(), "https://example.com/page");
    }

    #[test]
    fn explicit_schemes_are_preserved() {
        let url = normalize_url("http://example.com").expect("normalize");
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let url = normalize_url("  example.com  ").expect("normalize");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn transient_statuses_are_retryable() {
        for code in [429u16, 500, 502, 503, 504] {
            let status = StatusCode::from_u16(code).expect("status code");
            assert!(is_transient(&FetchError::Status(status)), "{code}");
        }
        let not_found = FetchError::Status(StatusCode::NOT_FOUND);
        assert!(!is_transient(&not_found));
    }
}
