//! HTTP fetcher
//!
//! One client, one GET per URL, a fixed timeout, and a browser-like
//! User-Agent. Failures are classified but never retried; the crawl loop
//! logs them and moves on.

use crate::{MirrorError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fixed client signature sent with every request. Documentation sites
/// occasionally serve crawlers a stripped page, so this identifies as an
/// ordinary browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Per-request timeout
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for the whole crawl
pub fn build_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single page and returns its raw markup
///
/// Fails on timeout, connection errors, and non-success status codes. The
/// failure is non-fatal to the crawl: the caller records it and skips the
/// URL without retrying.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(MirrorError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify(url, e))
}

fn classify(url: &Url, error: reqwest::Error) -> MirrorError {
    if error.is_timeout() {
        MirrorError::Timeout {
            url: url.to_string(),
        }
    } else {
        MirrorError::Network {
            url: url.to_string(),
            source: error,
        }
    }
}
