//! Article page fetching.
//!
//! Retrieves raw HTML over HTTP with a browser-like identity (some sites
//! reject obvious bots) and a hard deadline. Failures are reported uniformly:
//! the caller sees "could not load the page", optionally with the HTTP
//! status, and never a transport-level error string.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::deadline::with_deadline;
use crate::{ReferentError, Result};

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request deadline in seconds.
    pub timeout: u64,
    /// User-Agent sent with the request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// Fetches the HTML body of an article page.
///
/// Follows redirects and relays the response status inside the uniform
/// failure message when the server answers with a non-2xx code.
///
/// # Errors
///
/// [`ReferentError::InvalidUrl`] for unparseable or non-http(s) URLs,
/// [`ReferentError::Timeout`] when the deadline expires, and
/// [`ReferentError::FetchFailed`] for everything else.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| ReferentError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
        return Err(ReferentError::InvalidUrl(format!(
            "неподдерживаемая схема: {}",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .build()
        .map_err(|_| ReferentError::FetchFailed { status: None })?;

    let request = async {
        let response = client
            .get(parsed_url)
            .header("User-Agent", &config.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "page request failed");
                ReferentError::FetchFailed { status: e.status().map(|s| s.as_u16()) }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReferentError::FetchFailed { status: Some(status.as_u16()) });
        }

        response
            .text()
            .await
            .map_err(|_| ReferentError::FetchFailed { status: None })
    };

    let body = with_deadline(Duration::from_secs(config.timeout), request)
        .await
        .flatten(config.timeout)?;

    tracing::debug!(url, bytes = body.len(), "fetched article page");
    Ok(body)
}
