//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with the configured user agent, timeout and redirect cap
//! - GET requests with an HTML-preferring Accept header
//! - Classifying responses as HTML or non-HTML
//! - Turning transport failures into data instead of errors

use crate::config::FetcherConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Accept header sent with every fetch
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml";

/// Result of a fetch operation
///
/// Fetching never fails with an `Err`; transport problems are reported as
/// [`FetchOutcome::Failed`] so a crawl can record them and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response with an HTML content type
    Html {
        /// HTTP status code
        status: u16,
        /// Content-Type header value
        content_type: String,
        /// Page body content
        body: String,
    },

    /// Response whose content type is not HTML; the body is never read
    NonHtml {
        /// HTTP status code
        status: u16,
        /// Content-Type header value (empty when missing)
        content_type: String,
    },

    /// No usable response (timeout, DNS failure, refused connection, redirect cap)
    Failed {
        /// Human-readable reason
        error: String,
    },
}

impl FetchOutcome {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }
}

/// A single bounded page fetch
///
/// The crawl and scrape operations only depend on this capability, so tests
/// can substitute an in-memory implementation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches one URL
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use linkscout::config::FetcherConfig;
/// use linkscout::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));

    Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_millis(config.timeout_ms))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    config: FetcherConfig,
}

impl HttpFetcher {
    /// Creates a fetcher from explicit configuration
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config)?;
        Ok(Self { client, config })
    }

    /// Maps a transport error to the reason recorded in reports
    fn describe_error(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("Request timed out after {}ms", self.config.timeout_ms)
        } else if error.is_redirect() {
            format!("Too many redirects (limit {})", self.config.max_redirects)
        } else if error.is_connect() {
            format!("Connection failed: {}", error)
        } else {
            error.to_string()
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// Fetches a URL with a single GET
    ///
    /// # Request Flow
    ///
    /// 1. Send GET (redirects followed up to the configured cap)
    /// 2. Record the status code; it is never treated as a failure by itself
    /// 3. If the Content-Type does not contain `text/html` → NonHtml
    /// 4. Otherwise read the body → Html
    ///
    /// | Condition | Outcome |
    /// |-----------|---------|
    /// | Timeout (connect or body) | Failed |
    /// | Redirect chain > cap | Failed |
    /// | DNS / connection refused / TLS | Failed |
    /// | Non-HTML Content-Type | NonHtml |
    /// | HTML Content-Type | Html |
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                let reason = self.describe_error(&e);
                tracing::debug!("Fetch of {} failed: {}", url, reason);
                return FetchOutcome::failed(reason);
            }
        };

        let status = response.status().as_u16();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.to_ascii_lowercase().contains("text/html") {
            tracing::debug!("Skipping {} with content type '{}'", url, content_type);
            return FetchOutcome::NonHtml {
                status,
                content_type,
            };
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Html {
                status,
                content_type,
                body,
            },
            Err(e) => FetchOutcome::failed(self.describe_error(&e)),
        }
    }
}
