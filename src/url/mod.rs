//! URL handling module for Linkscout
//!
//! This module provides URL normalization for deduplication, the exact-host
//! same-domain check, and the http(s) validation callers run before handing a
//! URL to the crawler.

mod domain;
mod normalize;

use crate::UrlError;
use url::Url;

// Re-export main functions
pub use domain::is_same_domain;
pub use normalize::normalize_url;

/// Validates that a string is an absolute `http` or `https` URL with a host
///
/// This is the caller-level precondition for both the scrape and crawl
/// operations.
///
/// # Examples
///
/// ```
/// use linkscout::url::validate_http_url;
///
/// assert!(validate_http_url("https://example.com").is_ok());
/// assert!(validate_http_url("ftp://example.com").is_err());
/// ```
pub fn validate_http_url(raw: &str) -> Result<Url, UrlError> {
    let url = Url::parse(raw.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}
