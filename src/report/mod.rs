//! Report types produced by the crawl and scrape operations
//!
//! These are plain data: each one is created and discarded within a single
//! operation, and callers own any persistence. Field names serialize in
//! camelCase to match the HTTP API.

use serde::{Deserialize, Serialize};

/// Error text recorded for responses whose content type is not HTML
pub const SKIPPED_NON_HTML: &str = "Skipped non-HTML response";

/// Error text recorded when the URL handed to scrape cannot be normalized
pub const INVALID_URL: &str = "Invalid URL";

/// Per-URL result produced during a crawl
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    /// Normalized URL of the page
    pub url: String,

    /// HTTP status code, when a response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Outbound links: absolute, normalized, de-duplicated, at most 50
    #[serde(default)]
    pub links: Vec<String>,

    /// Why the page has no extracted content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PageReport {
    /// A report carrying only a URL and an error
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// A report for a response that was received but not parsed
    pub fn skipped(url: impl Into<String>, status: u16) -> Self {
        Self {
            url: url.into(),
            status: Some(status),
            error: Some(SKIPPED_NON_HTML.to_string()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of the single-page scrape operation
///
/// A superset of [`PageReport`] with Open Graph fields, headings and a text
/// preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
    #[serde(flatten)]
    pub page: PageReport,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,

    /// First substantial paragraph, at most 280 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,

    /// h1-h3 texts in document order, at most 20
    #[serde(default)]
    pub headings: Vec<String>,
}

impl From<PageReport> for ScrapeReport {
    fn from(page: PageReport) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// Result of a crawl: the effective limits plus pages in visitation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    pub start_url: String,
    pub max_pages: usize,
    pub max_depth: usize,
    pub same_domain: bool,
    pub pages: Vec<PageReport>,
}
