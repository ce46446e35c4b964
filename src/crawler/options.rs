//! Crawl limits and the inbound crawl request
//!
//! Limits are always clamped into range rather than rejected.

use crate::config::CrawlDefaults;
use serde::Deserialize;

/// Upper bound on pages visited in one crawl
pub const MAX_PAGES_LIMIT: usize = 20;

/// Upper bound on link depth followed from the start URL
pub const MAX_DEPTH_LIMIT: usize = 3;

/// Effective limits of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Maximum number of page reports, in [1, 20]
    pub max_pages: usize,

    /// Maximum link depth from the start URL, in [0, 3]
    pub max_depth: usize,

    /// Only follow links whose hostname equals the start URL's hostname
    pub same_domain: bool,
}

impl CrawlOptions {
    /// Builds options, clamping both limits into range
    pub fn new(max_pages: usize, max_depth: usize, same_domain: bool) -> Self {
        Self {
            max_pages,
            max_depth,
            same_domain,
        }
        .clamped()
    }

    /// Returns a copy with `max_pages` in [1, 20] and `max_depth` in [0, 3]
    pub fn clamped(self) -> Self {
        Self {
            max_pages: self.max_pages.clamp(1, MAX_PAGES_LIMIT),
            max_depth: self.max_depth.min(MAX_DEPTH_LIMIT),
            same_domain: self.same_domain,
        }
    }
}

impl Default for CrawlOptions {
    fn default() -> Self {
        CrawlDefaults::default().into()
    }
}

impl From<CrawlDefaults> for CrawlOptions {
    fn from(defaults: CrawlDefaults) -> Self {
        Self::new(defaults.default_max_pages, defaults.default_max_depth, true)
    }
}

/// Body of a crawl request as received from a caller
///
/// Numeric limits arrive as signed integers so that out-of-range values,
/// negative ones included, can be clamped instead of rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlRequest {
    pub url: String,

    #[serde(default)]
    pub max_pages: Option<i64>,

    #[serde(default)]
    pub max_depth: Option<i64>,

    #[serde(default)]
    pub same_domain: Option<bool>,
}

impl CrawlRequest {
    /// Resolves the request's limits, filling gaps from `defaults`
    pub fn options(&self, defaults: &CrawlDefaults) -> CrawlOptions {
        CrawlOptions::new(
            clamp_limit(self.max_pages, defaults.default_max_pages, MAX_PAGES_LIMIT),
            clamp_limit(self.max_depth, defaults.default_max_depth, MAX_DEPTH_LIMIT),
            self.same_domain.unwrap_or(true),
        )
    }
}

fn clamp_limit(value: Option<i64>, default: usize, upper: usize) -> usize {
    match value {
        Some(v) if v <= 0 => 0,
        Some(v) => usize::try_from(v).unwrap_or(upper).min(upper),
        None => default,
    }
}
