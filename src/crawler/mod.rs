//! Crawler module for page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Bounded HTTP fetching with failures reported as data
//! - HTML metadata and link extraction
//! - The breadth-first frontier with its visited set
//! - Crawl coordination and the single-page scrape

mod coordinator;
mod extractor;
mod fetcher;
mod frontier;
mod options;
mod scrape;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::{crawl, Coordinator};
pub use extractor::{
    extract, ExtractedPage, MAX_HEADINGS, MAX_LINKS, MAX_PREVIEW_CHARS, MIN_PREVIEW_CHARS,
};
pub use fetcher::{build_http_client, FetchOutcome, HttpFetcher, PageFetcher, ACCEPT_HTML};
pub use frontier::{Frontier, FrontierEntry};
pub use options::{CrawlOptions, CrawlRequest, MAX_DEPTH_LIMIT, MAX_PAGES_LIMIT};
pub use scrape::scrape;
