//! Linkscout: a bounded web crawler and page scraper
//!
//! This crate fetches pages, extracts metadata and links from their HTML, and
//! follows discovered links breadth-first under page-count, depth and domain
//! limits. Every per-page failure is recorded in the report rather than
//! aborting the run.

pub mod config;
pub mod crawler;
pub mod report;
pub mod server;
pub mod url;

use thiserror::Error;

/// Main error type for Linkscout operations
#[derive(Debug, Error)]
pub enum LinkscoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Linkscout operations
pub type Result<T> = std::result::Result<T, LinkscoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, scrape, CrawlOptions, FetchOutcome, HttpFetcher, PageFetcher};
pub use report::{CrawlResult, PageReport, ScrapeReport};
pub use crate::url::{is_same_domain, normalize_url};
