//! Configuration module for Linkscout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a compiled-in default, so running without a file is supported.
//!
//! # Example
//!
//! ```no_run
//! use linkscout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkscout.toml")).unwrap();
//! println!("Fetch timeout: {}ms", config.fetcher.timeout_ms);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlDefaults, FetcherConfig, ServerConfig, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS,
    DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::parse_bind_address;
