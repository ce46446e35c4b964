use serde::Deserialize;

/// Default identifying user agent sent with every fetch
pub const DEFAULT_USER_AGENT: &str = "LinkscoutBot/1.0";

/// Default whole-request timeout for a single fetch (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of redirect hops followed before a fetch fails
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Main configuration structure for Linkscout
///
/// Every section is optional; a missing file or section yields the
/// compiled-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    pub crawl: CrawlDefaults,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(rename = "bind-address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3001".to_string(),
        }
    }
}

/// Page fetcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User agent string identifying the crawler
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout, including the body (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Maximum redirect hops to follow
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Values used when a crawl request omits its limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CrawlDefaults {
    #[serde(rename = "default-max-pages")]
    pub default_max_pages: usize,

    #[serde(rename = "default-max-depth")]
    pub default_max_depth: usize,
}

impl Default for CrawlDefaults {
    fn default() -> Self {
        Self {
            default_max_pages: 10,
            default_max_depth: 1,
        }
    }
}
