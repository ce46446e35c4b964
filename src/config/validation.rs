use crate::config::types::{Config, CrawlDefaults, FetcherConfig, ServerConfig};
use crate::crawler::{MAX_DEPTH_LIMIT, MAX_PAGES_LIMIT};
use crate::ConfigError;
use std::net::SocketAddr;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_crawl_defaults(&config.crawl)?;
    Ok(())
}

fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    parse_bind_address(&config.bind_address)?;
    Ok(())
}

/// Parses a listen address such as `127.0.0.1:3001`
///
/// Host names are rejected; the address must be an IP and port.
pub fn parse_bind_address(address: &str) -> Result<SocketAddr, ConfigError> {
    address.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!(
            "bind_address must be a socket address, got '{}': {}",
            address, e
        ))
    })
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII or spaces
    if !config
        .user_agent
        .chars()
        .all(|c| c.is_ascii_graphic() || c == ' ')
    {
        return Err(ConfigError::Validation(format!(
            "user_agent must contain only printable ASCII characters, got '{}'",
            config.user_agent
        )));
    }

    if config.timeout_ms < 100 || config.timeout_ms > 120_000 {
        return Err(ConfigError::Validation(format!(
            "timeout_ms must be between 100 and 120000, got {}",
            config.timeout_ms
        )));
    }

    if config.max_redirects > 20 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be at most 20, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}

fn validate_crawl_defaults(config: &CrawlDefaults) -> Result<(), ConfigError> {
    if config.default_max_pages < 1 || config.default_max_pages > MAX_PAGES_LIMIT {
        return Err(ConfigError::Validation(format!(
            "default_max_pages must be between 1 and {}, got {}",
            MAX_PAGES_LIMIT, config.default_max_pages
        )));
    }

    if config.default_max_depth > MAX_DEPTH_LIMIT {
        return Err(ConfigError::Validation(format!(
            "default_max_depth must be at most {}, got {}",
            MAX_DEPTH_LIMIT, config.default_max_depth
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = Config::default();
        config.server.bind_address = "localhost".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_parse_bind_address() {
        let address = parse_bind_address("0.0.0.0:8080").unwrap();
        assert_eq!(address.port(), 8080);
        assert!(parse_bind_address("[::1]:3001").is_ok());
    }

    #[test]
    fn test_parse_bind_address_rejects_malformed_input() {
        for address in ["localhost:3001", "127.0.0.1", "127.0.0.1:99999", ""] {
            match parse_bind_address(address) {
                Err(ConfigError::Validation(msg)) => assert!(msg.contains("bind_address")),
                other => panic!("expected validation error for {:?}, got {:?}", address, other),
            }
        }
    }

    #[test]
    fn test_empty_user_agent() {
        let mut config = Config::default();
        config.fetcher.user_agent = "   ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_user_agent_with_control_characters() {
        let mut config = Config::default();
        config.fetcher.user_agent = "Bot\n1.0".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = Config::default();
        config.fetcher.timeout_ms = 99;
        assert!(validate(&config).is_err());

        config.fetcher.timeout_ms = 100;
        assert!(validate(&config).is_ok());

        config.fetcher.timeout_ms = 120_001;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_redirect_cap() {
        let mut config = Config::default();
        config.fetcher.max_redirects = 0;
        assert!(validate(&config).is_ok());

        config.fetcher.max_redirects = 21;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_crawl_default_bounds() {
        let mut config = Config::default();
        config.crawl.default_max_pages = 0;
        assert!(validate(&config).is_err());

        config.crawl.default_max_pages = 21;
        assert!(validate(&config).is_err());

        config.crawl.default_max_pages = 20;
        config.crawl.default_max_depth = 4;
        assert!(validate(&config).is_err());

        config.crawl.default_max_depth = 3;
        assert!(validate(&config).is_ok());
    }
}
