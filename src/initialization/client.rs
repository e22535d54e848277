//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};

/// Initializes the HTTP client for API requests.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Overall request timeout from the configuration
/// - A TCP connect timeout, so an unreachable API fails fast
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(
            TCP_CONNECT_TIMEOUT_SECS.min(config.timeout_seconds.max(1)),
        ))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_zero_timeout() {
        let config = Config {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
