//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote API, without trailing slash
    pub base_url: String,
    /// Cache TTL in seconds; also the sweep interval
    pub cache_interval: u64,
    /// Timeout for a single HTTP request in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Remote API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_INTERVAL` - Cache TTL in seconds, must be non-zero (default: 30)
    /// - `HTTP_TIMEOUT` - Request timeout in seconds, must be non-zero (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            base_url: env::var("API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_interval: positive_secs("CACHE_INTERVAL").unwrap_or(defaults.cache_interval),
            http_timeout: positive_secs("HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// HTTP timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

fn positive_secs(name: &str) -> Option<u64> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&secs: &u64| secs > 0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            cache_interval: 30,
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 30);
        assert_eq!(config.http_timeout, 10);
        assert_eq!(config.cache_ttl(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    // Single test touching the environment so parallel tests don't race on it
    #[test]
    fn test_config_from_env() {
        env::remove_var("API_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("HTTP_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_interval, 30);
        assert_eq!(config.http_timeout, 10);

        env::set_var("API_BASE_URL", "http://localhost:8080/api/");
        env::set_var("CACHE_INTERVAL", "0");
        env::set_var("HTTP_TIMEOUT", "3");

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.cache_interval, 30, "Zero interval falls back to default");
        assert_eq!(config.http_timeout, 3);

        env::remove_var("API_BASE_URL");
        env::remove_var("CACHE_INTERVAL");
        env::remove_var("HTTP_TIMEOUT");
    }
}
