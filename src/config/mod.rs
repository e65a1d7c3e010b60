//! Configuration module for the sticker inventory service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::models;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Artificial latency added to every stickers response
    pub response_delay: Duration,
    /// Minimum-stock threshold the embedding page starts with
    pub initial_min: i64,
    /// Display height hint for sticker images, in pixels
    pub image_height: Option<u32>,
    /// Host web URL for the list-API data source; when set, the embedding
    /// page reads records from that host instead of the local service
    pub list_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("STICKERS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
            .parse()
            .expect("Invalid STICKERS_BIND_ADDR format");

        let log_level = env::var("STICKERS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let response_delay = env::var("STICKERS_RESPONSE_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(500));

        // Hosts hand over arbitrary text here; unparsable input means "no
        // filter", the same rule the view applies to its own input.
        let initial_min =
            models::effective_min(&env::var("STICKERS_INITIAL_MIN").unwrap_or_default());

        let image_height = env::var("STICKERS_IMAGE_HEIGHT")
            .ok()
            .and_then(|raw| raw.parse::<u32>().ok());

        let list_api_url = env::var("STICKERS_LIST_API_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string());

        Self {
            bind_addr,
            log_level,
            response_delay,
            initial_min,
            image_height,
            list_api_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("STICKERS_BIND_ADDR");
        env::remove_var("STICKERS_LOG_LEVEL");
        env::remove_var("STICKERS_RESPONSE_DELAY_MS");
        env::remove_var("STICKERS_INITIAL_MIN");
        env::remove_var("STICKERS_IMAGE_HEIGHT");
        env::remove_var("STICKERS_LIST_API_URL");

        let config = Config::from_env();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3001");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.response_delay, Duration::from_millis(500));
        assert_eq!(config.initial_min, 0);
        assert!(config.image_height.is_none());
        assert!(config.list_api_url.is_none());
    }
}
