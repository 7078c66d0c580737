//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `BLIP_API_KEY` (required): API key sent upstream as the `X-API-Key` header
/// - `BLIP_API_URL` (required): base URL of the Blip API
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 20001
///
/// Loaded once at startup and never mutated afterwards; handlers only ever
/// see it through the shared client built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub blip_api_key: String,

    pub blip_api_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    20001
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing or cannot be parsed.
    #[error("environment error: {0}")]
    Env(#[from] envy::Error),

    /// BLIP_API_URL is not a valid absolute URL.
    #[error("invalid BLIP_API_URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., BLIP_API_KEY)
    /// - BLIP_API_URL cannot be parsed as an absolute URL
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: blip_api_key -> BLIP_API_KEY
        let config = envy::from_env::<Config>()?;
        config.validate()
    }

    /// Validate the base URL up front so a typo fails at startup rather than
    /// on the first relayed request.
    fn validate(self) -> Result<Self, ConfigError> {
        url::Url::parse(&self.blip_api_url)?;
        Ok(self)
    }

    /// The base URL with any trailing slash removed, so route paths like
    /// `/endusers` can be appended directly.
    pub fn base_url(&self) -> &str {
        self.blip_api_url.trim_end_matches('/')
    }
}
