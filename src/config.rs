//! Configuration management for Banscope.
//!
//! This module handles loading and validating environment variables and application settings.

use crate::error::{BanscopeError, Result};
use crate::i18n::Language;
use crate::utils::validation::parse_channel_id;
use std::env;

/// The only channel where arbitrary text is moderated and `!ID` is served.
pub const DEFAULT_ALLOWED_CHANNEL_ID: u64 = 1406848032070176788;

/// Base URL of the ban status provider.
pub const DEFAULT_STATUS_API_BASE_URL: &str = "http://raw.thug4ff.com";

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Channel the moderation filter and `!ID` are bound to
    pub allowed_channel_id: u64,
    /// Status provider base URL, without trailing slash
    pub status_api_base_url: String,
    /// Language used for users who never ran `!lang`
    pub default_language: Language,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read required environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DISCORD_BOT_TOKEN` is missing or any optional
    /// override is present but invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use banscope::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// println!("Allowed channel: {}", config.allowed_channel_id);
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        let discord_token = env::var("DISCORD_BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| BanscopeError::Config(
                "Missing DISCORD_BOT_TOKEN environment variable. Set it in your environment or create a .env file (never commit this file).".to_string()
            ))?;

        let allowed_channel_id = match env::var("ALLOWED_CHANNEL_ID") {
            Ok(value) => parse_channel_id(&value)
                .map_err(|e| BanscopeError::Config(format!("Invalid ALLOWED_CHANNEL_ID: {}", e)))?,
            Err(_) => DEFAULT_ALLOWED_CHANNEL_ID,
        };

        let status_api_base_url = env::var("STATUS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_STATUS_API_BASE_URL.to_string());
        let status_api_base_url = Self::validate_base_url(&status_api_base_url)?;

        let default_language = match env::var("DEFAULT_LANGUAGE") {
            Ok(code) => code.parse::<Language>().map_err(|_| BanscopeError::Config(
                format!("Invalid DEFAULT_LANGUAGE '{}'. Expected 'en' or 'fr'.", code)
            ))?,
            Err(_) => Language::En,
        };

        Ok(Self {
            discord_token,
            allowed_channel_id,
            status_api_base_url,
            default_language,
        })
    }

    /// Validate the status provider URL and strip any trailing slash.
    fn validate_base_url(url_str: &str) -> Result<String> {
        use url::Url;

        let parsed_url = Url::parse(url_str)
            .map_err(|e| BanscopeError::Config(
                format!("Invalid STATUS_API_BASE_URL '{}': {}", url_str, e)
            ))?;

        let scheme = parsed_url.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(BanscopeError::Config(
                format!("STATUS_API_BASE_URL must use http:// or https:// scheme, got: '{}'", scheme)
            ));
        }

        if parsed_url.host_str().is_none() {
            return Err(BanscopeError::Config(
                format!("STATUS_API_BASE_URL must contain a valid host: '{}'", url_str)
            ));
        }

        Ok(url_str.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_base_url() {
        assert_eq!(
            Config::validate_base_url("http://raw.thug4ff.com").unwrap(),
            "http://raw.thug4ff.com"
        );
        assert_eq!(
            Config::validate_base_url("https://example.com/api/").unwrap(),
            "https://example.com/api"
        );
        assert_eq!(
            Config::validate_base_url("http://127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080"
        );

        assert!(Config::validate_base_url("raw.thug4ff.com").is_err());
        assert!(Config::validate_base_url("ftp://example.com").is_err());
        assert!(Config::validate_base_url("").is_err());
    }

    #[test]
    fn test_default_constants_are_valid() {
        assert!(Config::validate_base_url(DEFAULT_STATUS_API_BASE_URL).is_ok());
        assert!(parse_channel_id(&DEFAULT_ALLOWED_CHANNEL_ID.to_string()).is_ok());
    }
}
