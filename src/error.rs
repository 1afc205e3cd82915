//! Custom error types for Banscope.
//!
//! This module provides a centralized error handling system with specific error types
//! for different parts of the application.

use thiserror::Error;

/// Main error type for Banscope operations.
#[derive(Debug, Error)]
pub enum BanscopeError {
    /// Configuration errors (missing env vars, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),
    /// Status provider errors (non-200 responses, unexpected payloads)
    #[error("Status API error: {0}")]
    StatusApi(String),
    /// Network/HTTP errors
    #[error("Network error: {0}")]
    Network(String),
    /// Discord gateway or REST errors
    #[error("Discord error: {0}")]
    Discord(String),
    /// Validation errors (invalid UIDs, channel ids, etc.)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for BanscopeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for BanscopeError {
    fn from(err: serde_json::Error) -> Self {
        Self::StatusApi(format!("JSON parsing error: {}", err))
    }
}

impl From<serenity::Error> for BanscopeError {
    fn from(err: serenity::Error) -> Self {
        Self::Discord(err.to_string())
    }
}

/// Result type alias for Banscope operations.
pub type Result<T> = std::result::Result<T, BanscopeError>;
