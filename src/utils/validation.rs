//! Validation utilities for user input.
//!
//! This module provides reusable validation functions for various types of input.

use crate::error::{BanscopeError, Result};

/// Validate a game account UID.
///
/// A UID must:
/// - Be non-empty
/// - Contain only ASCII decimal digits
///
/// No length limit is applied; the status provider decides whether the account exists.
///
/// # Examples
///
/// ```
/// use banscope::utils::validation::validate_uid;
///
/// assert!(validate_uid("123456789").is_ok());
/// assert!(validate_uid("").is_err());
/// assert!(validate_uid("12a4").is_err());
/// ```
pub fn validate_uid(uid: &str) -> Result<()> {
    if uid.is_empty() {
        return Err(BanscopeError::Validation("UID cannot be empty".to_string()));
    }

    if !uid.chars().all(|c| c.is_ascii_digit()) {
        return Err(BanscopeError::Validation(format!(
            "UID can only contain digits, got: '{}'",
            uid
        )));
    }

    Ok(())
}

/// Parse a Discord channel snowflake.
///
/// # Errors
///
/// Returns an error if the value is not a positive 64-bit integer.
///
/// # Examples
///
/// ```
/// use banscope::utils::validation::parse_channel_id;
///
/// assert_eq!(parse_channel_id("1406848032070176788").unwrap(), 1406848032070176788);
/// assert!(parse_channel_id("0").is_err());
/// assert!(parse_channel_id("general").is_err());
/// ```
pub fn parse_channel_id(value: &str) -> Result<u64> {
    let id = value.trim().parse::<u64>().map_err(|_| {
        BanscopeError::Validation(format!("Invalid channel id: '{}'", value))
    })?;

    if id == 0 {
        return Err(BanscopeError::Validation(
            "Channel id must be non-zero".to_string(),
        ));
    }

    Ok(id)
}
