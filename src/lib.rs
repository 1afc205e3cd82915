//! Banscope library.
//!
//! This library provides the core functionality for the Banscope Discord bot:
//! moderation of a single command channel, per-user reply language, and
//! account ban lookups against a third-party status API.

pub mod error;
pub mod config;
pub mod i18n;
pub mod language_store;
pub mod status_api;
pub mod formatter;
pub mod moderation;
pub mod commands;
pub mod tasks;
pub mod types;
pub mod bot;
pub mod utils;

pub use error::{BanscopeError, Result};
pub use config::Config;
