//! Type definitions and aliases for the bot.
//!
//! This module contains shared types used throughout the application.

use serenity::all::ChannelId;

use crate::config::Config;
use crate::language_store::LanguageStore;
use crate::status_api::StatusClient;

/// Bot application data shared across all event handlers.
///
/// Lives for the whole process; poise hands a reference to every event.
pub struct Data {
    pub config: Config,
    /// HTTP client shared by the status lookup and the keep-alive ping
    pub http_client: reqwest::Client,
    pub status_client: StatusClient,
    /// Per-user reply language, in memory only
    pub languages: LanguageStore,
}

impl Data {
    pub fn new(config: Config, http_client: reqwest::Client) -> Self {
        let status_client = StatusClient::new(http_client.clone(), config.status_api_base_url.clone());
        let languages = LanguageStore::new(config.default_language);
        Self {
            config,
            http_client,
            status_client,
            languages,
        }
    }

    pub fn allowed_channel(&self) -> ChannelId {
        ChannelId::new(self.config.allowed_channel_id)
    }
}

/// Error type for event handlers (maintains compatibility with poise).
pub type Error = Box<dyn std::error::Error + Send + Sync>;
