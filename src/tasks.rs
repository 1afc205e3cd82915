//! Background tasks started once the gateway is ready.
//!
//! Both loops log and swallow their own failures so they never stop.

use std::time::Duration;

use serenity::all::{ActivityData, Context};
use serenity::cache::Cache;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::error::{BanscopeError, Result};

/// URL pinged to keep the hosting instance from idling.
pub const KEEP_ALIVE_URL: &str = "https://info-skmj.onrender.com";
pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(60);
pub const PRESENCE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Issue one keep-alive GET and return the HTTP status code.
pub async fn ping_once(client: &reqwest::Client, url: &str) -> Result<u16> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| BanscopeError::Network(format!("Keep-alive request failed: {}", e)))?;
    Ok(resp.status().as_u16())
}

/// Spawn the keep-alive loop. The first ping fires immediately.
pub fn spawn_keep_alive(client: reqwest::Client, url: String, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            match ping_once(&client, &url).await {
                Ok(status) => info!(status, "Keep-alive ping"),
                Err(e) => warn!(error = %e, "Keep-alive error"),
            }
        }
    })
}

/// Activity text shown under the bot's name.
pub fn presence_text(guild_count: usize) -> String {
    format!("{} servers", guild_count)
}

/// Number of guilds the bot has joined.
///
/// Counts guilds still awaiting their GuildCreate, which are all of them right after Ready.
pub fn joined_guild_count(cache: &Cache) -> usize {
    cache.guilds().len()
}

/// Spawn the presence loop, refreshing the "Watching N servers" activity.
pub fn spawn_presence_updater(ctx: Context, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            // Fire-and-forget; the shard runner logs send failures
            let guilds = joined_guild_count(&ctx.cache);
            ctx.set_activity(Some(ActivityData::watching(presence_text(guilds))));
            debug!(guilds, "Presence updated");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_text() {
        assert_eq!(presence_text(0), "0 servers");
        assert_eq!(presence_text(12), "12 servers");
    }

    #[test]
    fn test_joined_guild_count_includes_unavailable_guilds() {
        use serenity::model::event::ReadyEvent;

        let mut ready: ReadyEvent = serde_json::from_value(serde_json::json!({
            "v": 10,
            "user": {
                "id": "1",
                "username": "banscope",
                "discriminator": "0",
                "global_name": null,
                "avatar": null,
                "bot": true
            },
            "guilds": [
                { "id": "10", "unavailable": true },
                { "id": "11", "unavailable": true },
                { "id": "12", "unavailable": true }
            ],
            "private_channels": [],
            "presences": [],
            "session_id": "session",
            "resume_gateway_url": "wss://gateway.discord.gg",
            "application": { "id": "1", "flags": 0 }
        }))
        .unwrap();

        let cache = Cache::new();
        cache.update(&mut ready);

        assert_eq!(cache.guild_count(), 0);
        assert_eq!(joined_guild_count(&cache), 3);
    }

    #[tokio::test]
    async fn test_ping_once_reports_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(204)
            .create_async()
            .await;

        let status = ping_once(&reqwest::Client::new(), &server.url()).await.unwrap();

        assert_eq!(status, 204);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_ping_once_non_success_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/").with_status(502).create_async().await;

        let status = ping_once(&reqwest::Client::new(), &server.url()).await.unwrap();
        assert_eq!(status, 502);
    }

    #[tokio::test]
    async fn test_keep_alive_loop_survives_errors() {
        // Unreachable target: every ping fails, the task must keep running
        let handle = spawn_keep_alive(
            reqwest::Client::new(),
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!handle.is_finished());
        handle.abort();
    }
}
