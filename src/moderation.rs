//! Moderation of the allowed channel.
//!
//! Only command messages may stay in the allowed channel; everything else
//! posted there by a human is deleted.

use serenity::all::{ChannelId, Context, Message};
use serenity::http::HttpError;
use serenity::model::error::Error as ModelError;
use tracing::{info, warn};

use crate::commands::{LANG_PREFIX, STATUS_PREFIX};

/// What to do with an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Sent by a bot; never acted upon.
    Ignore,
    /// Non-command chatter in the allowed channel.
    Delete,
    /// Hand the message to the command router.
    Dispatch,
}

/// Decide the fate of a message without touching Discord.
pub fn classify(author_is_bot: bool, channel: ChannelId, content: &str, allowed: ChannelId) -> Verdict {
    if author_is_bot {
        return Verdict::Ignore;
    }

    if channel == allowed && !is_command(content) {
        return Verdict::Delete;
    }

    Verdict::Dispatch
}

/// Whether the content carries one of the two recognised command prefixes.
pub fn is_command(content: &str) -> bool {
    content.starts_with(STATUS_PREFIX) || content.starts_with(LANG_PREFIX)
}

/// Apply the moderation rule to `msg`.
///
/// Returns `true` when the message should continue to command dispatch.
/// Deletion failures are logged and swallowed.
pub async fn enforce(ctx: &Context, msg: &Message, allowed: ChannelId) -> bool {
    match classify(msg.author.bot, msg.channel_id, &msg.content, allowed) {
        Verdict::Ignore => false,
        Verdict::Dispatch => true,
        Verdict::Delete => {
            match msg.delete(ctx).await {
                Ok(()) => info!(
                    author = %msg.author.name,
                    channel = %msg.channel_id,
                    "Deleted non-command message"
                ),
                Err(e) if is_permission_denied(&e) => warn!(
                    channel = %msg.channel_id,
                    "Missing permissions to delete message"
                ),
                Err(e) => warn!(
                    channel = %msg.channel_id,
                    error = %e,
                    "Failed to delete message"
                ),
            }
            false
        }
    }
}

/// True for failures caused by the bot lacking Manage Messages.
///
/// The cache-backed permission check fails locally; without it Discord answers 403.
pub fn is_permission_denied(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => true,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 403
        }
        _ => false,
    }
}
