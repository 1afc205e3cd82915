//! Account ban status lookup command.
//!
//! `!ID<uid>` queries the status provider and answers with an embed in the
//! caller's preferred language.

use serenity::all::{ChannelId, Timestamp};
use tracing::warn;

use crate::formatter::{self, Invoker};
use crate::language_store::LanguageStore;
use crate::status_api::StatusClient;
use crate::utils::validation::validate_uid;

use super::Reply;

/// Everything the lookup needs to know about the invoking message.
#[derive(Debug, Clone)]
pub struct StatusRequest<'a> {
    pub channel: ChannelId,
    pub invoker: Invoker,
    /// Creation time of the invoking message
    pub timestamp: Timestamp,
    /// Trailing text after `!ID`, already trimmed
    pub uid: &'a str,
}

/// Handle `!ID<uid>`.
///
/// Provider failures of any kind collapse into one localized retry-later reply.
pub async fn check_status(
    store: &LanguageStore,
    client: &StatusClient,
    allowed_channel: ChannelId,
    request: &StatusRequest<'_>,
) -> Reply {
    // The moderation filter lets command prefixes through in every channel
    if request.channel != allowed_channel {
        return Reply::NotAllowed(allowed_channel);
    }

    let lang = store.get(request.invoker.user_id).await;
    let mention = request.invoker.mention();

    if validate_uid(request.uid).is_err() {
        return Reply::Text(format!("{} {}", mention, lang.invalid_uid()));
    }

    match client.check_ban(request.uid).await {
        Ok(status) => Reply::Card(formatter::render_status(
            &status,
            lang,
            &request.invoker,
            request.timestamp,
        )),
        Err(e) => {
            warn!(uid = %request.uid, error = %e, "Ban status lookup failed");
            Reply::Text(format!("{} {}", mention, lang.lookup_failed()))
        }
    }
}
