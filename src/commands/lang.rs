//! Language selection command.

use crate::i18n::{self, Language};
use crate::language_store::LanguageStore;

use super::Reply;

/// Handle `!lang <code>` for `user_id`.
///
/// An unknown or missing code leaves any stored preference untouched.
pub async fn set_language(store: &LanguageStore, user_id: u64, code: Option<&str>) -> Reply {
    let Some(language) = code.and_then(|c| c.parse::<Language>().ok()) else {
        return Reply::Text(i18n::invalid_language());
    };

    store.set(user_id, language).await;
    Reply::Text(format!("<@{}> {}", user_id, language.confirmation()))
}
