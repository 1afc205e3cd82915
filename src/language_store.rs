//! In-memory per-user language preferences.
//!
//! Preferences live for the lifetime of the process only. Entries are never
//! evicted; the table grows by one entry per distinct user who runs `!lang`.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::i18n::Language;

/// Maps Discord user ids to their selected reply language.
#[derive(Debug, Default)]
pub struct LanguageStore {
    default: Language,
    preferences: RwLock<HashMap<u64, Language>>,
}

impl LanguageStore {
    /// Create an empty store that resolves unknown users to `default`.
    pub fn new(default: Language) -> Self {
        Self {
            default,
            preferences: RwLock::new(HashMap::new()),
        }
    }

    /// Language for `user_id`, falling back to the store default.
    pub async fn get(&self, user_id: u64) -> Language {
        self.preferences
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or(self.default)
    }

    /// Insert or overwrite the preference for `user_id`.
    pub async fn set(&self, user_id: u64, language: Language) {
        self.preferences.write().await.insert(user_id, language);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.preferences.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.preferences.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_gets_default() {
        let store = LanguageStore::new(Language::En);
        assert_eq!(store.get(42).await, Language::En);

        let store = LanguageStore::new(Language::Fr);
        assert_eq!(store.get(42).await, Language::Fr);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let store = LanguageStore::new(Language::En);

        store.set(7, Language::En).await;
        store.set(7, Language::Fr).await;

        assert_eq!(store.get(7).await, Language::Fr);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_users_are_independent() {
        let store = LanguageStore::new(Language::En);
        store.set(1, Language::Fr).await;

        assert_eq!(store.get(1).await, Language::Fr);
        assert_eq!(store.get(2).await, Language::En);
    }
}
