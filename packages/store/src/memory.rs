use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::repo::KeyValueStore;

/// In-memory KeyValueStore for tests and as a fallback when no persistent
/// store is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::models::{AuthSession, User};
    use crate::repo::{SessionRepository, SESSION_KEY};
    use crate::role::Role;

    fn session() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            user: User {
                id: 1,
                name: "Dana Reyes".to_string(),
                email: "dana@clinic.test".to_string(),
                phone: None,
                role: Role::Receptionist,
                clinic_id: Some(2),
            },
        }
    }

    #[tokio::test]
    async fn test_session_save_load_clear() {
        let repo = SessionRepository::new(MemoryStore::new());

        assert!(repo.load_session().await.is_none());

        repo.save_session(&session()).await.unwrap();
        let loaded = repo.load_session().await.unwrap();
        assert_eq!(loaded, session());

        repo.clear_session().await;
        assert!(repo.load_session().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_session_is_discarded() {
        let store = MemoryStore::new();
        store.set(SESSION_KEY, "{not json".to_string()).await;
        let repo = SessionRepository::new(store.clone());

        assert!(repo.load_session().await.is_none());
        assert!(store.get(SESSION_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_config_roundtrip() {
        let repo = SessionRepository::new(MemoryStore::new());

        assert_eq!(repo.get_config().await, ClinicConfig::default());
        assert!(repo.stored_config().await.is_none());

        let config = ClinicConfig::new("https://api.clinic.test").with_page_size(5);
        repo.set_config(&config).await.unwrap();
        assert_eq!(repo.get_config().await, config);
        assert_eq!(repo.stored_config().await, Some(config));
    }

    #[tokio::test]
    async fn test_invalid_config_falls_back_to_default() {
        let store = MemoryStore::new();
        store
            .set(ClinicConfig::filename(), "[ui]\npage_size = \"many\"".to_string())
            .await;
        let repo = SessionRepository::new(store);
        assert_eq!(repo.get_config().await, ClinicConfig::default());
    }
}
