//! # Session repository — client-side persistence of the bearer token
//!
//! [`SessionRepository`] keeps the signed-in [`AuthSession`] and the
//! [`ClinicConfig`] in whichever [`KeyValueStore`] the platform provides:
//!
//! | Platform | Store |
//! |----------|-------|
//! | Web (`wasm32` + `web`) | [`crate::IdbStore`] (IndexedDB) |
//! | Desktop | [`crate::FileStore`] under the user's data dir |
//! | Tests | [`crate::MemoryStore`] |
//!
//! Reads never fail: a missing or corrupt entry is logged and treated as
//! absent, so a broken store degrades to "signed out, default config".

use crate::config::ClinicConfig;
use crate::error::StoreError;
use crate::models::AuthSession;

/// Key of the serialized [`AuthSession`].
pub const SESSION_KEY: &str = "session";

/// Async string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

pub struct SessionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn load_session(&self) -> Option<AuthSession> {
        let raw = self.store.get(SESSION_KEY).await?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unreadable session: {}", e);
                self.store.remove(SESSION_KEY).await;
                None
            }
        }
    }

    pub async fn save_session(&self, session: &AuthSession) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, raw).await;
        Ok(())
    }

    pub async fn clear_session(&self) {
        self.store.remove(SESSION_KEY).await;
    }

    /// Stored config, or the default when absent or unparsable.
    pub async fn get_config(&self) -> ClinicConfig {
        self.stored_config().await.unwrap_or_default()
    }

    /// Config explicitly saved on this device, if any.
    pub async fn stored_config(&self) -> Option<ClinicConfig> {
        let raw = self.store.get(ClinicConfig::filename()).await?;
        match ClinicConfig::from_toml(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", ClinicConfig::filename(), e);
                None
            }
        }
    }

    pub async fn set_config(&self, config: &ClinicConfig) -> Result<(), StoreError> {
        let raw = config.to_toml()?;
        self.store.set(ClinicConfig::filename(), raw).await;
        Ok(())
    }
}
