//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each key is one
//! file directly under the base directory:
//!
//! ```text
//! <base_dir>/
//! ├── session        # JSON-encoded AuthSession
//! └── clinic.toml    # ClinicConfig
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `clinic` for a platform-appropriate base.
//! Write failures are logged and otherwise ignored.

use std::path::PathBuf;

use crate::repo::KeyValueStore;

#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::error!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.path(key), value) {
            tracing::error!("Failed to write {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClinicConfig;
    use crate::repo::SessionRepository;

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("clinic_store_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let repo = SessionRepository::new(FileStore::new(dir.clone()));
        let config = ClinicConfig::new("http://10.0.0.5:8000/api");
        repo.set_config(&config).await.unwrap();

        let reopened = SessionRepository::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.get_config().await, config);

        let store = FileStore::new(dir.clone());
        store.remove(ClinicConfig::filename()).await;
        assert!(store.get(ClinicConfig::filename()).await.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
