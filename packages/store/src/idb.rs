//! # IndexedDB key-value store — browser-side persistence
//!
//! [`IdbStore`] is the [`KeyValueStore`] used on the web platform. It keeps
//! the session and config in a single IndexedDB object store through
//! [`rexie`]:
//!
//! | IndexedDB store | Key | Value |
//! |-----------------|-----|-------|
//! | `"kv"` | key string (`"session"`, `"clinic.toml"`) | string |
//!
//! A fresh [`Rexie`] connection is opened per operation since `Rexie` is not
//! `Clone`. Read errors degrade to "absent"; write errors are logged.

use crate::repo::KeyValueStore;
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DB_NAME: &str = "clinic";
const DB_VERSION: u32 = 1;
const KV_STORE: &str = "kv";

#[derive(Clone, Default)]
pub struct IdbStore;

impl IdbStore {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, rexie::Error> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(KV_STORE))
            .build()
            .await
    }
}

impl KeyValueStore for IdbStore {
    async fn get(&self, key: &str) -> Option<String> {
        let db = self.open_db().await.ok()?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadOnly)
            .ok()?;
        let store = tx.store(KV_STORE).ok()?;

        let value = store.get(JsValue::from_str(key)).await.ok()?;
        let js_val = value?;
        serde_wasm_bindgen::from_value(js_val).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let Ok(db) = self.open_db().await else {
            tracing::warn!("IndexedDB unavailable, {} not persisted", key);
            return;
        };
        let Ok(tx) = db.transaction(&[KV_STORE], TransactionMode::ReadWrite) else {
            tracing::error!("IndexedDB transaction failed, {} not persisted", key);
            return;
        };
        let Ok(store) = tx.store(KV_STORE) else {
            return;
        };

        let js_key = JsValue::from_str(key);
        let js_value = JsValue::from_str(&value);
        if let Err(e) = store.put(&js_value, Some(&js_key)).await {
            tracing::error!("Failed to write {} to IndexedDB: {:?}", key, e);
            return;
        }
        if let Err(e) = tx.done().await {
            tracing::error!("Failed to commit {} to IndexedDB: {:?}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let Ok(db) = self.open_db().await else {
            return;
        };
        let Ok(tx) = db.transaction(&[KV_STORE], TransactionMode::ReadWrite) else {
            return;
        };
        let Ok(store) = tx.store(KV_STORE) else {
            return;
        };
        if let Err(e) = store.delete(JsValue::from_str(key)).await {
            tracing::error!("Failed to remove {} from IndexedDB: {:?}", key, e);
            return;
        }
        if let Err(e) = tx.done().await {
            tracing::error!("Failed to commit removal of {} from IndexedDB: {:?}", key, e);
        }
    }
}
