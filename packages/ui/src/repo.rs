//! Platform-appropriate session repository.
//!
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStore`]
//! - **Desktop** (native): `<data_dir>/clinic/` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory, lost on reload

pub fn make_repo() -> store::SessionRepository<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionRepository::new(store::IdbStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::SessionRepository::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("clinic");
        store::SessionRepository::new(store::FileStore::new(base))
    }
}
