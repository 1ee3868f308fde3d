//! # Store crate — platform-neutral clinic domain
//!
//! Everything the dashboards compute without touching the network: the
//! records mirrored from the backend, role permissions, client-side config,
//! session persistence and the small transformations behind the tables
//! (filtering, paging, double-booking flags, payroll, ledger, statistics,
//! form validation).

pub mod config;
pub mod demo;
pub mod error;
pub mod filters;
pub mod ledger;
pub mod models;
pub mod money;
pub mod paging;
pub mod payroll;
pub mod repo;
pub mod role;
pub mod schedule;
pub mod stats;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStore;

pub use config::ClinicConfig;
pub use error::{StoreError, ValidationError};
pub use models::*;
pub use paging::{paginate, Page};
pub use repo::{KeyValueStore, SessionRepository};
pub use role::{Role, Section};
