//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod repo;
pub use repo::make_repo;

pub mod views;

pub const CLINIC_CSS: Asset = asset!("/assets/clinic.css");

mod navbar;
pub use navbar::Navbar;

mod shell;
pub use shell::RoleShell;

mod auth;
pub use auth::{use_api, use_auth, ApiHandle, AuthProvider, AuthState, LogoutButton};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogEntry, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
