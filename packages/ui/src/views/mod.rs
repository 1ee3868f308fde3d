//! Page-level views shared by the web and desktop apps.

use chrono::NaiveDateTime;
use store::{Customer, Doctor};

mod auth;
pub use auth::{ForgotPasswordView, LoginView, RegisterView, ResetPasswordView};

mod profile;
pub use profile::ProfileView;

mod patient;
pub use patient::PatientView;

mod reception;
pub use reception::ReceptionView;

mod doctor;
pub use doctor::DoctorView;

mod accounting;
pub use accounting::AccountingView;

mod management;
pub use management::ManagementView;

mod executive;
pub use executive::ExecutiveView;

/// Trimmed text, or `None` when blank.
pub(crate) fn opt_text(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub(crate) fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub(crate) fn doctor_options(doctors: &[Doctor]) -> Vec<(String, String)> {
    doctors
        .iter()
        .map(|d| {
            let label = match &d.specialty {
                Some(specialty) => format!("{} ({specialty})", d.name),
                None => d.name.clone(),
            };
            (d.id.to_string(), label)
        })
        .collect()
}

pub(crate) fn customer_options(customers: &[Customer]) -> Vec<(String, String)> {
    customers
        .iter()
        .map(|c| (c.id.to_string(), format!("{} · {}", c.name, c.phone)))
        .collect()
}

pub(crate) fn doctor_name(doctors: &[Doctor], id: i64) -> String {
    doctors
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|| format!("Doctor #{id}"))
}

pub(crate) fn customer_name(customers: &[Customer], id: i64) -> String {
    customers
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("Patient #{id}"))
}
