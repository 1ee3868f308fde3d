use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment. Transitions are decided by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
    ];

    /// Wire value, also used for `<select>` option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::NoShow => "no_show",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No show",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Whether the slot still occupies the doctor's time.
    pub fn is_active(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::NoShow)
    }

    /// Whether a patient or receptionist may still cancel it.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::Confirmed)
    }
}

/// Slot length used when the backend or the booking form gives none.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub doctor_id: i64,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    pub scheduled_at: NaiveDateTime,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub fee_cents: Option<i64>,
}

impl Appointment {
    pub fn end_at(&self) -> NaiveDateTime {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_minutes))
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

/// Body for `POST /appointments`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub customer_id: i64,
    pub doctor_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_id: Option<i64>,
    pub scheduled_at: NaiveDateTime,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Body for `PUT /appointments/{id}`. Only the fields set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AppointmentUpdate {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_row_with_defaults() {
        let json = r#"{
            "id": 7,
            "customer_id": 3,
            "doctor_id": 2,
            "scheduled_at": "2026-03-01T09:30:00"
        }"#;
        let appt: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appt.duration_minutes, 30);
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
        assert_eq!(appt.end_at().to_string(), "2026-03-01 10:00:00");
    }

    #[test]
    fn test_status_wire_names() {
        let s = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(s, "\"no_show\"");
        assert_eq!(AppointmentStatus::parse("cancelled"), Some(AppointmentStatus::Cancelled));
        assert_eq!(AppointmentStatus::parse("bogus"), None);
        assert!(!AppointmentStatus::NoShow.is_active());
        assert!(!AppointmentStatus::Completed.is_cancellable());
    }

    #[test]
    fn test_status_update_sends_only_status() {
        let body = serde_json::to_value(AppointmentUpdate::status(AppointmentStatus::Cancelled))
            .unwrap();
        assert_eq!(body, serde_json::json!({ "status": "cancelled" }));
    }
}
