//! Summary figures for the executive dashboard.

use std::collections::BTreeMap;

use crate::models::{Appointment, AppointmentStatus};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentStats {
    pub total: usize,
    pub scheduled: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub no_show: usize,
    /// completed / (total - cancelled), 0 when nothing is left to complete.
    pub completion_rate: f64,
    /// Sum of fees of completed appointments.
    pub revenue_cents: i64,
}

impl AppointmentStats {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        let mut stats = Self {
            total: appointments.len(),
            ..Self::default()
        };
        for appt in appointments {
            match appt.status {
                AppointmentStatus::Scheduled => stats.scheduled += 1,
                AppointmentStatus::Confirmed => stats.confirmed += 1,
                AppointmentStatus::Completed => {
                    stats.completed += 1;
                    stats.revenue_cents += appt.fee_cents.unwrap_or(0);
                }
                AppointmentStatus::Cancelled => stats.cancelled += 1,
                AppointmentStatus::NoShow => stats.no_show += 1,
            }
        }
        let denominator = stats.total - stats.cancelled;
        if denominator > 0 {
            stats.completion_rate = stats.completed as f64 / denominator as f64;
        }
        stats
    }

    pub fn count(&self, status: AppointmentStatus) -> usize {
        match status {
            AppointmentStatus::Scheduled => self.scheduled,
            AppointmentStatus::Confirmed => self.confirmed,
            AppointmentStatus::Completed => self.completed,
            AppointmentStatus::Cancelled => self.cancelled,
            AppointmentStatus::NoShow => self.no_show,
        }
    }
}

/// Active appointment count per doctor name, busiest first.
pub fn load_by_doctor(appointments: &[Appointment]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for appt in appointments.iter().filter(|a| a.is_active()) {
        let name = appt
            .doctor_name
            .clone()
            .unwrap_or_else(|| format!("Doctor #{}", appt.doctor_id));
        *counts.entry(name).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn appt(id: i64, doctor: &str, status: AppointmentStatus, fee: Option<i64>) -> Appointment {
        Appointment {
            id,
            customer_id: 1,
            customer_name: None,
            doctor_id: id,
            doctor_name: Some(doctor.to_string()),
            clinic_id: None,
            scheduled_at: NaiveDateTime::parse_from_str("2026-01-01 10:00", "%Y-%m-%d %H:%M")
                .unwrap(),
            duration_minutes: 30,
            status,
            reason: None,
            fee_cents: fee,
        }
    }

    #[test]
    fn test_counts_rate_and_revenue() {
        let list = vec![
            appt(1, "A", AppointmentStatus::Completed, Some(5_000)),
            appt(2, "A", AppointmentStatus::Completed, None),
            appt(3, "B", AppointmentStatus::Cancelled, Some(9_999)),
            appt(4, "B", AppointmentStatus::Scheduled, None),
            appt(5, "C", AppointmentStatus::NoShow, None),
        ];
        let stats = AppointmentStats::from_appointments(&list);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.count(AppointmentStatus::Completed), 2);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.completion_rate, 0.5);
        assert_eq!(stats.revenue_cents, 5_000);

        assert_eq!(
            load_by_doctor(&list),
            vec![("A".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_and_all_cancelled() {
        assert_eq!(AppointmentStats::from_appointments(&[]).completion_rate, 0.0);
        let list = vec![appt(1, "A", AppointmentStatus::Cancelled, None)];
        assert_eq!(AppointmentStats::from_appointments(&list).completion_rate, 0.0);
    }
}
