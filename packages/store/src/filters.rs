//! Single-pass predicates over already-fetched lists.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Appointment, AppointmentStatus, Customer};

/// Criteria from the appointment table's filter bar. Empty criteria match
/// everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub doctor_id: Option<i64>,
    /// Inclusive.
    pub from: Option<NaiveDate>,
    /// Inclusive.
    pub to: Option<NaiveDate>,
    /// Case-insensitive substring of customer name, doctor name or reason.
    pub query: String,
}

impl AppointmentFilter {
    pub fn matches(&self, appt: &Appointment) -> bool {
        if self.status.is_some_and(|s| s != appt.status) {
            return false;
        }
        if self.doctor_id.is_some_and(|d| d != appt.doctor_id) {
            return false;
        }
        let day = appt.scheduled_at.date();
        if self.from.is_some_and(|from| day < from) {
            return false;
        }
        if self.to.is_some_and(|to| day > to) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&appt.customer_name, &appt.doctor_name, &appt.reason]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn apply(&self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

/// Customers whose name, phone or email contains `query` (case-insensitive).
pub fn search_customers(customers: &[Customer], query: &str) -> Vec<Customer> {
    let query = query.trim().to_lowercase();
    customers
        .iter()
        .filter(|c| {
            query.is_empty()
                || c.name.to_lowercase().contains(&query)
                || c.phone.contains(&query)
                || c.email
                    .as_deref()
                    .is_some_and(|e| e.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

/// Active appointments starting at or after `now`, soonest first.
pub fn upcoming(appointments: &[Appointment], now: NaiveDateTime) -> Vec<Appointment> {
    let mut out: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.is_active() && a.scheduled_at >= now)
        .cloned()
        .collect();
    out.sort_by_key(|a| a.scheduled_at);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn appt(id: i64, doctor: i64, when: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            customer_id: 100 + id,
            customer_name: Some(format!("Patient {id}")),
            doctor_id: doctor,
            doctor_name: Some(if doctor == 1 { "Dr. Okafor" } else { "Dr. Lindqvist" }.to_string()),
            clinic_id: None,
            scheduled_at: at(when),
            duration_minutes: 30,
            status,
            reason: Some("Follow-up".to_string()),
            fee_cents: None,
        }
    }

    fn sample() -> Vec<Appointment> {
        vec![
            appt(1, 1, "2026-05-04 09:00", AppointmentStatus::Scheduled),
            appt(2, 2, "2026-05-05 10:00", AppointmentStatus::Cancelled),
            appt(3, 1, "2026-05-06 11:00", AppointmentStatus::Completed),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert_eq!(AppointmentFilter::default().apply(&sample()).len(), 3);
    }

    #[test]
    fn test_status_and_doctor_combine() {
        let filter = AppointmentFilter {
            doctor_id: Some(1),
            status: Some(AppointmentStatus::Completed),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&sample()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = AppointmentFilter {
            from: NaiveDate::from_ymd_opt(2026, 5, 5),
            to: NaiveDate::from_ymd_opt(2026, 5, 6),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&sample()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_query_is_case_insensitive_over_names() {
        let filter = AppointmentFilter {
            query: "  LINDQ ".to_string(),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&sample()).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);

        let filter = AppointmentFilter {
            query: "patient 3".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&sample())[0].id, 3);
    }

    #[test]
    fn test_upcoming_skips_past_and_inactive() {
        let ids: Vec<i64> = upcoming(&sample(), at("2026-05-04 12:00"))
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_search_customers() {
        let customers = vec![
            Customer {
                id: 1,
                name: "Amara Nwosu".to_string(),
                email: Some("amara@mail.test".to_string()),
                phone: "555-0101".to_string(),
                date_of_birth: None,
                address: None,
            },
            Customer {
                id: 2,
                name: "Ben Carter".to_string(),
                email: None,
                phone: "555-0199".to_string(),
                date_of_birth: None,
                address: None,
            },
        ];
        assert_eq!(search_customers(&customers, "").len(), 2);
        assert_eq!(search_customers(&customers, "AMARA")[0].id, 1);
        assert_eq!(search_customers(&customers, "0199")[0].id, 2);
        assert_eq!(search_customers(&customers, "mail.test")[0].id, 1);
        assert!(search_customers(&customers, "zed").is_empty());
    }
}
