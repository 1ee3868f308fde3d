//! Double-booking flags and weekly schedule checks.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime};

use crate::models::{Appointment, Schedule, ScheduleInput};

/// Whether two appointments hold the same doctor at the same time.
/// Intervals are half-open, so back-to-back slots do not overlap.
pub fn overlaps(a: &Appointment, b: &Appointment) -> bool {
    a.id != b.id
        && a.doctor_id == b.doctor_id
        && a.is_active()
        && b.is_active()
        && a.scheduled_at < b.end_at()
        && b.scheduled_at < a.end_at()
}

/// Ids of every appointment that overlaps at least one other.
pub fn conflicting_ids(appointments: &[Appointment]) -> BTreeSet<i64> {
    let mut ids = BTreeSet::new();
    for (i, a) in appointments.iter().enumerate() {
        for b in &appointments[i + 1..] {
            if overlaps(a, b) {
                ids.insert(a.id);
                ids.insert(b.id);
            }
        }
    }
    ids
}

/// Existing block of the same doctor and weekday that `input` would overlap.
/// `ignore_id` skips the block being edited.
pub fn schedule_overlaps<'a>(
    input: &ScheduleInput,
    schedules: &'a [Schedule],
    ignore_id: Option<i64>,
) -> Option<&'a Schedule> {
    schedules.iter().find(|s| {
        Some(s.id) != ignore_id
            && s.doctor_id == input.doctor_id
            && s.weekday == input.weekday
            && input.start_time < s.end_time
            && s.start_time < input.end_time
    })
}

/// Whether `[start, end)` falls inside one of the doctor's weekly blocks.
/// A doctor without any block is treated as unrestricted.
pub fn within_schedule(
    doctor_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
    schedules: &[Schedule],
) -> bool {
    let mut blocks = schedules.iter().filter(|s| s.doctor_id == doctor_id).peekable();
    if blocks.peek().is_none() {
        return true;
    }
    if start.date() != end.date() {
        return false;
    }
    let weekday = start.weekday().num_days_from_monday() as u8;
    blocks.any(|s| s.weekday == weekday && s.start_time <= start.time() && end.time() <= s.end_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::NaiveTime;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn appt(id: i64, doctor: i64, when: &str, minutes: u32) -> Appointment {
        Appointment {
            id,
            customer_id: 1,
            customer_name: None,
            doctor_id: doctor,
            doctor_name: None,
            clinic_id: None,
            scheduled_at: at(when),
            duration_minutes: minutes,
            status: AppointmentStatus::Scheduled,
            reason: None,
            fee_cents: None,
        }
    }

    fn block(id: i64, weekday: u8, start: &str, end: &str) -> Schedule {
        Schedule {
            id,
            doctor_id: 1,
            clinic_id: None,
            weekday,
            start_time: t(start),
            end_time: t(end),
        }
    }

    #[test]
    fn test_back_to_back_is_not_a_conflict() {
        let a = appt(1, 1, "2026-05-04 09:00", 30);
        let b = appt(2, 1, "2026-05-04 09:30", 30);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_conflicts_need_same_doctor_and_active_status() {
        let a = appt(1, 1, "2026-05-04 09:00", 60);
        let b = appt(2, 1, "2026-05-04 09:30", 30);
        let c = appt(3, 2, "2026-05-04 09:15", 30);
        let mut d = appt(4, 1, "2026-05-04 09:45", 30);
        d.status = AppointmentStatus::Cancelled;

        let ids = conflicting_ids(&[a, b, c, d]);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_schedule_overlap_ignores_edited_block() {
        let existing = vec![block(1, 0, "09:00", "12:00"), block(2, 0, "13:00", "17:00")];
        let input = ScheduleInput {
            doctor_id: 1,
            clinic_id: None,
            weekday: 0,
            start_time: t("11:00"),
            end_time: t("14:00"),
        };
        assert_eq!(schedule_overlaps(&input, &existing, None).map(|s| s.id), Some(1));
        assert_eq!(schedule_overlaps(&input, &existing, Some(1)).map(|s| s.id), Some(2));

        let other_day = ScheduleInput { weekday: 1, ..input };
        assert!(schedule_overlaps(&other_day, &existing, None).is_none());
    }

    #[test]
    fn test_within_schedule() {
        // 2026-05-04 is a Monday.
        let blocks = vec![block(1, 0, "09:00", "12:00")];
        assert!(within_schedule(1, at("2026-05-04 09:00"), at("2026-05-04 09:30"), &blocks));
        assert!(!within_schedule(1, at("2026-05-04 11:45"), at("2026-05-04 12:15"), &blocks));
        assert!(!within_schedule(1, at("2026-05-05 09:00"), at("2026-05-05 09:30"), &blocks));
        assert!(within_schedule(7, at("2026-05-05 20:00"), at("2026-05-05 20:30"), &blocks));
    }
}
