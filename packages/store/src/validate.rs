//! Required-field and format rules checked before a form is submitted.
//!
//! Each function returns the first rule that fails. The backend remains the
//! authority; these only spare a round trip for obviously incomplete forms.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValidationError;
use crate::models::{
    LabTestInput, MedicalRecordInput, NewCustomer, PrescriptionInput, ScheduleInput,
};

pub const MIN_PASSWORD_LEN: usize = 8;

fn required(field: &'static str, value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, format!("{label} is required")))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("email", "Please enter a valid email"))
    }
}

fn new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if password != confirm {
        return Err(ValidationError::new("confirm_password", "Passwords do not match"));
    }
    Ok(())
}

pub fn login(email_value: &str, password: &str) -> Result<(), ValidationError> {
    email(email_value)?;
    required("password", password, "Password")
}

pub fn registration(
    name: &str,
    email_value: &str,
    password: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    required("name", name, "Name")?;
    email(email_value)?;
    new_password(password, confirm)
}

pub fn password_change(current: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    required("current_password", current, "Current password")?;
    new_password(password, confirm)?;
    if current == password {
        return Err(ValidationError::new(
            "password",
            "New password must differ from the current one",
        ));
    }
    Ok(())
}

pub fn reset_password(token: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    required("token", token, "Reset token")?;
    new_password(password, confirm)
}

pub fn customer(input: &NewCustomer) -> Result<(), ValidationError> {
    required("name", &input.name, "Name")?;
    required("phone", &input.phone, "Phone")?;
    if !input
        .phone
        .chars()
        .all(|c| c.is_ascii_digit() || " +-()".contains(c))
    {
        return Err(ValidationError::new("phone", "Phone may only contain digits"));
    }
    match input.email.as_deref() {
        Some(e) if !e.trim().is_empty() => email(e),
        _ => Ok(()),
    }
}

/// Booking form: all three pieces present and the slot not in the past.
pub fn appointment(
    customer_id: Option<i64>,
    doctor_id: Option<i64>,
    slot: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<(i64, i64, NaiveDateTime), ValidationError> {
    let customer_id =
        customer_id.ok_or_else(|| ValidationError::new("customer", "Choose a patient"))?;
    let doctor_id = doctor_id.ok_or_else(|| ValidationError::new("doctor", "Choose a doctor"))?;
    let slot = slot.ok_or_else(|| ValidationError::new("scheduled_at", "Choose a date and time"))?;
    if slot < now {
        return Err(ValidationError::new(
            "scheduled_at",
            "Appointments cannot be booked in the past",
        ));
    }
    Ok((customer_id, doctor_id, slot))
}

pub fn medical_record(input: &MedicalRecordInput) -> Result<(), ValidationError> {
    if input.customer_id <= 0 {
        return Err(ValidationError::new("customer", "Choose a patient"));
    }
    required("diagnosis", &input.diagnosis, "Diagnosis")
}

pub fn prescription(input: &PrescriptionInput) -> Result<(), ValidationError> {
    if input.customer_id <= 0 {
        return Err(ValidationError::new("customer", "Choose a patient"));
    }
    if input.medication_id <= 0 {
        return Err(ValidationError::new("medication", "Choose a medication"));
    }
    required("dosage", &input.dosage, "Dosage")?;
    required("frequency", &input.frequency, "Frequency")?;
    if input.duration_days == 0 {
        return Err(ValidationError::new(
            "duration_days",
            "Duration must be at least one day",
        ));
    }
    Ok(())
}

pub fn lab_test(input: &LabTestInput) -> Result<(), ValidationError> {
    if input.customer_id <= 0 {
        return Err(ValidationError::new("customer", "Choose a patient"));
    }
    if input.test_type_id <= 0 {
        return Err(ValidationError::new("test_type", "Choose a test type"));
    }
    Ok(())
}

pub fn schedule(input: &ScheduleInput) -> Result<(), ValidationError> {
    if input.doctor_id <= 0 {
        return Err(ValidationError::new("doctor", "Choose a doctor"));
    }
    if input.weekday > 6 {
        return Err(ValidationError::new("weekday", "Choose a weekday"));
    }
    if input.start_time >= input.end_time {
        return Err(ValidationError::new("end_time", "End time must be after start time"));
    }
    Ok(())
}

pub fn payment(description: &str, amount_cents: Option<i64>) -> Result<i64, ValidationError> {
    required("description", description, "Description")?;
    match amount_cents {
        Some(cents) if cents > 0 => Ok(cents),
        _ => Err(ValidationError::new("amount", "Enter an amount greater than zero")),
    }
}

/// Value of an `<input type="datetime-local">` (`2026-05-04T09:30`).
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// `<select>` value to an id; empty or non-numeric means "none chosen".
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        parse_datetime_local("2026-05-01T08:00").unwrap()
    }

    #[test]
    fn test_login_rules() {
        assert!(login("a@b.c", "x").is_ok());
        assert_eq!(login("nope", "x").unwrap_err().field, "email");
        assert_eq!(login("@b.c", "x").unwrap_err().field, "email");
        assert_eq!(login("a@b.c", "  ").unwrap_err().field, "password");
    }

    #[test]
    fn test_registration_rules() {
        assert!(registration("Mo", "mo@x.io", "longenough", "longenough").is_ok());
        assert_eq!(
            registration("", "mo@x.io", "longenough", "longenough").unwrap_err().field,
            "name"
        );
        let err = registration("Mo", "mo@x.io", "short", "short").unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
        assert_eq!(
            registration("Mo", "mo@x.io", "longenough", "different").unwrap_err().field,
            "confirm_password"
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 5 characters, 10 bytes
        let err = registration("Mo", "mo@x.io", "ééééé", "ééééé").unwrap_err();
        assert_eq!(err.field, "password");
        assert!(registration("Mo", "mo@x.io", "éééééééé", "éééééééé").is_ok());
    }

    #[test]
    fn test_reset_password_rules() {
        assert!(reset_password("abc123", "longenough", "longenough").is_ok());
        assert_eq!(
            reset_password("  ", "longenough", "longenough").unwrap_err().field,
            "token"
        );
        assert_eq!(
            reset_password("abc123", "short", "short").unwrap_err().field,
            "password"
        );
    }

    #[test]
    fn test_password_change_must_differ() {
        assert!(password_change("oldpassword", "newpassword", "newpassword").is_ok());
        assert_eq!(
            password_change("samepassword", "samepassword", "samepassword")
                .unwrap_err()
                .field,
            "password"
        );
        assert_eq!(
            password_change("", "newpassword", "newpassword").unwrap_err().field,
            "current_password"
        );
    }

    #[test]
    fn test_customer_rules() {
        let mut input = NewCustomer {
            name: "Lena Fox".to_string(),
            phone: "+1 (555) 010-2000".to_string(),
            ..Default::default()
        };
        assert!(customer(&input).is_ok());
        input.email = Some("bad".to_string());
        assert_eq!(customer(&input).unwrap_err().field, "email");
        input.email = Some(String::new());
        input.phone = "call me".to_string();
        assert_eq!(customer(&input).unwrap_err().field, "phone");
    }

    #[test]
    fn test_appointment_rules() {
        let slot = parse_datetime_local("2026-05-02T10:00");
        assert_eq!(
            appointment(Some(1), Some(2), slot, now()).unwrap(),
            (1, 2, slot.unwrap())
        );
        assert_eq!(appointment(None, Some(2), slot, now()).unwrap_err().field, "customer");
        assert_eq!(appointment(Some(1), None, slot, now()).unwrap_err().field, "doctor");
        assert_eq!(
            appointment(Some(1), Some(2), None, now()).unwrap_err().field,
            "scheduled_at"
        );
        let past = parse_datetime_local("2026-04-30T10:00");
        assert_eq!(
            appointment(Some(1), Some(2), past, now()).unwrap_err().field,
            "scheduled_at"
        );
    }

    #[test]
    fn test_clinical_rules() {
        let mut rx = PrescriptionInput {
            customer_id: 1,
            doctor_id: 2,
            medication_id: 3,
            dosage: "500mg".to_string(),
            frequency: "twice daily".to_string(),
            duration_days: 7,
            ..Default::default()
        };
        assert!(prescription(&rx).is_ok());
        rx.duration_days = 0;
        assert_eq!(prescription(&rx).unwrap_err().field, "duration_days");
        rx.medication_id = 0;
        assert_eq!(prescription(&rx).unwrap_err().field, "medication");

        let record = MedicalRecordInput {
            customer_id: 1,
            doctor_id: 2,
            diagnosis: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(medical_record(&record).unwrap_err().field, "diagnosis");

        let lab = LabTestInput {
            customer_id: 1,
            doctor_id: 2,
            ..Default::default()
        };
        assert_eq!(lab_test(&lab).unwrap_err().field, "test_type");
    }

    #[test]
    fn test_schedule_and_payment_rules() {
        let block = ScheduleInput {
            doctor_id: 1,
            clinic_id: None,
            weekday: 2,
            start_time: parse_time("09:00").unwrap(),
            end_time: parse_time("09:00").unwrap(),
        };
        assert_eq!(schedule(&block).unwrap_err().field, "end_time");

        let sunday_plus_one = ScheduleInput {
            weekday: 7,
            end_time: parse_time("17:00").unwrap(),
            ..block.clone()
        };
        assert_eq!(schedule(&sunday_plus_one).unwrap_err().field, "weekday");
        let valid = ScheduleInput {
            weekday: 6,
            ..sunday_plus_one
        };
        assert!(schedule(&valid).is_ok());

        assert_eq!(payment("Rent", Some(100)).unwrap(), 100);
        assert_eq!(payment("Rent", Some(0)).unwrap_err().field, "amount");
        assert_eq!(payment("", Some(5)).unwrap_err().field, "description");
    }

    #[test]
    fn test_form_value_parsers() {
        assert!(parse_datetime_local("2026-05-04T09:30").is_some());
        assert!(parse_datetime_local("2026-05-04T09:30:15").is_some());
        assert!(parse_datetime_local("tomorrow").is_none());
        assert_eq!(parse_time("17:45:00"), parse_time("17:45"));
        assert!(parse_date("2026-02-30").is_none());
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("0"), None);
    }
}
