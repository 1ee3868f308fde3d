//! Static figures behind the accounting and executive screens.
//!
//! The backend exposes no payroll or payment endpoints, so these screens work
//! from this seed and keep locally added entries in component state.

use chrono::NaiveDate;

use crate::models::{Payment, PaymentKind, PayrollEntry};
use crate::role::Role;

pub fn payroll_entries() -> Vec<PayrollEntry> {
    vec![
        PayrollEntry {
            staff_id: 1,
            staff_name: "Dr. Amelia Okafor".to_string(),
            role: Role::Doctor,
            base_salary_cents: 1_200_000,
            hours_worked: 172.0,
            hourly_rate_cents: 7_500,
            bonus_cents: 50_000,
            deductions_cents: 12_000,
        },
        PayrollEntry {
            staff_id: 2,
            staff_name: "Dr. Henrik Lindqvist".to_string(),
            role: Role::Doctor,
            base_salary_cents: 1_150_000,
            hours_worked: 160.0,
            hourly_rate_cents: 7_200,
            bonus_cents: 0,
            deductions_cents: 12_000,
        },
        PayrollEntry {
            staff_id: 3,
            staff_name: "Rosa Delgado".to_string(),
            role: Role::Receptionist,
            base_salary_cents: 320_000,
            hours_worked: 168.5,
            hourly_rate_cents: 2_000,
            bonus_cents: 0,
            deductions_cents: 4_500,
        },
        PayrollEntry {
            staff_id: 4,
            staff_name: "Tom Becker".to_string(),
            role: Role::Accountant,
            base_salary_cents: 450_000,
            hours_worked: 150.0,
            hourly_rate_cents: 2_800,
            bonus_cents: 15_000,
            deductions_cents: 6_000,
        },
        PayrollEntry {
            staff_id: 5,
            staff_name: "Priya Raman".to_string(),
            role: Role::Manager,
            base_salary_cents: 680_000,
            hours_worked: 165.0,
            hourly_rate_cents: 4_200,
            bonus_cents: 40_000,
            deductions_cents: 9_000,
        },
    ]
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, d).unwrap_or_default()
}

pub fn payments() -> Vec<Payment> {
    let rows = [
        (1, 1, "Consultation fees, week 1", PaymentKind::Income, 1_845_000, "card"),
        (2, 2, "Clinic rent", PaymentKind::Expense, 950_000, "transfer"),
        (3, 5, "Lab supplies", PaymentKind::Expense, 132_550, "card"),
        (4, 8, "Consultation fees, week 2", PaymentKind::Income, 1_712_500, "card"),
        (5, 12, "Insurance reimbursements", PaymentKind::Income, 640_000, "transfer"),
        (6, 15, "Utilities", PaymentKind::Expense, 88_420, "transfer"),
        (7, 15, "Consultation fees, week 3", PaymentKind::Income, 1_903_000, "card"),
        (8, 20, "Equipment maintenance", PaymentKind::Expense, 215_000, "cash"),
    ];
    rows.into_iter()
        .map(|(id, d, description, kind, amount_cents, method)| Payment {
            id,
            date: day(d),
            description: description.to_string(),
            kind,
            amount_cents,
            method: Some(method.to_string()),
        })
        .collect()
}
