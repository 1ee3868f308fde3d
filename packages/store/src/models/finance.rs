use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Monthly pay inputs for one staff member. Amounts are in cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub staff_id: i64,
    pub staff_name: String,
    pub role: Role,
    pub base_salary_cents: i64,
    pub hours_worked: f64,
    pub hourly_rate_cents: i64,
    #[serde(default)]
    pub bonus_cents: i64,
    #[serde(default)]
    pub deductions_cents: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Income,
    Expense,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentKind::Income => "income",
            PaymentKind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(PaymentKind::Income),
            "expense" => Some(PaymentKind::Expense),
            _ => None,
        }
    }
}

/// One line of the payment ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub kind: PaymentKind,
    /// Always positive; `kind` carries the sign.
    pub amount_cents: i64,
    #[serde(default)]
    pub method: Option<String>,
}

impl Payment {
    pub fn signed_amount(&self) -> i64 {
        match self.kind {
            PaymentKind::Income => self.amount_cents,
            PaymentKind::Expense => -self.amount_cents,
        }
    }
}
