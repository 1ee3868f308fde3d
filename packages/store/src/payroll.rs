//! Monthly payroll figures for the accounting dashboard.

use serde::{Deserialize, Serialize};

use crate::config::PayrollConfig;
use crate::models::PayrollEntry;
use crate::role::Role;

/// Computed pay for one staff member. Amounts are in cents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    pub staff_id: i64,
    pub staff_name: String,
    pub role: Role,
    pub base_cents: i64,
    pub overtime_hours: f64,
    pub overtime_cents: i64,
    pub bonus_cents: i64,
    pub gross_cents: i64,
    pub tax_cents: i64,
    pub deductions_cents: i64,
    pub net_cents: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollTotals {
    pub headcount: usize,
    pub gross_cents: i64,
    pub tax_cents: i64,
    pub deductions_cents: i64,
    pub net_cents: i64,
}

/// Hours beyond `standard_hours` are paid at `hourly_rate × overtime_multiplier`.
/// Tax applies to gross; deductions come off after tax.
pub fn compute(entry: &PayrollEntry, config: &PayrollConfig) -> PayrollLine {
    let overtime_hours = (entry.hours_worked - config.standard_hours).max(0.0);
    let overtime_cents =
        (overtime_hours * entry.hourly_rate_cents as f64 * config.overtime_multiplier).round() as i64;
    let gross_cents = entry.base_salary_cents + overtime_cents + entry.bonus_cents;
    let tax_cents = (gross_cents as f64 * config.tax_rate).round() as i64;
    PayrollLine {
        staff_id: entry.staff_id,
        staff_name: entry.staff_name.clone(),
        role: entry.role,
        base_cents: entry.base_salary_cents,
        overtime_hours,
        overtime_cents,
        bonus_cents: entry.bonus_cents,
        gross_cents,
        tax_cents,
        deductions_cents: entry.deductions_cents,
        net_cents: gross_cents - tax_cents - entry.deductions_cents,
    }
}

pub fn compute_all(entries: &[PayrollEntry], config: &PayrollConfig) -> Vec<PayrollLine> {
    entries.iter().map(|e| compute(e, config)).collect()
}

pub fn totals(lines: &[PayrollLine]) -> PayrollTotals {
    lines.iter().fold(
        PayrollTotals {
            headcount: lines.len(),
            ..Default::default()
        },
        |mut acc, line| {
            acc.gross_cents += line.gross_cents;
            acc.tax_cents += line.tax_cents;
            acc.deductions_cents += line.deductions_cents;
            acc.net_cents += line.net_cents;
            acc
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hours: f64) -> PayrollEntry {
        PayrollEntry {
            staff_id: 1,
            staff_name: "Ivy Chen".to_string(),
            role: Role::Doctor,
            base_salary_cents: 500_000,
            hours_worked: hours,
            hourly_rate_cents: 2_000,
            bonus_cents: 10_000,
            deductions_cents: 5_000,
        }
    }

    #[test]
    fn test_overtime_tax_and_net() {
        let line = compute(&entry(170.0), &PayrollConfig::default());
        assert_eq!(line.overtime_hours, 10.0);
        assert_eq!(line.overtime_cents, 30_000);
        assert_eq!(line.gross_cents, 540_000);
        assert_eq!(line.tax_cents, 54_000);
        assert_eq!(line.net_cents, 481_000);
    }

    #[test]
    fn test_no_overtime_under_standard_hours() {
        let line = compute(&entry(120.0), &PayrollConfig::default());
        assert_eq!(line.overtime_hours, 0.0);
        assert_eq!(line.overtime_cents, 0);
        assert_eq!(line.gross_cents, 510_000);
    }

    #[test]
    fn test_totals_sum_lines() {
        let config = PayrollConfig::default();
        let lines = compute_all(&[entry(170.0), entry(120.0)], &config);
        let sum = totals(&lines);
        assert_eq!(sum.headcount, 2);
        assert_eq!(sum.gross_cents, 1_050_000);
        assert_eq!(sum.net_cents, lines[0].net_cents + lines[1].net_cents);
        assert_eq!(totals(&[]), PayrollTotals::default());
    }
}
