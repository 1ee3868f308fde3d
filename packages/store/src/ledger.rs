//! Payment ledger with a running balance.

use crate::models::Payment;

#[derive(Clone, Debug, PartialEq)]
pub struct LedgerRow {
    pub payment: Payment,
    /// Balance after this payment.
    pub balance_cents: i64,
}

/// Payments ordered by date then id, each carrying the running balance.
pub fn rows(payments: &[Payment]) -> Vec<LedgerRow> {
    let mut sorted: Vec<&Payment> = payments.iter().collect();
    sorted.sort_by_key(|p| (p.date, p.id));
    let mut balance = 0;
    sorted
        .into_iter()
        .map(|p| {
            balance += p.signed_amount();
            LedgerRow {
                payment: p.clone(),
                balance_cents: balance,
            }
        })
        .collect()
}

pub fn balance(payments: &[Payment]) -> i64 {
    payments.iter().map(Payment::signed_amount).sum()
}

/// (income, expense) totals, both positive.
pub fn income_and_expense(payments: &[Payment]) -> (i64, i64) {
    payments.iter().fold((0, 0), |(inc, exp), p| {
        let amount = p.signed_amount();
        if amount >= 0 {
            (inc + amount, exp)
        } else {
            (inc, exp - amount)
        }
    })
}

/// Next free id for a locally added payment.
pub fn next_id(payments: &[Payment]) -> i64 {
    payments.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentKind;
    use chrono::NaiveDate;

    fn payment(id: i64, day: u32, kind: PaymentKind, amount: i64) -> Payment {
        Payment {
            id,
            date: NaiveDate::from_ymd_opt(2026, 4, day).unwrap(),
            description: format!("entry {id}"),
            kind,
            amount_cents: amount,
            method: None,
        }
    }

    #[test]
    fn test_running_balance_follows_date_order() {
        let payments = vec![
            payment(3, 10, PaymentKind::Expense, 2_500),
            payment(1, 2, PaymentKind::Income, 10_000),
            payment(2, 10, PaymentKind::Income, 500),
        ];
        let ledger = rows(&payments);
        let ids: Vec<i64> = ledger.iter().map(|r| r.payment.id).collect();
        let balances: Vec<i64> = ledger.iter().map(|r| r.balance_cents).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(balances, vec![10_000, 10_500, 8_000]);
        assert_eq!(balance(&payments), 8_000);
        assert_eq!(income_and_expense(&payments), (10_500, 2_500));
        assert_eq!(next_id(&payments), 4);
        assert_eq!(next_id(&[]), 1);
    }
}
