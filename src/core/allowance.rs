//! Projects the remaining balance over the rest of the period.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};
use crate::period::{calendar::days_between, map_transaction_date, Period};

/// Daily allowance projection for the current period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allowance {
    /// Balance after applying every unsettled in-period transaction.
    pub remaining: f64,
    pub days_left: i64,
    /// `remaining / days_left`, unrounded.
    pub daily_allowance: f64,
    pub pending_debits: f64,
    pub pending_credits: f64,
}

/// Days used as the allowance denominator.
///
/// Whole days from `today` to the inclusive `end`, excluding today, never below 1.
pub fn days_left(end: NaiveDate, today: NaiveDate) -> i64 {
    days_between(today, end).max(1)
}

/// Computes the allowance for `today` from the balance baseline and transactions.
pub fn compute_allowance(
    balance: f64,
    transactions: &[Transaction],
    period: &Period,
    start_day: u32,
    today: NaiveDate,
) -> Allowance {
    let mut remaining = balance;
    let mut pending_debits = 0.0;
    let mut pending_credits = 0.0;

    for txn in transactions.iter().filter(|txn| !txn.settled) {
        let date = map_transaction_date(txn.day_of_month, period, start_day);
        if !period.contains(date) {
            continue;
        }
        remaining = txn.kind.apply(remaining, txn.amount);
        match txn.kind {
            TransactionKind::Debit => pending_debits += txn.amount,
            TransactionKind::Credit => pending_credits += txn.amount,
        }
    }

    let days_left = days_left(period.end, today);
    let daily_allowance = remaining / days_left as f64;
    tracing::debug!(
        remaining,
        days_left,
        daily_allowance,
        period = %period.key,
        "projected daily allowance"
    );

    Allowance {
        remaining,
        days_left,
        daily_allowance,
        pending_debits,
        pending_credits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::resolve_period;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn balance_spread_over_ten_days() {
        let today = date(2024, 6, 20);
        let period = resolve_period(today, 1);
        assert_eq!(period.end, date(2024, 6, 30));

        let allowance = compute_allowance(1000.0, &[], &period, 1, today);
        assert_eq!(allowance.days_left, 10);
        assert!(approx(allowance.daily_allowance, 100.0));
    }

    #[test]
    fn clamped_leap_day_debit_is_projected() {
        let today = date(2024, 2, 15);
        let period = resolve_period(today, 1);
        let rent = Transaction::new("Rent", 300.0, TransactionKind::Debit, 31);

        let allowance = compute_allowance(1000.0, &[rent], &period, 1, today);
        assert!(approx(allowance.remaining, 700.0));
        assert!(approx(allowance.pending_debits, 300.0));
        assert_eq!(allowance.days_left, 14);
        assert!(approx(allowance.daily_allowance, 50.0));
    }

    #[test]
    fn settled_transactions_are_excluded() {
        let today = date(2024, 3, 10);
        let period = resolve_period(today, 25);
        let transactions = vec![
            Transaction::new("Rent", 900.0, TransactionKind::Debit, 1).with_settled(true),
            Transaction::new("Phone", 40.0, TransactionKind::Debit, 5),
            Transaction::new("Refund", 15.0, TransactionKind::Credit, 20),
        ];

        let allowance = compute_allowance(1000.0, &transactions, &period, 25, today);
        assert!(approx(allowance.remaining, 975.0));
        assert!(approx(allowance.pending_credits, 15.0));
    }

    #[test]
    fn transactions_past_period_end_are_excluded() {
        // Period 2024-01-31..2024-02-28; day 30 maps to 2024-02-29.
        let today = date(2024, 2, 10);
        let period = resolve_period(today, 31);
        let late = Transaction::new("Late", 50.0, TransactionKind::Debit, 30);

        let allowance = compute_allowance(100.0, &[late], &period, 31, today);
        assert!(approx(allowance.remaining, 100.0));
        assert!(approx(allowance.pending_debits, 0.0));
    }

    #[test]
    fn last_day_of_period_keeps_denominator_positive() {
        let period = resolve_period(date(2024, 3, 10), 25);
        assert_eq!(days_left(period.end, period.end), 1);
        assert_eq!(days_left(period.end, period.end - Duration::days(1)), 1);
        assert_eq!(days_left(period.end, period.end - Duration::days(2)), 2);
    }

    #[test]
    fn raising_balance_raises_allowance_proportionally() {
        let today = date(2024, 3, 10);
        let period = resolve_period(today, 25);
        let transactions = vec![Transaction::new("Phone", 40.0, TransactionKind::Debit, 5)];

        let base = compute_allowance(800.0, &transactions, &period, 25, today);
        let raised = compute_allowance(800.0 + 140.0, &transactions, &period, 25, today);
        assert!(approx(
            raised.daily_allowance - base.daily_allowance,
            140.0 / base.days_left as f64
        ));
    }

    #[test]
    fn negative_remaining_is_reported_unrounded() {
        let today = date(2024, 6, 27);
        let period = resolve_period(today, 1);
        let debt = Transaction::new("Card", 130.0, TransactionKind::Debit, 28);

        let allowance = compute_allowance(30.0, &[debt], &period, 1, today);
        assert_eq!(allowance.days_left, 3);
        assert!(approx(allowance.daily_allowance, -100.0 / 3.0));
    }
}
