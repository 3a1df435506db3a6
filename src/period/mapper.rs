use chrono::NaiveDate;

use super::calendar::{clamped_date, next_month};
use super::resolver::Period;
use crate::domain::Transaction;

/// A transaction paired with the concrete date it falls on in the current period.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTransaction<'a> {
    pub transaction: &'a Transaction,
    pub date: NaiveDate,
}

/// Maps a nominal day-of-month onto its concrete date inside `period`.
///
/// Days on or after `start_day` fall in the month the period starts in; earlier
/// days fall in the following month. The day is clamped against whichever
/// month it lands in.
pub fn map_transaction_date(day_of_month: u32, period: &Period, start_day: u32) -> NaiveDate {
    let (year, month) = period.start_month();
    if day_of_month >= start_day {
        clamped_date(day_of_month, year, month)
    } else {
        let (year, month) = next_month(year, month);
        clamped_date(day_of_month, year, month)
    }
}

/// Orders transactions by the date they fall on in `period`.
pub fn schedule<'a>(
    transactions: &'a [Transaction],
    period: &Period,
    start_day: u32,
) -> Vec<ScheduledTransaction<'a>> {
    let mut rows: Vec<ScheduledTransaction<'a>> = transactions
        .iter()
        .map(|transaction| ScheduledTransaction {
            transaction,
            date: map_transaction_date(transaction.day_of_month, period, start_day),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.transaction.title.cmp(&b.transaction.title))
            .then_with(|| a.transaction.id.cmp(&b.transaction.id))
    });
    rows
}
