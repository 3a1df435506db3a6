//! Aggregation of the period, allowance and settlement progress for collaborators.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::allowance::{compute_allowance, Allowance};
use crate::domain::BudgetState;
use crate::period::{resolve_period, schedule, Period, ScheduledTransaction};

/// Everything a presentation layer needs to render the current period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub today: NaiveDate,
    pub period: Period,
    pub balance: f64,
    pub allowance: Allowance,
    pub settled_count: usize,
    pub pending_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Summarizes `state` for the period containing `today`.
    ///
    /// Expects the rollover check to have run for `today` already.
    pub fn summarize(state: &BudgetState, today: NaiveDate) -> PeriodSummary {
        let start_day = state.settings.start_day;
        let period = resolve_period(today, start_day);
        let allowance = compute_allowance(
            state.balance,
            &state.transactions,
            &period,
            start_day,
            today,
        );
        let settled_count = state.transactions.iter().filter(|txn| txn.settled).count();
        PeriodSummary {
            today,
            period,
            balance: state.balance,
            allowance,
            settled_count,
            pending_count: state.transactions.len() - settled_count,
        }
    }

    /// Transactions in the order they fall due within the period containing `today`.
    pub fn schedule(state: &BudgetState, today: NaiveDate) -> Vec<ScheduledTransaction<'_>> {
        let start_day = state.settings.start_day;
        let period = resolve_period(today, start_day);
        schedule(&state.transactions, &period, start_day)
    }
}
