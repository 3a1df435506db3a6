//! Detects the transition into a new budget period and resets settlement.

use chrono::NaiveDate;

use crate::domain::BudgetState;
use crate::period::resolve_period;

/// Result of comparing the persisted period key against the current period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RolloverOutcome {
    Unchanged,
    RolledOver {
        previous: Option<String>,
        current: String,
        /// Number of transactions whose settlement flag was cleared.
        reset: usize,
    },
}

impl RolloverOutcome {
    pub fn rolled_over(&self) -> bool {
        matches!(self, RolloverOutcome::RolledOver { .. })
    }
}

/// Clears every settlement flag when `today` belongs to a period other than the
/// one last observed, then records the new period key on `state`.
///
/// Running it again within the same period leaves `state` untouched.
pub fn check_rollover(state: &mut BudgetState, today: NaiveDate) -> RolloverOutcome {
    let current = resolve_period(today, state.settings.start_day).key;
    if state.period_key.as_deref() == Some(current.as_str()) {
        return RolloverOutcome::Unchanged;
    }

    let mut reset = 0;
    for txn in state.transactions.iter_mut().filter(|txn| txn.settled) {
        txn.settled = false;
        reset += 1;
    }
    let previous = state.period_key.replace(current.clone());
    tracing::info!(
        previous = previous.as_deref().unwrap_or("none"),
        current = %current,
        reset,
        "budget period rolled over"
    );
    RolloverOutcome::RolledOver {
        previous,
        current,
        reset,
    }
}
