#![doc(test(attr(deny(warnings))))]

//! Payday Budget computes a daily spending allowance over pay periods that start
//! on a user-chosen day of the month, tracking recurring debits and credits and
//! their settlement within the current period.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod period;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::config::AppConfig;
pub use crate::core::services::{PeriodSummary, TransactionInput};
pub use crate::core::{Allowance, BudgetController, Clock, FixedClock, SystemClock};
pub use crate::domain::{BudgetState, Settings, Transaction, TransactionKind};
pub use crate::errors::{BudgetError, FormatError, Result};
pub use crate::period::Period;
pub use crate::storage::{BudgetStore, JsonFileStore, KeyValueStore, MemoryStore};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log with build metadata.
pub fn init() {
    init_with_filter(utils::DEFAULT_LOG_FILTER);
}

/// Same as [`init`], using the log filter from `config` when `RUST_LOG` is unset.
pub fn init_with_config(config: &AppConfig) {
    init_with_filter(&config.log_filter);
}

fn init_with_filter(filter: &str) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing_with(filter);
        let build = utils::build_info::current();
        tracing::info!(build = %build.summary(), "Payday Budget tracing initialized.");
    });
}
