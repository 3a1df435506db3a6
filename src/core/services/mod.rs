//! Validated mutation boundary over [`BudgetState`](crate::domain::BudgetState).
//!
//! Every operation either applies completely or returns an error and leaves the
//! state untouched.

pub mod balance_service;
pub mod settings_service;
pub mod summary_service;
pub mod transaction_service;

pub use balance_service::BalanceService;
pub use settings_service::SettingsService;
pub use summary_service::{PeriodSummary, SummaryService};
pub use transaction_service::{TransactionInput, TransactionService};
