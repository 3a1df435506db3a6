//! Budget engine: rollover detection, allowance projection, the mutation
//! services and the controller that drives them.

pub mod allowance;
pub mod controller;
pub mod rollover;
pub mod services;
pub mod time;

pub use allowance::{compute_allowance, Allowance};
pub use controller::BudgetController;
pub use rollover::{check_rollover, RolloverOutcome};
pub use time::{Clock, FixedClock, SystemClock};
