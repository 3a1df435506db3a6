//! Plain data types shared by the period engine, the services, and storage.
//! No I/O lives here.

pub mod common;
pub mod settings;
pub mod state;
pub mod transaction;

pub use common::{Displayable, Identifiable};
pub use settings::{is_valid_day, Settings, DEFAULT_START_DAY, MAX_DAY_OF_MONTH, MIN_DAY_OF_MONTH};
pub use state::BudgetState;
pub use transaction::{Transaction, TransactionKind};
