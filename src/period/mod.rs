//! Budget period engine: calendar primitives, period resolution, and the
//! mapping of nominal days onto concrete dates inside a period.

pub mod calendar;
pub mod mapper;
pub mod resolver;

pub use calendar::{clamped_date, effective_day, last_day_of_month, next_month, previous_month};
pub use mapper::{map_transaction_date, schedule, ScheduledTransaction};
pub use resolver::{resolve_period, Period};
