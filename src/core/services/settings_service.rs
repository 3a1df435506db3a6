use crate::domain::{is_valid_day, BudgetState, Settings};
use crate::errors::{BudgetError, Result};

pub struct SettingsService;

impl SettingsService {
    /// Changes the period start day. Period boundaries are derived, so the next
    /// rollover check picks the change up through the period key.
    pub fn update(state: &mut BudgetState, start_day: u32) -> Result<()> {
        if !is_valid_day(start_day) {
            return Err(BudgetError::Validation(format!(
                "start day {start_day} must be between 1 and 31"
            )));
        }
        state.settings = Settings::new(start_day);
        Ok(())
    }
}
