use serde::{Deserialize, Serialize};

pub const MIN_DAY_OF_MONTH: u32 = 1;
pub const MAX_DAY_OF_MONTH: u32 = 31;
pub const DEFAULT_START_DAY: u32 = 1;

/// User-owned budgeting preferences that persist across periods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Day of the month on which a new budget period begins.
    pub start_day: u32,
}

impl Settings {
    pub fn new(start_day: u32) -> Self {
        Self { start_day }
    }

    pub fn is_valid(&self) -> bool {
        is_valid_day(self.start_day)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_day: DEFAULT_START_DAY,
        }
    }
}

/// Returns true when `day` is a nominal day-of-month in `[1, 31]`.
pub fn is_valid_day(day: u32) -> bool {
    (MIN_DAY_OF_MONTH..=MAX_DAY_OF_MONTH).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_matches_calendar_month() {
        assert_eq!(Settings::default().start_day, 1);
        assert!(Settings::default().is_valid());
    }

    #[test]
    fn serializes_with_camel_case_key() {
        let json = serde_json::to_string(&Settings::new(25)).unwrap();
        assert_eq!(json, r#"{"startDay":25}"#);
    }

    #[test]
    fn rejects_days_outside_month_range() {
        assert!(!Settings::new(0).is_valid());
        assert!(!Settings::new(32).is_valid());
        assert!(Settings::new(31).is_valid());
    }
}
