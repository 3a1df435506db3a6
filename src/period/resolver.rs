use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::calendar::{clamped_date, days_between, effective_day, next_month, previous_month};

const PERIOD_KEY_FORMAT: &str = "%Y-%m-%d";

/// A concrete budget period derived from the configured start day.
///
/// Never persisted; only `key` is stored to detect transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub start: NaiveDate,
    /// Inclusive last day of the period.
    pub end: NaiveDate,
    pub key: String,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive number of calendar days covered by the period.
    pub fn length_in_days(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Calendar `(year, month)` of the period start.
    pub fn start_month(&self) -> (i32, u32) {
        (self.start.year(), self.start.month())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// Resolves the period containing `today` for a period beginning on `start_day`.
pub fn resolve_period(today: NaiveDate, start_day: u32) -> Period {
    let (mut year, mut month) = (today.year(), today.month());
    if today.day() < effective_day(start_day, year, month) {
        (year, month) = previous_month(year, month);
    }

    let start = clamped_date(start_day, year, month);
    let (next_year, next_month) = next_month(year, month);
    let next_start = clamped_date(start_day, next_year, next_month);
    let end = next_start.pred_opt().unwrap_or(next_start);

    let period = Period {
        start,
        end,
        key: period_key(start),
    };
    tracing::debug!(
        %today,
        start_day,
        period = %period,
        days = period.length_in_days(),
        "resolved budget period"
    );
    period
}

/// Canonical identifier for the period starting on `start`.
pub fn period_key(start: NaiveDate) -> String {
    start.format(PERIOD_KEY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_day_one_matches_calendar_month() {
        let period = resolve_period(date(2024, 2, 15), 1);
        assert_eq!(period.start, date(2024, 2, 1));
        assert_eq!(period.end, date(2024, 2, 29));
        assert_eq!(period.key, "2024-02-01");
    }

    #[test]
    fn payday_period_spans_month_boundary() {
        let period = resolve_period(date(2024, 3, 10), 25);
        assert_eq!(period.start, date(2024, 2, 25));
        assert_eq!(period.end, date(2024, 3, 24));
    }

    #[test]
    fn on_start_day_period_begins_today() {
        let period = resolve_period(date(2024, 3, 25), 25);
        assert_eq!(period.start, date(2024, 3, 25));
        assert_eq!(period.end, date(2024, 4, 24));
    }

    #[test]
    fn january_wraps_into_previous_year() {
        let period = resolve_period(date(2024, 1, 5), 20);
        assert_eq!(period.start, date(2023, 12, 20));
        assert_eq!(period.end, date(2024, 1, 19));
        assert_eq!(period.key, "2023-12-20");
    }

    #[test]
    fn short_months_clamp_start_boundary() {
        // 31 in a 30-day month starts on the 30th.
        let period = resolve_period(date(2024, 4, 30), 31);
        assert_eq!(period.start, date(2024, 4, 30));
        assert_eq!(period.end, date(2024, 5, 30));

        let period = resolve_period(date(2023, 2, 28), 30);
        assert_eq!(period.start, date(2023, 2, 28));
        assert_eq!(period.end, date(2023, 3, 29));
    }

    #[test]
    fn end_crosses_into_prior_month_when_next_start_is_first() {
        let period = resolve_period(date(2024, 12, 31), 1);
        assert_eq!(period.end, date(2024, 12, 31));
        assert_eq!(period.end + Duration::days(1), date(2025, 1, 1));
    }

    #[test]
    fn resolved_period_always_contains_today() {
        let mut today = date(2023, 1, 1);
        let last = date(2025, 1, 1);
        while today <= last {
            for start_day in 1..=31 {
                let period = resolve_period(today, start_day);
                assert!(
                    period.contains(today),
                    "{today} not in {period} for start day {start_day}"
                );
            }
            today += Duration::days(1);
        }
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let period = resolve_period(date(2024, 3, 10), 25);
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
        assert!(!period.contains(period.start - Duration::days(1)));
        assert!(!period.contains(period.end + Duration::days(1)));
    }

    #[test]
    fn consecutive_periods_tile_without_gaps() {
        for start_day in [1, 15, 28, 29, 30, 31] {
            let current = resolve_period(date(2024, 1, 20), start_day);
            let next = resolve_period(current.end + Duration::days(1), start_day);
            assert_eq!(next.start, current.end + Duration::days(1));
            assert_ne!(next.key, current.key);
        }
    }

    #[test]
    fn key_is_stable_within_a_period() {
        let period = resolve_period(date(2024, 3, 10), 25);
        let mut day = period.start;
        while day <= period.end {
            assert_eq!(resolve_period(day, 25).key, period.key);
            day += Duration::days(1);
        }
    }
}
