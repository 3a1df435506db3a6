use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in `month` (1-based) of `year`, leap years included.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = next_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map(|last_current| last_current.day())
        .unwrap_or(28)
}

/// Clamps a nominal day onto `month`, so 31 collapses to the month's last day.
///
/// Applied every time a nominal day is resolved against a month; the result
/// depends on the month and must not be cached.
pub fn effective_day(day: u32, year: i32, month: u32) -> u32 {
    day.min(last_day_of_month(year, month))
}

/// Concrete date of the clamped `day` in `(year, month)`.
pub fn clamped_date(day: u32, year: i32, month: u32) -> NaiveDate {
    let day = effective_day(day.max(1), year, month);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// The calendar month before `(year, month)`, wrapping the year at January.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// The calendar month after `(year, month)`, wrapping the year at December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Whole days from `from` to `to`, negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let diff: Duration = to - from;
    diff.num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_leap(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    #[test]
    fn month_lengths_follow_gregorian_rules() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100, 2400] {
            for month in 1..=12 {
                let expected = match month {
                    2 if is_leap(year) => 29,
                    2 => 28,
                    4 | 6 | 9 | 11 => 30,
                    _ => 31,
                };
                assert_eq!(
                    last_day_of_month(year, month),
                    expected,
                    "{year}-{month:02}"
                );
            }
        }
    }

    #[test]
    fn effective_day_never_exceeds_month_length() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let last = last_day_of_month(year, month);
                for day in 1..=40 {
                    let effective = effective_day(day, year, month);
                    assert!(effective <= last);
                    if day <= last {
                        assert_eq!(effective, day);
                    } else {
                        assert_eq!(effective, last);
                    }
                }
            }
        }
    }

    #[test]
    fn clamp_is_resolved_per_month() {
        assert_eq!(effective_day(31, 2024, 2), 29);
        assert_eq!(effective_day(31, 2023, 2), 28);
        assert_eq!(effective_day(31, 2024, 4), 30);
        assert_eq!(effective_day(31, 2024, 5), 31);
    }

    #[test]
    fn month_stepping_wraps_years() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(previous_month(2024, 7), (2024, 6));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 2), (2024, 3));
    }

    #[test]
    fn clamped_date_lands_on_last_day() {
        assert_eq!(
            clamped_date(31, 2023, 9),
            NaiveDate::from_ymd_opt(2023, 9, 30).unwrap()
        );
    }
}
