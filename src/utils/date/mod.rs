// Date utility functions

use chrono::{Datelike, Local, NaiveDate};

/// Source of "today" for draft resets
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen on a single date, for tests and demos
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Move `date` by `delta` months, clamping the day to the target month length
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = date.year() * 12 + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(date)
}

/// Get the number of days in a given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Format `date` with a user-supplied chrono pattern.
///
/// Falls back to ISO format when the pattern contains an invalid specifier,
/// since chrono reports that lazily through `fmt::Error`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(ymd(2025, 1, 31), 1), ymd(2025, 2, 28));
        assert_eq!(shift_month(ymd(2024, 1, 31), 1), ymd(2024, 2, 29));
    }

    #[test]
    fn test_shift_month_crosses_year() {
        assert_eq!(shift_month(ymd(2025, 12, 15), 1), ymd(2026, 1, 15));
        assert_eq!(shift_month(ymd(2025, 1, 15), -1), ymd(2024, 12, 15));
        assert_eq!(shift_month(ymd(2025, 6, 15), -18), ymd(2023, 12, 15));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn test_format_date_matches_to_date_string() {
        assert_eq!(format_date(ymd(2025, 3, 7), "%a %b %d %Y"), "Fri Mar 07 2025");
    }

    #[test]
    fn test_format_date_invalid_pattern_falls_back() {
        assert_eq!(format_date(ymd(2025, 3, 7), "%Q"), "2025-03-07");
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(ymd(2030, 1, 1));
        assert_eq!(clock.today(), ymd(2030, 1, 1));
    }
}
