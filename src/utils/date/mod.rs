// Date utility functions
// Calendar helpers shared by the countdown calculators

use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const SECONDS_PER_DAY: i64 = 86_400;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` when the month is out of range.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let days = *DAYS.get(month.checked_sub(1)? as usize)?;
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(days)
    }
}

/// Whole days from `from` to `to`, computed from elapsed seconds and
/// truncated toward zero. A boundary 23h59m away is 0 days, not 1.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    // Integer division in Rust already truncates toward zero.
    to.signed_duration_since(from).num_seconds() / SECONDS_PER_DAY
}

/// Resolves a recurring month/day in `year`. February 29 in a non-leap
/// year rolls forward to March 1.
pub fn month_day_in_year(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        if month == 2 && day == 29 {
            NaiveDate::from_ymd_opt(year, 3, 1)
        } else {
            None
        }
    })
}

/// Whole days until the next occurrence of a recurring month/day.
///
/// The boundary keeps `now`'s time of day, so the day itself counts as 0.
/// If this year's occurrence has already passed, next year's is used.
pub fn days_until_recurring(now: NaiveDateTime, month: u32, day: u32) -> Option<i64> {
    let this_year = month_day_in_year(now.year(), month, day)?.and_time(now.time());
    let days = whole_days_between(now, this_year);
    if days >= 0 {
        return Some(days);
    }

    let next_year = month_day_in_year(now.year() + 1, month, day)?.and_time(now.time());
    Some(whole_days_between(now, next_year))
}

/// Fractional hours since local midnight, minute resolution.
pub fn hours_into_day(now: NaiveDateTime) -> f64 {
    use chrono::Timelike;
    f64::from(now.hour()) + f64::from(now.minute()) / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
    }

    #[test]
    fn days_in_month_handles_february_and_bounds() {
        assert_eq!(days_in_month(2, 2024), Some(29));
        assert_eq!(days_in_month(2, 2025), Some(28));
        assert_eq!(days_in_month(4, 2025), Some(30));
        assert_eq!(days_in_month(12, 2025), Some(31));
        assert_eq!(days_in_month(0, 2025), None);
        assert_eq!(days_in_month(13, 2025), None);
    }

    #[test]
    fn whole_days_truncates_toward_zero() {
        let now = at(2025, 3, 10, 12, 0, 0);
        assert_eq!(whole_days_between(now, at(2025, 3, 11, 11, 59, 59)), 0);
        assert_eq!(whole_days_between(now, at(2025, 3, 11, 12, 0, 0)), 1);
        assert_eq!(whole_days_between(now, at(2025, 3, 9, 12, 0, 1)), 0);
        assert_eq!(whole_days_between(now, at(2025, 3, 8, 12, 0, 0)), -2);
    }

    #[test]
    fn leap_day_rolls_to_march_first() {
        assert_eq!(
            month_day_in_year(2025, 2, 29),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            month_day_in_year(2024, 2, 29),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(month_day_in_year(2025, 4, 31), None);
    }

    #[test]
    fn recurring_date_today_is_zero() {
        let now = at(2025, 6, 15, 18, 30, 0);
        assert_eq!(days_until_recurring(now, 6, 15), Some(0));
    }

    #[test]
    fn recurring_date_passed_moves_to_next_year() {
        let now = at(2025, 6, 16, 8, 0, 0);
        // 2026 is not a leap year, so a full year minus one day
        assert_eq!(days_until_recurring(now, 6, 15), Some(364));
    }

    #[test]
    fn hours_into_day_ignores_seconds() {
        assert_eq!(hours_into_day(at(2025, 1, 1, 13, 30, 59)), 13.5);
    }
}
