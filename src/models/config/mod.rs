//! Countdown configuration.
//!
//! Set once at startup (from defaults or a settings file) and read-only for
//! the rest of the run. [`CountdownConfig::validate`] must pass before the
//! engine uses it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::holiday::HolidayTable;
use super::mode::CountdownMode;
use crate::services::countdown::CountdownError;
use crate::utils::date::days_in_month;

/// Checks a recurring month/day. February 29 is accepted since it exists in
/// leap years.
pub(crate) fn validate_month_day(month: u32, day: u32) -> Result<(), String> {
    // 2000 is a leap year, so February allows 29
    let max_day =
        days_in_month(month, 2000).ok_or_else(|| format!("month {month} is not in 1..=12"))?;
    if day == 0 || day > max_day {
        return Err(format!("day {day} is not in 1..={max_day} for month {month}"));
    }
    Ok(())
}

/// Working hours, 24h clock. Only the end hour feeds a countdown today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WorkHours {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

/// A month/day pair with no year, e.g. a birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// A calendar date with a year, e.g. the day a job started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl StartDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for StartDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month(), date.day())
    }
}

/// Everything the countdown card needs to know about its user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    pub workday: WorkHours,
    pub birthday: MonthDay,
    pub start_date: StartDate,
    /// Reserved. No countdown is derived from it.
    pub life_expectancy_years: u32,
    pub holidays: HolidayTable,
    /// Mode shown when the card first draws.
    pub initial_mode: CountdownMode,
    /// Button index that cycles the mode (1 is the centre button).
    pub cycle_button: u8,
    pub refresh_interval_secs: u64,
    /// Clock readings before this year are treated as an unset clock.
    pub min_valid_year: i32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            workday: WorkHours::default(),
            birthday: MonthDay::new(6, 15),
            start_date: StartDate::new(2024, 1, 15),
            life_expectancy_years: 80,
            holidays: HolidayTable::default(),
            initial_mode: CountdownMode::default(),
            cycle_button: 1,
            refresh_interval_secs: 1,
            min_valid_year: 2020,
        }
    }
}

impl CountdownConfig {
    /// Validate ranges of every configured date and hour.
    pub fn validate(&self) -> Result<(), CountdownError> {
        let WorkHours {
            start_hour,
            end_hour,
        } = self.workday;
        if start_hour > 23 {
            return Err(CountdownError::invalid(format!(
                "workday start hour {start_hour} is not in 0..=23"
            )));
        }
        if end_hour > 23 {
            return Err(CountdownError::invalid(format!(
                "workday end hour {end_hour} is not in 0..=23"
            )));
        }
        if start_hour > end_hour {
            return Err(CountdownError::invalid(format!(
                "workday starts at {start_hour} but ends at {end_hour}"
            )));
        }

        validate_month_day(self.birthday.month, self.birthday.day)
            .map_err(|reason| CountdownError::invalid(format!("birthday: {reason}")))?;

        if self.start_date.to_date().is_none() {
            let StartDate { year, month, day } = self.start_date;
            return Err(CountdownError::invalid(format!(
                "start date {year:04}-{month:02}-{day:02} does not exist"
            )));
        }

        if self.holidays.is_empty() {
            return Err(CountdownError::invalid("holiday table needs at least one entry"));
        }
        for holiday in self.holidays.iter() {
            holiday.validate()?;
        }

        if self.refresh_interval_secs == 0 {
            return Err(CountdownError::invalid("refresh interval must be at least 1 second"));
        }

        Ok(())
    }

    /// The start date as a calendar date. Only valid after [`Self::validate`].
    pub fn start_day(&self) -> Result<NaiveDate, CountdownError> {
        self.start_date
            .to_date()
            .ok_or_else(|| CountdownError::invalid("start date does not exist"))
    }
}
