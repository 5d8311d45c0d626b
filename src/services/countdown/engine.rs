//! Countdown calculations.
//!
//! Every calculator takes the current local time explicitly so it can be
//! exercised without a real clock. Day counts come from elapsed seconds
//! divided by 86,400 and truncated, not from calendar-day differences.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::clock::Clock;
use super::error::CountdownError;
use crate::models::config::CountdownConfig;
use crate::models::mode::CountdownMode;
use crate::utils::date::{days_until_recurring, hours_into_day, whole_days_between};

/// Friday, counting Sunday as 0.
const FRIDAY: i64 = 5;
/// The week ends at 17:00 on Friday.
const WEEKEND_HOUR: f64 = 17.0;

/// Numeric part of a countdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountdownValue {
    /// Shown with one decimal place.
    Fractional(f64),
    Whole(i64),
}

impl CountdownValue {
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Fractional(value) => value,
            Self::Whole(value) => value as f64,
        }
    }
}

impl std::fmt::Display for CountdownValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fractional(value) => write!(f, "{value:.1}"),
            Self::Whole(value) => write!(f, "{value}"),
        }
    }
}

/// One computed countdown. Built fresh for every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownResult {
    pub mode: CountdownMode,
    pub value: CountdownValue,
    pub unit: &'static str,
    /// Extra line for the display, e.g. the holiday's name.
    pub context: Option<String>,
}

impl CountdownResult {
    fn new(mode: CountdownMode, value: CountdownValue) -> Self {
        Self {
            mode,
            value,
            unit: mode.unit(),
            context: None,
        }
    }
}

/// Computes the countdown for `mode` at local time `now`.
pub fn compute(
    mode: CountdownMode,
    config: &CountdownConfig,
    now: NaiveDateTime,
) -> Result<CountdownResult, CountdownError> {
    let result = match mode {
        CountdownMode::EndOfWorkday => CountdownResult::new(
            mode,
            CountdownValue::Fractional(hours_until_end_of_workday(config.workday.end_hour, now)),
        ),
        CountdownMode::EndOfWeek => {
            CountdownResult::new(mode, CountdownValue::Fractional(days_until_end_of_week(now)))
        }
        CountdownMode::NextHoliday => {
            let (days, name) = days_until_next_holiday(config, now)?;
            CountdownResult {
                context: Some(name),
                ..CountdownResult::new(mode, CountdownValue::Whole(days))
            }
        }
        CountdownMode::NextBirthday => CountdownResult::new(
            mode,
            CountdownValue::Whole(days_until_birthday(config, now)?),
        ),
        CountdownMode::DaysSinceStart => CountdownResult::new(
            mode,
            CountdownValue::Whole(days_since(config.start_day()?, now)),
        ),
        CountdownMode::EndOfYear => {
            CountdownResult::new(mode, CountdownValue::Whole(days_until_end_of_year(now)))
        }
    };

    log::debug!("{mode:?} at {now}: {} {}", result.value, result.unit);
    Ok(result)
}

/// Hours left until `end_hour`, minute resolution. Zero once the end hour
/// has been reached.
pub fn hours_until_end_of_workday(end_hour: u32, now: NaiveDateTime) -> f64 {
    if now.hour() >= end_hour {
        return 0.0;
    }
    let hours = f64::from(end_hour - now.hour()) - f64::from(now.minute()) / 60.0;
    hours.max(0.0)
}

/// Days left until Friday 17:00. After 17:00 on a Friday this counts toward
/// the next Friday.
pub fn days_until_end_of_week(now: NaiveDateTime) -> f64 {
    let weekday = i64::from(now.weekday().num_days_from_sunday());
    let mut days_until_friday = (FRIDAY - weekday + 7) % 7;
    if days_until_friday == 0 && f64::from(now.hour()) >= WEEKEND_HOUR {
        days_until_friday = 7;
    }

    let remainder = (WEEKEND_HOUR - hours_into_day(now)) / 24.0;
    (days_until_friday as f64 + remainder).max(0.0)
}

/// Nearest holiday and the whole days until it. The earlier table entry wins
/// when two holidays are equally near.
pub fn days_until_next_holiday(
    config: &CountdownConfig,
    now: NaiveDateTime,
) -> Result<(i64, String), CountdownError> {
    let mut nearest: Option<(i64, &str)> = None;
    for holiday in config.holidays.iter() {
        let Some(days) = days_until_recurring(now, holiday.month, holiday.day) else {
            log::warn!("Skipping holiday with unresolvable date: {holiday:?}");
            continue;
        };
        if days < 0 {
            continue;
        }
        if nearest.map_or(true, |(best, _)| days < best) {
            nearest = Some((days, holiday.name.as_str()));
        }
    }

    nearest
        .map(|(days, name)| (days, name.to_string()))
        .ok_or_else(|| CountdownError::invalid("holiday table has no usable entries"))
}

pub fn days_until_birthday(
    config: &CountdownConfig,
    now: NaiveDateTime,
) -> Result<i64, CountdownError> {
    let birthday = config.birthday;
    days_until_recurring(now, birthday.month, birthday.day).ok_or_else(|| {
        CountdownError::invalid(format!(
            "birthday {:02}-{:02} does not exist",
            birthday.month, birthday.day
        ))
    })
}

/// Whole days since midnight of `start`. Zero if `start` is in the future.
pub fn days_since(start: NaiveDate, now: NaiveDateTime) -> i64 {
    whole_days_between(start.and_time(chrono::NaiveTime::MIN), now).max(0)
}

/// Whole days until December 31, 23:59:59 of the current year.
pub fn days_until_end_of_year(now: NaiveDateTime) -> i64 {
    let end_of_year = NaiveDate::from_ymd_opt(now.year(), 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59));
    match end_of_year {
        Some(end) => whole_days_between(now, end).max(0),
        None => 0,
    }
}

/// Owns the configuration, the clock and the one piece of mutable state:
/// which mode is selected.
pub struct CountdownEngine<C: Clock> {
    config: CountdownConfig,
    clock: C,
    mode: CountdownMode,
}

impl<C: Clock> CountdownEngine<C> {
    /// Validates `config` and starts on its initial mode.
    pub fn new(config: CountdownConfig, clock: C) -> Result<Self, CountdownError> {
        config.validate()?;
        let mode = config.initial_mode;
        Ok(Self {
            config,
            clock,
            mode,
        })
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn mode(&self) -> CountdownMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CountdownMode) {
        self.mode = mode;
    }

    /// Advances to the next mode, wrapping after the last one.
    pub fn cycle(&mut self) -> CountdownMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Reads the clock and computes the selected countdown.
    pub fn current(&self) -> Result<CountdownResult, CountdownError> {
        let now = self.clock.now()?;
        compute(self.mode, &self.config, now)
    }
}
