//! Host clock access.
//!
//! The engine only ever sees a local calendar breakdown (`NaiveDateTime`);
//! timezone handling is whatever the host's local-time setting provides.

use chrono::{Datelike, Local, NaiveDateTime};

use super::error::CountdownError;

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> Result<NaiveDateTime, CountdownError>;
}

/// Reads the host clock through `chrono::Local`.
///
/// Boards without a battery-backed RTC boot at the Unix epoch until network
/// time arrives, so any reading before `min_valid_year` is reported as
/// [`CountdownError::ClockUnavailable`] instead of a bogus countdown.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    min_valid_year: i32,
}

impl SystemClock {
    pub fn new(min_valid_year: i32) -> Self {
        Self { min_valid_year }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(2020)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<NaiveDateTime, CountdownError> {
        check_plausible(Local::now().naive_local(), self.min_valid_year)
    }
}

pub(crate) fn check_plausible(
    now: NaiveDateTime,
    min_valid_year: i32,
) -> Result<NaiveDateTime, CountdownError> {
    if now.year() < min_valid_year {
        log::warn!("Host clock reads {now}, before {min_valid_year}; treating as unset");
        return Err(CountdownError::ClockUnavailable(format!(
            "host clock reads {now}, which is before {min_valid_year}"
        )));
    }
    Ok(now)
}

/// Clock pinned to a single instant. Used by tests and for previewing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> Result<NaiveDateTime, CountdownError> {
        Ok(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<NaiveDateTime, CountdownError> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Result<NaiveDateTime, CountdownError> {
        (**self).now()
    }
}
