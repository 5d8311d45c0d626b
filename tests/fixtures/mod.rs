// Test fixtures - reusable test data
// Provides consistent dates and a recording label across test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use countdown_card::LabelSink;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn at(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    /// Monday, March 10, 2025 at midnight
    pub fn monday_midnight() -> NaiveDateTime {
        at(2025, 3, 10, 0, 0, 0)
    }

    /// Friday, March 14, 2025 at 17:00
    pub fn friday_five_pm() -> NaiveDateTime {
        at(2025, 3, 14, 17, 0, 0)
    }

    /// Dec 31, 2025 at 23:59:59
    pub fn last_second_of_2025() -> NaiveDateTime {
        at(2025, 12, 31, 23, 59, 59)
    }

    /// Feb 29, 2024 at noon (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29, 12, 0, 0)
    }
}

/// Label that keeps every text it is given.
#[derive(Debug, Default)]
pub struct RecordingLabel {
    pub texts: Vec<String>,
    pub indicators: Vec<String>,
}

impl RecordingLabel {
    pub fn last(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }
}

impl LabelSink for RecordingLabel {
    fn set_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    fn set_mode_indicator(&mut self, indicator: &str) {
        self.indicators.push(indicator.to_string());
    }
}
