//! Holiday model.
//!
//! Holidays are fixed month/day pairs that recur every year. Rules such as
//! "fourth Thursday of November" are not supported; such holidays are listed
//! on a representative fixed date instead.

use serde::{Deserialize, Serialize};

use super::config::validate_month_day;
use crate::services::countdown::CountdownError;

/// A holiday that falls on the same month/day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

impl Holiday {
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Self {
        Self {
            month,
            day,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), CountdownError> {
        if self.name.trim().is_empty() {
            return Err(CountdownError::invalid("holiday name cannot be empty"));
        }
        validate_month_day(self.month, self.day)
            .map_err(|reason| CountdownError::invalid(format!("holiday '{}': {reason}", self.name)))
    }
}

/// Ordered, read-only list of holidays. Order breaks ties between entries
/// that land on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Holiday>", into = "Vec<Holiday>")]
pub struct HolidayTable {
    entries: Vec<Holiday>,
}

impl HolidayTable {
    /// Builds a table, rejecting any entry with an invalid date or empty name.
    pub fn new(entries: Vec<Holiday>) -> Result<Self, CountdownError> {
        for holiday in &entries {
            holiday.validate()?;
        }
        Ok(Self { entries })
    }

    /// The built-in United States table.
    pub fn us_federal() -> Self {
        Self {
            entries: vec![
                Holiday::new(1, 1, "New Year's Day"),
                Holiday::new(1, 20, "Martin Luther King Jr. Day"),
                Holiday::new(2, 17, "Presidents Day"),
                Holiday::new(5, 26, "Memorial Day"),
                Holiday::new(6, 19, "Juneteenth"),
                Holiday::new(7, 4, "Independence Day"),
                Holiday::new(9, 1, "Labor Day"),
                Holiday::new(10, 13, "Columbus Day"),
                Holiday::new(11, 11, "Veterans Day"),
                Holiday::new(11, 27, "Thanksgiving"),
                Holiday::new(12, 25, "Christmas"),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HolidayTable {
    fn default() -> Self {
        Self::us_federal()
    }
}

impl TryFrom<Vec<Holiday>> for HolidayTable {
    type Error = CountdownError;

    fn try_from(entries: Vec<Holiday>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<HolidayTable> for Vec<Holiday> {
    fn from(table: HolidayTable) -> Self {
        table.entries
    }
}
