// Mode module
// Which countdown the card is currently showing

use serde::{Deserialize, Serialize};

/// Countdown shown on the card. Cycles in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountdownMode {
    EndOfWorkday,
    EndOfWeek,
    NextHoliday,
    NextBirthday,
    DaysSinceStart,
    EndOfYear,
}

impl Default for CountdownMode {
    fn default() -> Self {
        Self::EndOfWorkday
    }
}

impl CountdownMode {
    /// Every mode in cycle order.
    pub const ALL: [CountdownMode; 6] = [
        Self::EndOfWorkday,
        Self::EndOfWeek,
        Self::NextHoliday,
        Self::NextBirthday,
        Self::DaysSinceStart,
        Self::EndOfYear,
    ];

    /// The mode after this one, wrapping back to the first.
    pub fn next(self) -> Self {
        match self {
            Self::EndOfWorkday => Self::EndOfWeek,
            Self::EndOfWeek => Self::NextHoliday,
            Self::NextHoliday => Self::NextBirthday,
            Self::NextBirthday => Self::DaysSinceStart,
            Self::DaysSinceStart => Self::EndOfYear,
            Self::EndOfYear => Self::EndOfWorkday,
        }
    }

    /// Zero-based position in the cycle.
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default()
    }

    /// Heading shown above the value.
    pub fn label(self) -> &'static str {
        match self {
            Self::EndOfWorkday => "Until End of Workday",
            Self::EndOfWeek => "Until Weekend",
            Self::NextHoliday => "Until Next Holiday",
            Self::NextBirthday => "Until Birthday",
            Self::DaysSinceStart => "Days Since Start",
            Self::EndOfYear => "Until End of Year",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::EndOfWorkday => "hours",
            _ => "days",
        }
    }

    /// Parses the snake_case name used in settings files and on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name.trim().to_ascii_lowercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::EndOfWorkday => "end_of_workday",
            Self::EndOfWeek => "end_of_week",
            Self::NextHoliday => "next_holiday",
            Self::NextBirthday => "next_birthday",
            Self::DaysSinceStart => "days_since_start",
            Self::EndOfYear => "end_of_year",
        }
    }
}

impl std::fmt::Display for CountdownMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn default_is_end_of_workday() {
        assert_eq!(CountdownMode::default(), CountdownMode::EndOfWorkday);
    }

    #[test]
    fn cycling_visits_every_mode_once_and_wraps() {
        let start = CountdownMode::default();
        let mut seen = HashSet::new();
        let mut mode = start;
        for _ in 0..CountdownMode::ALL.len() {
            assert!(seen.insert(mode), "{mode:?} visited twice");
            mode = mode.next();
        }
        assert_eq!(mode, start);
        assert_eq!(seen.len(), CountdownMode::ALL.len());
    }

    #[test]
    fn next_follows_declared_order() {
        for pair in CountdownMode::ALL.windows(2) {
            assert_eq!(pair[0].next(), pair[1]);
        }
        assert_eq!(CountdownMode::EndOfYear.next(), CountdownMode::EndOfWorkday);
    }

    #[test_case(CountdownMode::EndOfWorkday, "Until End of Workday", "hours"; "workday")]
    #[test_case(CountdownMode::EndOfWeek, "Until Weekend", "days"; "week")]
    #[test_case(CountdownMode::NextHoliday, "Until Next Holiday", "days"; "holiday")]
    #[test_case(CountdownMode::NextBirthday, "Until Birthday", "days"; "birthday")]
    #[test_case(CountdownMode::DaysSinceStart, "Days Since Start", "days"; "since start")]
    #[test_case(CountdownMode::EndOfYear, "Until End of Year", "days"; "year")]
    fn label_and_unit(mode: CountdownMode, label: &str, unit: &str) {
        assert_eq!(mode.label(), label);
        assert_eq!(mode.unit(), unit);
    }

    #[test]
    fn names_round_trip() {
        for mode in CountdownMode::ALL {
            assert_eq!(CountdownMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(
            CountdownMode::from_name(" Next_Holiday "),
            Some(CountdownMode::NextHoliday)
        );
        assert_eq!(CountdownMode::from_name("last_day"), None);
    }

    #[test]
    fn positions_are_sequential() {
        for (index, mode) in CountdownMode::ALL.iter().enumerate() {
            assert_eq!(mode.position(), index);
        }
    }
}
