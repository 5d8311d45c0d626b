// Integration tests: settings file through to the rendered label

mod fixtures;

use std::fs;

use countdown_card::models::config::{MonthDay, StartDate};
use countdown_card::services::countdown::{compute, CountdownValue, FixedClock};
use countdown_card::services::settings::SettingsService;
use countdown_card::{CountdownConfig, CountdownDisplay, CountdownError, CountdownMode};
use fixtures::dates::{self, at};
use fixtures::RecordingLabel;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_settings_file_drives_display() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
initial_mode = "next_holiday"
cycle_button = 1

[[holidays]]
month = 3
day = 17
name = "St Patrick's Day"

[[holidays]]
month = 10
day = 31
name = "Halloween"
"#,
    )
    .expect("Failed to write settings");

    let config = SettingsService::new(&path).load().expect("Failed to load settings");
    let clock = FixedClock(at(2025, 3, 10, 8, 0, 0));
    let mut display = CountdownDisplay::new(config, clock, RecordingLabel::default())
        .expect("Failed to create display");

    display.refresh().expect("Failed to refresh");
    assert_eq!(
        display.sink().last(),
        Some("Until Next Holiday\n7 days\n(St Patrick's Day)")
    );

    // Centre button moves on to the birthday countdown (June 15 by default)
    assert!(display.handle_button(1));
    assert_eq!(display.sink().last(), Some("Until Birthday\n97 days"));
    assert_eq!(display.sink().indicators.last().map(String::as_str), Some("4/6"));

    // Anything else is left to other widgets
    assert!(!display.handle_button(0));
    assert_eq!(display.mode(), CountdownMode::NextBirthday);
}

#[test]
fn test_app_lifecycle_simulation() {
    let config = CountdownConfig {
        start_date: StartDate::new(2025, 1, 1),
        ..Default::default()
    };
    let mut display = CountdownDisplay::new(
        config,
        FixedClock(dates::monday_midnight()),
        RecordingLabel::default(),
    )
    .expect("Failed to create display");

    // First frame, then one press per mode until we are back where we began
    display.refresh().expect("Failed to refresh");
    for _ in 0..CountdownMode::ALL.len() {
        display.cycle_mode().expect("Failed to cycle");
    }

    let texts = &display.sink().texts;
    assert_eq!(
        texts.as_slice(),
        [
            "Until End of Workday\n17.0 hours",
            "Until Weekend\n4.7 days",
            "Until Next Holiday\n77 days\n(Memorial Day)",
            "Until Birthday\n97 days",
            "Days Since Start\n68 days",
            "Until End of Year\n296 days",
            "Until End of Workday\n17.0 hours",
        ]
    );
    assert_eq!(
        display.sink().indicators,
        ["1/6", "2/6", "3/6", "4/6", "5/6", "6/6", "1/6"]
    );
}

#[test]
fn test_friday_evening_counts_to_next_week() {
    let result = compute(
        CountdownMode::EndOfWeek,
        &CountdownConfig::default(),
        dates::friday_five_pm(),
    )
    .unwrap();
    assert_eq!(result.value, CountdownValue::Fractional(7.0));
}

#[test]
fn test_end_of_year_last_second() {
    let result = compute(
        CountdownMode::EndOfYear,
        &CountdownConfig::default(),
        dates::last_second_of_2025(),
    )
    .unwrap();
    assert_eq!(result.value, CountdownValue::Whole(0));
}

#[test]
fn test_birthday_on_leap_day() {
    let config = CountdownConfig {
        birthday: MonthDay::new(2, 29),
        ..Default::default()
    };
    let today = compute(CountdownMode::NextBirthday, &config, dates::leap_day_2024()).unwrap();
    assert_eq!(today.value, CountdownValue::Whole(0));

    // 2025 has no Feb 29, so the day after it is used
    let next = compute(
        CountdownMode::NextBirthday,
        &config,
        at(2024, 3, 1, 12, 0, 0),
    )
    .unwrap();
    assert_eq!(next.value, CountdownValue::Whole(365));
}

#[test]
fn test_invalid_configuration_is_rejected_up_front() {
    let config = CountdownConfig {
        birthday: MonthDay::new(4, 31),
        ..Default::default()
    };
    let result = CountdownDisplay::new(
        config,
        FixedClock(dates::monday_midnight()),
        RecordingLabel::default(),
    );
    assert!(matches!(result, Err(CountdownError::InvalidConfiguration(_))));
}
