mod clock;
mod display;
mod engine;
mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{
    format_label, format_unavailable, mode_indicator, CountdownDisplay, LabelSink,
    PLACEHOLDER_VALUE,
};
pub use engine::{
    compute, days_since, days_until_birthday, days_until_end_of_week, days_until_end_of_year,
    days_until_next_holiday, hours_until_end_of_workday, CountdownEngine, CountdownResult,
    CountdownValue,
};
pub use error::CountdownError;
