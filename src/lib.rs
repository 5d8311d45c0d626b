// Countdown Card Library
// Date arithmetic behind the countdown card and the adapter that draws it

pub mod models;
pub mod services;
pub mod utils;

pub use models::config::CountdownConfig;
pub use models::mode::CountdownMode;
pub use services::countdown::{CountdownDisplay, CountdownEngine, CountdownError, LabelSink};
