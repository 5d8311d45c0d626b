use thiserror::Error;

/// Failures surfaced by the countdown engine and its display adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountdownError {
    /// A configured date, hour or holiday entry is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The host clock could not provide a trustworthy local time.
    #[error("clock unavailable: {0}")]
    ClockUnavailable(String),
}

impl CountdownError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
