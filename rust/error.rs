//! Error types for all fallible date calculations.

/// Message for a working-day offset requested with a zero duration.
pub const ZERO_DURATION_MESSAGE: &str = "Zero duration is not allowed for working day offsets.";

/// Message for a working-day offset requested with hours, minutes, seconds or sub-seconds.
pub const PARTIAL_DAY_DURATION_MESSAGE: &str =
    "Only whole-day durations are allowed for working day offsets.";

/// The reason a duration was rejected by a working-day offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDuration {
    /// The duration has zero total elapsed time.
    Zero,
    /// The duration carries a non-zero sub-day remainder.
    PartialDay,
}

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidDuration::Zero => f.write_str(ZERO_DURATION_MESSAGE),
            InvalidDuration::PartialDay => f.write_str(PARTIAL_DAY_DURATION_MESSAGE),
        }
    }
}

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateorroError {
    /// Returned by working-day offsets for zero or non whole-day durations.
    #[error("{0}")]
    InvalidDuration(InvalidDuration),

    /// Returned when date/time arithmetic leaves the representable range.
    #[error("date/time arithmetic overflowed the representable range")]
    ArithmeticOverflow,

    /// Returned when an acceleration factor is non-finite or non-positive.
    #[error("acceleration factor must be finite and positive, got {factor}")]
    InvalidAcceleration {
        /// The rejected factor.
        factor: f64,
    },

    /// Returned when a calendar key is not an ISO `YYYY-MM-DD` date.
    #[error("calendar key '{key}' is not an ISO date (YYYY-MM-DD)")]
    InvalidCalendarKey {
        /// The rejected key.
        key: String,
    },

    /// Returned when date or time components do not form a valid value.
    #[error("invalid date or time components: {detail}")]
    InvalidDate {
        /// Which components were rejected.
        detail: String,
    },
}

impl From<InvalidDuration> for DateorroError {
    fn from(reason: InvalidDuration) -> Self {
        DateorroError::InvalidDuration(reason)
    }
}
