//! Reusable policy for date offset calculations.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::calculations::offset;
use crate::calendars::WorkingDayRoll;
use crate::error::DateorroError;
use crate::time::Instant;

/// Policy applied to offset calculations.
///
/// Every field has a default, so a partial JSON document is a valid configuration.
///
/// # Example
///
/// ```
/// use dateorro::{OffsetConfig, WorkingCalendar, ndt};
/// use chrono::TimeDelta;
///
/// let config = OffsetConfig::new().with_allow_midnight(false);
/// assert!(config.validate().is_ok());
/// let result = config
///     .offset_by_working_days(&ndt(2018, 1, 5), &TimeDelta::days(1), WorkingCalendar::empty())
///     .unwrap();
/// assert_eq!(result, ndt(2018, 1, 8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetConfig {
    /// Whether a forward working day offset may end at midnight starting a non-working day.
    allow_midnight: bool,
    /// Divisor applied to durations of plain offsets.
    acceleration: f64,
}

impl OffsetConfig {
    /// Creates a new configuration.
    ///
    /// Defaults: `allow_midnight = true`, `acceleration = 1.0`.
    pub fn new() -> Self {
        Self {
            allow_midnight: true,
            acceleration: 1.0,
        }
    }

    /// Sets whether working day offsets may end on the midnight of a non-working day.
    pub fn with_allow_midnight(mut self, allow_midnight: bool) -> Self {
        self.allow_midnight = allow_midnight;
        self
    }

    /// Sets the acceleration factor for plain offsets.
    pub fn with_acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Returns whether midnight of a non-working day is an acceptable result.
    pub fn allow_midnight(&self) -> bool {
        self.allow_midnight
    }

    /// Returns the acceleration factor.
    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the acceleration factor is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), DateorroError> {
        if !self.acceleration.is_finite() || self.acceleration <= 0.0 {
            return Err(DateorroError::InvalidAcceleration {
                factor: self.acceleration,
            });
        }
        Ok(())
    }

    /// Offset `instant` by `duration` divided by the configured acceleration.
    pub fn offset(&self, instant: &Instant, duration: &TimeDelta) -> Result<Instant, DateorroError> {
        self.validate()?;
        offset(instant, duration, Some(self.acceleration))
    }

    /// Offset `instant` by whole working days under the configured midnight policy.
    pub fn offset_by_working_days<T: WorkingDayRoll + ?Sized>(
        &self,
        instant: &Instant,
        duration: &TimeDelta,
        calendar: &T,
    ) -> Result<Instant, DateorroError> {
        calendar.offset_by_working_days(instant, duration, self.allow_midnight)
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self::new()
    }
}
