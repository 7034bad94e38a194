use chrono::TimeDelta;

use crate::error::DateorroError;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Day-granularity views of a signed duration.
pub trait DayDuration {
    /// The whole-day count, truncated towards zero.
    fn whole_days(&self) -> i64;

    /// What remains after removing the whole days; carries the sign of the duration.
    fn sub_day_remainder(&self) -> TimeDelta;

    /// Returns whether the duration is an exact number of days.
    fn is_whole_days(&self) -> bool {
        self.sub_day_remainder().is_zero()
    }

    /// Divide by a positive real scalar, rounding to the nearest nanosecond.
    ///
    /// Division by exactly `1.0` returns the duration unchanged.
    fn checked_div_f64(&self, divisor: f64) -> Result<TimeDelta, DateorroError>;
}

impl DayDuration for TimeDelta {
    fn whole_days(&self) -> i64 {
        self.num_days()
    }

    fn sub_day_remainder(&self) -> TimeDelta {
        *self - TimeDelta::days(self.num_days())
    }

    fn checked_div_f64(&self, divisor: f64) -> Result<TimeDelta, DateorroError> {
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(DateorroError::InvalidAcceleration { factor: divisor });
        }
        if divisor == 1.0 {
            return Ok(*self);
        }
        // seconds and sub-seconds are divided separately to keep nanosecond precision
        let seconds = self.num_seconds() as f64 / divisor;
        let whole = seconds.trunc();
        let nanos = ((seconds - whole) * NANOS_PER_SECOND
            + f64::from(self.subsec_nanos()) / divisor)
            .round();
        if whole.abs() >= i64::MAX as f64 || !nanos.is_finite() || nanos.abs() >= i64::MAX as f64
        {
            return Err(DateorroError::ArithmeticOverflow);
        }
        TimeDelta::try_seconds(whole as i64)
            .and_then(|s| s.checked_add(&TimeDelta::nanoseconds(nanos as i64)))
            .ok_or(DateorroError::ArithmeticOverflow)
    }
}
