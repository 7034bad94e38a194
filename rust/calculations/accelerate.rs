use chrono::TimeDelta;

use crate::error::DateorroError;
use crate::time::{DayDuration, Instant};

/// Offset `instant` by `duration` divided by an `acceleration` factor, with no calendar awareness.
///
/// `acceleration` defaults to 1, in which case the result is exactly `instant + duration`.
///
/// # Examples
/// ```rust
/// # use dateorro::{offset, ndt};
/// # use chrono::TimeDelta;
/// // one day compressed 1440 times is one minute
/// let result = offset(&ndt(2018, 1, 1), &TimeDelta::days(1), Some(1440.0)).unwrap();
/// assert_eq!(result.time(), chrono::NaiveTime::from_hms_opt(0, 1, 0).unwrap());
/// ```
pub fn offset(
    instant: &Instant,
    duration: &TimeDelta,
    acceleration: Option<f64>,
) -> Result<Instant, DateorroError> {
    let delta = duration.checked_div_f64(acceleration.unwrap_or(1.0))?;
    instant.checked_add(&delta)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
        Instant::try_new(year, month, day, hour, minute, 0, 0, None).unwrap()
    }

    #[test]
    fn test_offset() {
        let options: Vec<(Instant, TimeDelta, Instant)> = vec![
            (dt(2018, 1, 1, 12, 0), TimeDelta::days(1), dt(2018, 1, 2, 12, 0)),
            (dt(2018, 1, 1, 12, 0), TimeDelta::days(-1), dt(2017, 12, 31, 12, 0)),
        ];
        for option in options.iter() {
            assert_eq!(offset(&option.0, &option.1, None).unwrap(), option.2);
        }
    }

    #[test]
    fn test_offset_acceleration() {
        let options: Vec<(Option<f64>, Instant)> = vec![
            (None, dt(2018, 1, 2, 12, 0)),
            (Some(1.0), dt(2018, 1, 2, 12, 0)),
            (Some(1440.0), dt(2018, 1, 1, 12, 1)),
        ];
        for option in options.iter() {
            assert_eq!(
                offset(&dt(2018, 1, 1, 12, 0), &TimeDelta::days(1), option.0).unwrap(),
                option.1
            );
        }
    }

    #[test]
    fn test_offset_unit_acceleration_is_exact() {
        let i = Instant::try_new(2018, 1, 1, 12, 0, 0, 123, None).unwrap();
        let d = TimeDelta::days(400) + TimeDelta::nanoseconds(999_999_999);
        assert_eq!(
            offset(&i, &d, Some(1.0)).unwrap(),
            i.checked_add(&d).unwrap()
        );
    }

    #[test]
    fn test_offset_overflow() {
        let i = Instant::from(chrono::NaiveDateTime::MAX);
        assert_eq!(
            offset(&i, &TimeDelta::days(1), None),
            Err(DateorroError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_offset_invalid_acceleration() {
        assert!(matches!(
            offset(&dt(2018, 1, 1, 0, 0), &TimeDelta::days(1), Some(0.0)),
            Err(DateorroError::InvalidAcceleration { .. })
        ));
    }
}
