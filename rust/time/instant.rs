use chrono::prelude::*;
use chrono::{Days, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::DateorroError;

/// A point in time: a wall-clock date and time with an optional, opaque UTC offset tag.
///
/// All arithmetic is performed on the wall clock. The offset tag is carried through every
/// transformation unchanged and is never used to convert between zones. It only takes part in
/// comparison, where two tagged instants are compared as absolute times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "InstantDataModel", into = "InstantDataModel")]
pub struct Instant {
    datetime: NaiveDateTime,
    offset: Option<FixedOffset>,
}

#[derive(Serialize, Deserialize)]
struct InstantDataModel {
    datetime: NaiveDateTime,
    offset_seconds: Option<i32>,
}

impl TryFrom<InstantDataModel> for Instant {
    type Error = DateorroError;

    fn try_from(model: InstantDataModel) -> Result<Self, Self::Error> {
        let offset = match model.offset_seconds {
            None => None,
            Some(secs) => Some(FixedOffset::east_opt(secs).ok_or_else(|| {
                DateorroError::InvalidDate {
                    detail: format!("UTC offset of {} seconds is out of range", secs),
                }
            })?),
        };
        Ok(Instant {
            datetime: model.datetime,
            offset,
        })
    }
}

impl From<Instant> for InstantDataModel {
    fn from(instant: Instant) -> Self {
        InstantDataModel {
            datetime: instant.datetime,
            offset_seconds: instant.offset.map(|o| o.local_minus_utc()),
        }
    }
}

/// Create an untagged [`Instant`] at midnight of the given date.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> Instant {
    Instant::from(
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("`year`, `month` `day` are invalid.")
            .and_time(NaiveTime::MIN),
    )
}

impl Instant {
    /// Create an instant from its components.
    ///
    /// `nanosecond` is the sub-second part and must be below `1_000_000_000`.
    #[allow(clippy::too_many_arguments)]
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        offset: Option<FixedOffset>,
    ) -> Result<Self, DateorroError> {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateorroError::InvalidDate {
                detail: format!("{}-{}-{} is not a calendar date", year, month, day),
            })?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or_else(
            || DateorroError::InvalidDate {
                detail: format!(
                    "{}:{}:{}.{} is not a time of day",
                    hour, minute, second, nanosecond
                ),
            },
        )?;
        Ok(Instant {
            datetime: date.and_time(time),
            offset,
        })
    }

    /// Create an instant from a wall-clock datetime and an offset tag.
    pub fn new(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Instant { datetime, offset }
    }

    /// The wall-clock datetime, without the offset tag.
    pub fn naive(&self) -> NaiveDateTime {
        self.datetime
    }

    /// The wall-clock calendar date.
    pub fn date(&self) -> NaiveDate {
        self.datetime.date()
    }

    /// The wall-clock time of day.
    pub fn time(&self) -> NaiveTime {
        self.datetime.time()
    }

    /// The opaque UTC offset tag, if any.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    /// Returns whether the time of day is exactly `00:00:00.000000000`.
    pub fn is_midnight(&self) -> bool {
        self.datetime.time() == NaiveTime::MIN
    }

    /// Return the midnight at the start of this instant's date, keeping the tag.
    pub fn at_midnight(&self) -> Instant {
        Instant {
            datetime: self.datetime.date().and_time(NaiveTime::MIN),
            offset: self.offset,
        }
    }

    /// Add a signed duration on the wall clock.
    pub fn checked_add(&self, delta: &TimeDelta) -> Result<Instant, DateorroError> {
        self.datetime
            .checked_add_signed(*delta)
            .map(|datetime| Instant {
                datetime,
                offset: self.offset,
            })
            .ok_or(DateorroError::ArithmeticOverflow)
    }

    /// Subtract a signed duration on the wall clock.
    pub fn checked_sub(&self, delta: &TimeDelta) -> Result<Instant, DateorroError> {
        self.datetime
            .checked_sub_signed(*delta)
            .map(|datetime| Instant {
                datetime,
                offset: self.offset,
            })
            .ok_or(DateorroError::ArithmeticOverflow)
    }

    /// Move by exactly one calendar day, preserving the time of day and the tag.
    pub fn step_one_day(&self, backwards: bool) -> Result<Instant, DateorroError> {
        let datetime = if backwards {
            self.datetime.checked_sub_days(Days::new(1))
        } else {
            self.datetime.checked_add_days(Days::new(1))
        };
        datetime
            .map(|datetime| Instant {
                datetime,
                offset: self.offset,
            })
            .ok_or(DateorroError::ArithmeticOverflow)
    }

    /// Convert to an aware datetime, if the instant carries an offset tag.
    pub fn to_datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.offset
            .and_then(|o| o.from_local_datetime(&self.datetime).single())
    }

    // Seconds and nanoseconds since the epoch, for tagged instants only.
    fn absolute(&self) -> Option<(i64, u32)> {
        let o = self.offset?;
        let utc = self.datetime.and_utc();
        Some((
            utc.timestamp() - i64::from(o.local_minus_utc()),
            utc.timestamp_subsec_nanos(),
        ))
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(item: NaiveDateTime) -> Self {
        Instant {
            datetime: item,
            offset: None,
        }
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(item: DateTime<FixedOffset>) -> Self {
        Instant {
            datetime: item.naive_local(),
            offset: Some(*item.offset()),
        }
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(item: DateTime<Utc>) -> Self {
        Instant {
            datetime: item.naive_utc(),
            offset: FixedOffset::east_opt(0),
        }
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.offset == other.offset {
            return Some(self.datetime.cmp(&other.datetime));
        }
        match (self.absolute(), other.absolute()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        if let Some(o) = self.offset {
            write!(f, "{}", o)?;
        }
        Ok(())
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn cet() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn test_try_new() {
        let i = Instant::try_new(2018, 1, 5, 12, 30, 15, 500, Some(cet())).unwrap();
        assert_eq!(i.date(), NaiveDate::from_ymd_opt(2018, 1, 5).unwrap());
        assert_eq!(i.time(), NaiveTime::from_hms_nano_opt(12, 30, 15, 500).unwrap());
        assert_eq!(i.offset(), Some(cet()));
    }

    #[test]
    fn test_try_new_invalid() {
        assert!(matches!(
            Instant::try_new(2018, 2, 30, 0, 0, 0, 0, None),
            Err(DateorroError::InvalidDate { .. })
        ));
        assert!(matches!(
            Instant::try_new(2018, 2, 1, 24, 0, 0, 0, None),
            Err(DateorroError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_step_one_day_preserves_time_and_tag() {
        let i = Instant::try_new(2018, 1, 31, 23, 59, 59, 1, Some(cet())).unwrap();
        let f = i.step_one_day(false).unwrap();
        assert_eq!(f.date(), NaiveDate::from_ymd_opt(2018, 2, 1).unwrap());
        assert_eq!(f.time(), i.time());
        assert_eq!(f.offset(), Some(cet()));
        assert_eq!(f.step_one_day(true).unwrap(), i);
    }

    #[test]
    fn test_step_one_day_overflow() {
        let max = Instant::from(NaiveDateTime::MAX);
        assert_eq!(max.step_one_day(false), Err(DateorroError::ArithmeticOverflow));
        let min = Instant::from(NaiveDateTime::MIN);
        assert_eq!(min.step_one_day(true), Err(DateorroError::ArithmeticOverflow));
    }

    #[test]
    fn test_midnight() {
        let i = Instant::try_new(2018, 1, 5, 0, 0, 0, 1, None).unwrap();
        assert!(!i.is_midnight());
        assert!(i.at_midnight().is_midnight());
        assert_eq!(i.at_midnight(), ndt(2018, 1, 5));
    }

    #[test]
    fn test_comparison() {
        let a = Instant::try_new(2018, 1, 5, 12, 0, 0, 0, Some(cet())).unwrap();
        let b = Instant::try_new(2018, 1, 5, 11, 0, 0, 0, FixedOffset::east_opt(0)).unwrap();
        // same absolute time expressed in two offsets
        assert_eq!(a, b);
        let naive = ndt(2018, 1, 5);
        assert_eq!(naive.partial_cmp(&a), None);
        assert_ne!(naive, a);
        assert!(ndt(2018, 1, 4) < naive);
    }

    #[test]
    fn test_conversions() {
        let aware = cet().with_ymd_and_hms(2018, 1, 5, 12, 0, 0).unwrap();
        let i = Instant::from(aware);
        assert_eq!(i.to_datetime(), Some(aware));
        assert_eq!(ndt(2018, 1, 5).to_datetime(), None);
    }

    #[test]
    fn test_display() {
        let i = Instant::try_new(2018, 1, 5, 12, 0, 0, 0, Some(cet())).unwrap();
        assert_eq!(i.to_string(), "2018-01-05T12:00:00+01:00");
        assert_eq!(ndt(2018, 1, 5).to_string(), "2018-01-05T00:00:00");
    }
}
