use chrono::{NaiveDate, TimeDelta};

use crate::calendars::{WorkingCalendar, WorkingDayRoll};
use crate::error::DateorroError;
use crate::time::Instant;

/// Returns whether `date` is a working day under `calendar`.
///
/// Without a calendar only the default Saturday/Sunday weekend applies.
pub fn is_working(date: &NaiveDate, calendar: Option<&WorkingCalendar>) -> bool {
    calendar
        .unwrap_or_else(|| WorkingCalendar::empty())
        .is_working(date)
}

/// Offset `instant` by a signed whole number of working days under `calendar`.
///
/// See [`WorkingDayRoll::offset_by_working_days`].
///
/// # Examples
/// ```rust
/// # use dateorro::{offset_by_working_days, ndt, WorkingCalendar};
/// # use chrono::TimeDelta;
/// let cal = WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
///     .unwrap();
/// // midnight ending Friday 5th is allowed even though Saturday 6th is not a working day
/// let result = offset_by_working_days(&ndt(2018, 1, 4), &TimeDelta::days(1), true, Some(&cal));
/// assert_eq!(result.unwrap(), ndt(2018, 1, 6));
/// ```
pub fn offset_by_working_days(
    instant: &Instant,
    duration: &TimeDelta,
    allow_midnight: bool,
    calendar: Option<&WorkingCalendar>,
) -> Result<Instant, DateorroError> {
    calendar
        .unwrap_or_else(|| WorkingCalendar::empty())
        .offset_by_working_days(instant, duration, allow_midnight)
}
