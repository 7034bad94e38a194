//! Working day and calendar date calculations.
//!
//! *Dateorro* offsets points in time by whole **working days**, treating Saturdays and Sundays as
//! non-working unless a [`WorkingCalendar`] overrides specific dates, and provides a few thin
//! supporting calculations: accelerated offsets, normalization to midnight and day checks.
//!
//! # Working Day Offsets
//!
//! An [`Instant`] is offset by a non-zero, whole-day [`TimeDelta`](chrono::TimeDelta). An instant
//! starting on a non-working day is first moved to the boundary of the nearest working day in the
//! direction of travel, after which the days are counted.
//!
//! ### Example
//! This example creates a calendar where Thursday 4th January 2018 is a holiday and Sunday 7th
//! January 2018 is a working day.
//! ```rust
//! # use dateorro::{ndt, offset_by_working_days, Instant, WorkingCalendar};
//! # use chrono::TimeDelta;
//! let cal = WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
//!     .unwrap();
//! let noon = Instant::try_new(2018, 1, 5, 12, 0, 0, 0, None).unwrap();
//! let result = offset_by_working_days(&noon, &TimeDelta::days(1), true, Some(&cal)).unwrap();
//! assert_eq!(result, Instant::try_new(2018, 1, 7, 12, 0, 0, 0, None).unwrap());
//! ```
//!
//! ## Midnight Policy
//!
//! A count of working days which ends exactly at midnight is ambiguous between the end of the
//! last working day and the start of the next calendar day. Allowing midnight accepts the latter
//! even when it is a non-working day, which suits half-open day ranges.
//! ```rust
//! # use dateorro::{ndt, offset_by_working_days, WorkingCalendar};
//! # use chrono::TimeDelta;
//! # let cal = WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
//! #     .unwrap();
//! let one_day = TimeDelta::days(1);
//! assert_eq!(
//!     offset_by_working_days(&ndt(2018, 1, 4), &one_day, true, Some(&cal)).unwrap(),
//!     ndt(2018, 1, 6)
//! );
//! assert_eq!(
//!     offset_by_working_days(&ndt(2018, 1, 4), &one_day, false, Some(&cal)).unwrap(),
//!     ndt(2018, 1, 7)
//! );
//! ```


pub mod json;

mod error;
pub use error::{
    DateorroError, InvalidDuration, PARTIAL_DAY_DURATION_MESSAGE, ZERO_DURATION_MESSAGE,
};

pub mod time;
pub use time::{ndt, DayDuration, Instant};

pub mod calendars;
pub use calendars::{DayOverride, WorkingCalendar, WorkingDayRoll};

pub mod calculations;
pub use calculations::{is_working, normalize, offset, offset_by_working_days};

mod config;
pub use config::OffsetConfig;

#[cfg(feature = "python")]
mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py::calc_datetime_py, m)?)?;
    m.add_function(wrap_pyfunction!(py::calc_working_datetime_py, m)?)?;
    m.add_function(wrap_pyfunction!(py::check_working_datetime_py, m)?)?;
    m.add_function(wrap_pyfunction!(py::calc_normalized_datetime_py, m)?)?;
    Ok(())
}
