//! Wrapper module to export the calculations to Python using pyo3 bindings.
//!
//! The function names and keyword arguments follow the Python `dateorro` package. Calendars are
//! dicts of ISO date strings to booleans where `True` marks a holiday and `False` a working day.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::calendars::WorkingCalendar;
use crate::error::DateorroError;
use crate::time::Instant;
use crate::{is_working, normalize, offset, offset_by_working_days};

/// A Python `datetime`, either naive or carrying a fixed-offset `tzinfo`.
#[derive(Debug, FromPyObject, IntoPyObject)]
pub(crate) enum PyInstant {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl From<PyInstant> for Instant {
    fn from(item: PyInstant) -> Self {
        match item {
            PyInstant::Aware(dt) => Instant::from(dt),
            PyInstant::Naive(dt) => Instant::from(dt),
        }
    }
}

impl From<Instant> for PyInstant {
    fn from(item: Instant) -> Self {
        match item.to_datetime() {
            Some(dt) => PyInstant::Aware(dt),
            None => PyInstant::Naive(item.naive()),
        }
    }
}

impl From<DateorroError> for PyErr {
    fn from(err: DateorroError) -> Self {
        match err {
            DateorroError::ArithmeticOverflow => PyOverflowError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn calendar_from_py(calendar: Option<HashMap<String, bool>>) -> PyResult<WorkingCalendar> {
    match calendar {
        None => Ok(WorkingCalendar::new()),
        Some(c) => Ok(WorkingCalendar::from_holiday_flags(c)?),
    }
}

/// Calculate a datetime offset by an accelerated timedelta.
///
/// Parameters
/// ----------
/// dt: datetime
///     The initial datetime.
/// delta: timedelta
///     The offset to add to ``dt``.
/// accelerator: float, optional
///     Positive factor dividing ``delta`` before it is added. ``None`` or ``0`` leave ``delta``
///     unchanged.
///
/// Returns
/// -------
/// datetime
#[pyfunction]
#[pyo3(name = "calc_datetime", signature = (dt, delta, accelerator=None))]
pub(crate) fn calc_datetime_py(
    dt: PyInstant,
    delta: TimeDelta,
    accelerator: Option<f64>,
) -> PyResult<PyInstant> {
    Ok(offset(&dt.into(), &delta, accelerator_from_py(accelerator))?.into())
}

// A zero accelerator means no acceleration, as in the Python package.
fn accelerator_from_py(accelerator: Option<f64>) -> Option<f64> {
    accelerator.filter(|factor| *factor != 0.0)
}

/// Calculate a datetime offset by a whole number of working days.
///
/// Parameters
/// ----------
/// dt: datetime
///     The initial datetime.
/// delta: timedelta
///     A non-zero, whole-day offset.
/// midnight: bool
///     Allow the result to be the midnight starting a non-working day, e.g. 00:00 of a Saturday.
/// calendar: dict[str, bool], optional
///     ISO dates mapped to *True* for holidays and *False* for working days.
///
/// Returns
/// -------
/// datetime
#[pyfunction]
#[pyo3(name = "calc_working_datetime", signature = (dt, delta, midnight=true, calendar=None))]
pub(crate) fn calc_working_datetime_py(
    dt: PyInstant,
    delta: TimeDelta,
    midnight: bool,
    calendar: Option<HashMap<String, bool>>,
) -> PyResult<PyInstant> {
    let cal = calendar_from_py(calendar)?;
    Ok(offset_by_working_days(&dt.into(), &delta, midnight, Some(&cal))?.into())
}

/// Return whether the date of ``dt`` is a working day.
///
/// Parameters
/// ----------
/// dt: datetime
///     Datetime to test.
/// calendar: dict[str, bool], optional
///     ISO dates mapped to *True* for holidays and *False* for working days.
///
/// Returns
/// -------
/// bool
#[pyfunction]
#[pyo3(name = "check_working_datetime", signature = (dt, calendar=None))]
pub(crate) fn check_working_datetime_py(
    dt: PyInstant,
    calendar: Option<HashMap<String, bool>>,
) -> PyResult<bool> {
    let cal = calendar_from_py(calendar)?;
    Ok(is_working(&Instant::from(dt).date(), Some(&cal)))
}

/// Normalize ``dt`` to midnight, e.g. 2019-01-01 12:20 -> 2019-01-01 00:00.
///
/// Parameters
/// ----------
/// dt: datetime
///     Datetime to normalize.
/// ceil: bool
///     Return the following midnight instead of the preceding one.
///
/// Returns
/// -------
/// datetime
#[pyfunction]
#[pyo3(name = "calc_normalized_datetime", signature = (dt, ceil=false))]
pub(crate) fn calc_normalized_datetime_py(dt: PyInstant, ceil: bool) -> PyResult<PyInstant> {
    Ok(normalize(&dt.into(), ceil)?.into())
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerator_from_py() {
        let options: Vec<(Option<f64>, Option<f64>)> = vec![
            (None, None),
            (Some(0.0), None),
            (Some(-0.0), None),
            (Some(1440.0), Some(1440.0)),
            (Some(-2.0), Some(-2.0)),
        ];
        for option in options.iter() {
            assert_eq!(accelerator_from_py(option.0), option.1);
        }
    }
}
