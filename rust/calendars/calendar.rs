use chrono::prelude::*;
use indexmap::map::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::calendars::WorkingDayRoll;
use crate::error::DateorroError;

// A single immutable calendar standing in wherever no calendar is supplied.
static EMPTY_CALENDAR: LazyLock<WorkingCalendar> = LazyLock::new(WorkingCalendar::new);

/// An explicit override of the default weekday rule for a single date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOverride {
    /// The date is working, even if it falls on a weekend.
    Working,
    /// The date is non-working, even if it falls on a weekday.
    NonWorking,
}

/// A working day calendar.
///
/// Saturday and Sunday are non-working and Monday to Friday are working, unless a specific date
/// carries a [`DayOverride`].
///
/// ```rust
/// # use dateorro::{WorkingCalendar, WorkingDayRoll};
/// # use chrono::NaiveDate;
/// let cal = WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
///     .unwrap();
/// assert!(!cal.is_working(&NaiveDate::from_ymd_opt(2018, 1, 4).unwrap())); // Thursday holiday
/// assert!(cal.is_working(&NaiveDate::from_ymd_opt(2018, 1, 7).unwrap())); // working Sunday
/// ```
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingCalendar {
    pub(crate) overrides: IndexMap<NaiveDate, DayOverride>,
}

impl WorkingCalendar {
    /// Create a calendar with no overrides.
    pub fn new() -> Self {
        WorkingCalendar {
            overrides: IndexMap::new(),
        }
    }

    /// A shared reference to the calendar with no overrides.
    pub fn empty() -> &'static WorkingCalendar {
        &EMPTY_CALENDAR
    }

    /// Return the calendar with `date` overridden.
    pub fn with_override(mut self, date: NaiveDate, day: DayOverride) -> Self {
        self.overrides.insert(date, day);
        self
    }

    /// Create a calendar from ISO `YYYY-MM-DD` keys and explicit overrides.
    pub fn try_from_iso<I, K>(entries: I) -> Result<Self, DateorroError>
    where
        I: IntoIterator<Item = (K, DayOverride)>,
        K: AsRef<str>,
    {
        let mut overrides = IndexMap::new();
        for (key, day) in entries {
            overrides.insert(parse_iso_key(key.as_ref())?, day);
        }
        Ok(WorkingCalendar { overrides })
    }

    /// Create a calendar from ISO date keys flagged as holidays.
    ///
    /// `true` marks a non-working date, `false` marks a working date (typically a working
    /// weekend).
    pub fn from_holiday_flags<I, K>(entries: I) -> Result<Self, DateorroError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        Self::try_from_iso(entries.into_iter().map(|(k, holiday)| {
            let day = if holiday {
                DayOverride::NonWorking
            } else {
                DayOverride::Working
            };
            (k, day)
        }))
    }

    /// Create a calendar from ISO date keys flagged as working.
    ///
    /// `true` marks a working date, `false` marks a non-working date.
    pub fn from_working_flags<I, K>(entries: I) -> Result<Self, DateorroError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        Self::from_holiday_flags(entries.into_iter().map(|(k, working)| (k, !working)))
    }

    /// Number of overridden dates.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns whether no date is overridden.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

fn parse_iso_key(key: &str) -> Result<NaiveDate, DateorroError> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").map_err(|_| DateorroError::InvalidCalendarKey {
        key: key.to_string(),
    })
}

impl WorkingDayRoll for WorkingCalendar {
    fn day_override(&self, date: &NaiveDate) -> Option<DayOverride> {
        self.overrides.get(date).copied()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_holiday_flags() {
        let cal =
            WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
                .unwrap();
        assert_eq!(cal.day_override(&d(2018, 1, 4)), Some(DayOverride::NonWorking));
        assert_eq!(cal.day_override(&d(2018, 1, 7)), Some(DayOverride::Working));
        assert_eq!(cal.day_override(&d(2018, 1, 5)), None);
        assert_eq!(cal.len(), 2);
    }

    #[test]
    fn test_working_flags_are_inverse_of_holiday_flags() {
        let a = WorkingCalendar::from_working_flags([("2018-01-04", false), ("2018-01-07", true)])
            .unwrap();
        let b = WorkingCalendar::from_holiday_flags([("2018-01-04", true), ("2018-01-07", false)])
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_override_matches_iso() {
        let a = WorkingCalendar::new().with_override(d(2018, 1, 4), DayOverride::NonWorking);
        let b = WorkingCalendar::try_from_iso([("2018-01-04", DayOverride::NonWorking)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_key() {
        let result = WorkingCalendar::from_holiday_flags([("2018-02-30", true)]);
        assert_eq!(
            result,
            Err(DateorroError::InvalidCalendarKey {
                key: "2018-02-30".to_string()
            })
        );
        assert!(WorkingCalendar::from_holiday_flags([("04/01/2018", true)]).is_err());
    }

    #[test]
    fn test_empty_is_shared_and_empty() {
        assert!(WorkingCalendar::empty().is_empty());
        assert!(std::ptr::eq(
            WorkingCalendar::empty(),
            WorkingCalendar::empty()
        ));
    }
}
