use chrono::prelude::*;
use chrono::TimeDelta;
use tracing::{debug, trace};

use crate::calendars::DayOverride;
use crate::error::{DateorroError, InvalidDuration};
use crate::time::{DayDuration, Instant};

/// Working day classification and working day date arithmetic.
///
/// Implementors only supply the per-date [`DayOverride`] lookup; the default weekday rule and
/// all stepping and offsetting is derived from it.
pub trait WorkingDayRoll {
    /// Returns the explicit override for the date, if one exists.
    fn day_override(&self, date: &NaiveDate) -> Option<DayOverride>;

    /// Returns whether the date falls on a default weekend, i.e. Saturday or Sunday.
    fn is_weekend(&self, date: &NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns whether the date is a working day.
    ///
    /// A forced non-working date is never working. Otherwise a weekend is non-working unless it is
    /// forced working, and every other date is working.
    fn is_working(&self, date: &NaiveDate) -> bool {
        match self.day_override(date) {
            Some(DayOverride::NonWorking) => false,
            Some(DayOverride::Working) => true,
            None => !self.is_weekend(date),
        }
    }

    /// Returns whether the date is not a working day.
    fn is_non_working(&self, date: &NaiveDate) -> bool {
        !self.is_working(date)
    }

    /// Returns whether the wall-clock date of the `instant` is a working day.
    fn is_working_instant(&self, instant: &Instant) -> bool {
        self.is_working(&instant.date())
    }

    /// Step one calendar day, then keep stepping until the date is a working day.
    ///
    /// There is no limit on the number of skipped days: a calendar that never yields a working day
    /// in the travel direction steps until the representable date range is exhausted, and then
    /// fails with [`DateorroError::ArithmeticOverflow`].
    fn step_one_working_day(
        &self,
        instant: &Instant,
        backwards: bool,
    ) -> Result<Instant, DateorroError> {
        let mut new_instant = instant.step_one_day(backwards)?;
        while self.is_non_working(&new_instant.date()) {
            trace!(date = %new_instant.date(), "skipping non-working day");
            new_instant = new_instant.step_one_day(backwards)?;
        }
        Ok(new_instant)
    }

    /// Return the `instant`, if on a working day, or the boundary of the nearest working day in the
    /// direction of travel.
    ///
    /// Travelling forwards this is the midnight starting the next working day. Travelling
    /// backwards it is the midnight ending the previous working day, i.e. the start of the
    /// non-working span.
    fn nearest_working_boundary(
        &self,
        instant: &Instant,
        backwards: bool,
    ) -> Result<Instant, DateorroError> {
        if self.is_working(&instant.date()) {
            return Ok(*instant);
        }
        let mut new_instant = instant.at_midnight();
        if !backwards {
            new_instant = new_instant.step_one_day(false)?;
        }
        while self.is_non_working(&new_instant.date()) {
            trace!(date = %new_instant.date(), "skipping non-working day");
            new_instant = new_instant.step_one_day(backwards)?;
        }
        if backwards {
            new_instant = new_instant.step_one_day(false)?;
        }
        Ok(new_instant)
    }

    /// Offset an `instant` by a signed whole number of working days.
    ///
    /// The duration must be non-zero and an exact number of days, otherwise this fails with
    /// [`DateorroError::InvalidDuration`].
    ///
    /// When travelling forwards and the last working day ends exactly at midnight, `allow_midnight`
    /// permits the result to be that midnight even if it starts a non-working day. Otherwise the
    /// result is always on a working day.
    fn offset_by_working_days(
        &self,
        instant: &Instant,
        duration: &TimeDelta,
        allow_midnight: bool,
    ) -> Result<Instant, DateorroError> {
        if duration.is_zero() {
            return Err(InvalidDuration::Zero.into());
        }
        if !duration.is_whole_days() {
            return Err(InvalidDuration::PartialDay.into());
        }
        let backwards = *duration < TimeDelta::zero();
        let days = duration.whole_days().unsigned_abs();
        debug!(%instant, days, backwards, allow_midnight, "offsetting by working days");

        let mut new_instant = self.nearest_working_boundary(instant, backwards)?;
        for _ in 1..days {
            new_instant = self.step_one_working_day(&new_instant, backwards)?;
        }
        if allow_midnight && !backwards && new_instant.is_midnight() {
            new_instant.step_one_day(false)
        } else {
            self.step_one_working_day(&new_instant, backwards)
        }
    }

    /// Return all working dates between a start and end, inclusive.
    fn working_date_range(&self, start: &NaiveDate, end: &NaiveDate) -> Vec<NaiveDate> {
        start
            .iter_days()
            .take_while(|date| date <= end)
            .filter(|date| self.is_working(date))
            .collect()
    }

    /// Print a representation of the month.
    ///
    /// Working days show their day number, forced non-working days show `*` and other
    /// non-working days (default weekends) show `.`.
    fn print_month(&self, year: i32, month: u32) -> Result<String, DateorroError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DateorroError::InvalidDate {
                detail: format!("{}-{} is not a calendar month", year, month),
            }
        })?;
        let name = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or_default();
        let mut output = format!("{:>15} {}\n", name, year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let idx_start = (first.weekday().num_days_from_monday() + 1) % 7;
        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for (i, date) in first
            .iter_days()
            .take_while(|date| date.month() == month)
            .enumerate()
        {
            arr[i + idx_start as usize] = if self.is_working(&date) {
                format!("{:>2}", date.day())
            } else if self.day_override(&date) == Some(DayOverride::NonWorking) {
                " *".to_string()
            } else {
                " .".to_string()
            };
        }

        for row in 0..6 {
            output += &format!(
                "{} {} {} {} {} {} {}\n",
                &arr[row * 7],
                &arr[row * 7 + 1],
                &arr[row * 7 + 2],
                &arr[row * 7 + 3],
                &arr[row * 7 + 4],
                &arr[row * 7 + 5],
                &arr[row * 7 + 6],
            );
        }
        Ok(output)
    }
}
