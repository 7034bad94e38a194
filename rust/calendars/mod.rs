//! Working day calendars and the date arithmetic built on them.
//!
//! A [`WorkingCalendar`] holds per-date [`DayOverride`]s on top of the default Saturday/Sunday
//! weekend. The [`WorkingDayRoll`] trait classifies dates and performs working day stepping and
//! offsetting for any type that can answer the override lookup.

mod calendar;
mod dateroll;

pub use crate::calendars::{
    calendar::{DayOverride, WorkingCalendar},
    dateroll::WorkingDayRoll,
};
