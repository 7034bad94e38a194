//! Value types for points in time and signed durations.
//!
//! An [`Instant`] is a wall-clock datetime with an opaque offset tag. Durations are
//! [`chrono::TimeDelta`] values, given day-granularity views by the [`DayDuration`] trait.

mod duration;
mod instant;

pub use crate::time::{
    duration::DayDuration,
    instant::{ndt, Instant},
};
