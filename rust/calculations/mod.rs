//! Stateless date calculations.
//!
//! - [`offset_by_working_days`] and [`is_working`] use an optional [`WorkingCalendar`](crate::WorkingCalendar),
//!   falling back to the default weekend when none is given.
//! - [`offset`] adds an accelerated duration with no calendar awareness.
//! - [`normalize`] floors or ceils an instant to midnight.

mod accelerate;
mod normalize;
mod working;

pub use crate::calculations::{
    accelerate::offset,
    normalize::normalize,
    working::{is_working, offset_by_working_days},
};
