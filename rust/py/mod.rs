//! Python bindings, compiled with the `python` feature.

mod calculations;

pub(crate) use crate::py::calculations::{
    calc_datetime_py, calc_normalized_datetime_py, calc_working_datetime_py,
    check_working_datetime_py,
};
