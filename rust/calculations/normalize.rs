use crate::error::DateorroError;
use crate::time::Instant;

/// Normalize an `instant` to midnight.
///
/// An instant already at midnight is returned unchanged. Otherwise the result is the midnight
/// starting the instant's date, or, if `ceiling`, the midnight ending it.
///
/// # Examples
/// ```rust
/// # use dateorro::{normalize, ndt, Instant};
/// let noon = Instant::try_new(2018, 1, 5, 12, 0, 0, 0, None).unwrap();
/// assert_eq!(normalize(&noon, false).unwrap(), ndt(2018, 1, 5));
/// assert_eq!(normalize(&noon, true).unwrap(), ndt(2018, 1, 6));
/// ```
pub fn normalize(instant: &Instant, ceiling: bool) -> Result<Instant, DateorroError> {
    if instant.is_midnight() {
        return Ok(*instant);
    }
    let floor = instant.at_midnight();
    if ceiling {
        floor.step_one_day(false)
    } else {
        Ok(floor)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ndt;
    use chrono::FixedOffset;

    #[test]
    fn test_normalize() {
        let noon = Instant::try_new(2018, 1, 1, 12, 0, 0, 0, None).unwrap();
        let options: Vec<(Instant, bool, Instant)> = vec![
            (noon, true, ndt(2018, 1, 2)),
            (ndt(2018, 1, 1), true, ndt(2018, 1, 1)),
            (noon, false, ndt(2018, 1, 1)),
            (ndt(2018, 1, 1), false, ndt(2018, 1, 1)),
        ];
        for option in options.iter() {
            assert_eq!(normalize(&option.0, option.1).unwrap(), option.2);
        }
    }

    #[test]
    fn test_normalize_idempotent() {
        let i = Instant::try_new(2018, 1, 5, 23, 59, 59, 999_999_999, None).unwrap();
        for ceiling in [true, false] {
            let once = normalize(&i, ceiling).unwrap();
            assert_eq!(normalize(&once, ceiling).unwrap(), once);
        }
    }

    #[test]
    fn test_normalize_sub_second_is_not_midnight() {
        let i = Instant::try_new(2018, 1, 5, 0, 0, 0, 1, None).unwrap();
        assert_eq!(normalize(&i, true).unwrap(), ndt(2018, 1, 6));
        assert_eq!(normalize(&i, false).unwrap(), ndt(2018, 1, 5));
    }

    #[test]
    fn test_normalize_preserves_offset_tag() {
        let tag = FixedOffset::east_opt(9 * 3600);
        let i = Instant::try_new(2018, 1, 5, 12, 0, 0, 0, tag).unwrap();
        assert_eq!(normalize(&i, true).unwrap().offset(), tag);
        assert_eq!(normalize(&i, false).unwrap().offset(), tag);
    }
}
