//! Date predicates
//!
//! [`year`] is the only predicate in the crate that is not referentially
//! transparent: it measures against the current calendar year, so the same
//! date can pass today and fail next January. Use [`year_as_of`] when a fixed
//! reference point is needed.

use chrono::{DateTime, Datelike, Utc};

use super::number::{least, within};
use crate::value::Value;

/// Age in whole calendar years, measured against the current year.
///
/// With two arguments the age must lie within `[args[0], args[1]]`; with one
/// it must be at least `args[0]`.
///
/// # Example
///
/// ```rust
/// use chrono::{Datelike, Utc};
/// use vetting::{predicate, Value};
///
/// let born = Value::date_ymd(Utc::now().year() - 20, 6, 1).unwrap();
/// assert!(predicate::year(&born, &[Value::from(18)]));
/// assert!(!predicate::year(&born, &[Value::from(21)]));
/// assert!(predicate::year(&born, &[Value::from(18), Value::from(25)]));
/// ```
pub fn year(value: &Value, args: &[Value]) -> bool {
    year_as_of(value, args, Utc::now())
}

/// [`year`] measured against `now` instead of the wall clock.
pub fn year_as_of(value: &Value, args: &[Value], now: DateTime<Utc>) -> bool {
    let Value::Date(date) = value else {
        return false;
    };
    let age = Value::from(now.year() - date.year());

    if args.len() >= 2 {
        within(&age, args)
    } else {
        least(&age, args)
    }
}
