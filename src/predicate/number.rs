//! Numeric and comparison predicates
//!
//! Comparisons only admit numbers and non-empty strings (see
//! [`crate::coerce`]); every other kind fails before any conversion happens.
//! The relational predicates are built from each other:
//!
//! - `least` = `equal` or `above`
//! - `most` = `equal` or `below`
//! - `within` = `least(low)` and `most(high)`

use std::slice;

use super::arg;
use crate::coerce::{self, operand};
use crate::value::Value;

/// Strictly greater than zero. Zero is neither positive nor negative.
pub fn positive(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n > 0.0)
}

/// Strictly less than zero.
pub fn negative(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n < 0.0)
}

/// A number with no fractional part, including negative and integer-valued
/// floats. Infinities are not integers.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::integer(&Value::from(-3)));
/// assert!(predicate::integer(&Value::from(2.0)));
/// assert!(!predicate::integer(&Value::from(2.5)));
/// assert!(!predicate::integer(&Value::from("2")));
/// ```
pub fn integer(value: &Value) -> bool {
    value.as_number().is_some_and(|n| n % 1.0 == 0.0)
}

/// A number that is not an integer.
pub fn float(value: &Value) -> bool {
    value.as_number().is_some() && !integer(value)
}

/// Value loosely equals `args[0]`.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::equal(&Value::from(5), &[Value::from("5")]));
/// assert!(predicate::equal(&Value::from("abc"), &[Value::from("abc")]));
/// assert!(!predicate::equal(&Value::from(""), &[Value::from("")]));
/// assert!(!predicate::equal(&Value::from(vec![5]), &[Value::from(5)]));
/// ```
pub fn equal(value: &Value, args: &[Value]) -> bool {
    operand(value).is_some() && coerce::loose_eq(value, arg(args, 0))
}

/// Value is greater than the numeric prefix of `args[0]`.
pub fn above(value: &Value, args: &[Value]) -> bool {
    let bound = coerce::parse_float(arg(args, 0));
    operand(value).is_some_and(|op| op.to_number() > bound)
}

/// Value is less than the numeric prefix of `args[0]`.
pub fn below(value: &Value, args: &[Value]) -> bool {
    let bound = coerce::parse_float(arg(args, 0));
    operand(value).is_some_and(|op| op.to_number() < bound)
}

/// `equal` or `above`.
pub fn least(value: &Value, args: &[Value]) -> bool {
    equal(value, args) || above(value, args)
}

/// `equal` or `below`.
pub fn most(value: &Value, args: &[Value]) -> bool {
    equal(value, args) || below(value, args)
}

/// Value lies in the inclusive range `[args[0], args[1]]`.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// let bounds = [Value::from(1), Value::from(10)];
/// assert!(predicate::within(&Value::from(1), &bounds));
/// assert!(predicate::within(&Value::from(10), &bounds));
/// assert!(!predicate::within(&Value::from(11), &bounds));
/// ```
pub fn within(value: &Value, args: &[Value]) -> bool {
    least(value, slice::from_ref(arg(args, 0))) && most(value, slice::from_ref(arg(args, 1)))
}

/// Latitude: within `[-90, 90]`.
pub fn lat(value: &Value) -> bool {
    within(value, &[Value::Number(-90.0), Value::Number(90.0)])
}

/// Longitude: within `[-180, 180]`.
pub fn lng(value: &Value) -> bool {
    within(value, &[Value::Number(-180.0), Value::Number(180.0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    #[test]
    fn test_positive_negative() {
        assert!(positive(&v(1)));
        assert!(!positive(&v(0)));
        assert!(!positive(&v(-1)));
        assert!(negative(&v(-0.5)));
        assert!(!negative(&v(0)));
        assert!(!negative(&v(-0.0)));
        assert!(!positive(&v("5")));
        assert!(!positive(&v(f64::NAN)));
    }

    #[test]
    fn test_integer_and_float() {
        assert!(integer(&v(0)));
        assert!(integer(&v(-12)));
        assert!(integer(&v(4.0)));
        assert!(!integer(&v(4.2)));
        assert!(float(&v(4.2)));
        assert!(!float(&v(4)));
        assert!(!integer(&v(f64::NAN)));
        assert!(!float(&v(f64::NAN)));
        assert!(!integer(&v(f64::INFINITY)));
        assert!(float(&v(f64::INFINITY)));
        assert!(!integer(&v(true)));
    }

    #[test]
    fn test_equal() {
        assert!(equal(&v(3), &[v(3)]));
        assert!(equal(&v(3), &[v("3")]));
        assert!(equal(&v("3"), &[v(3)]));
        assert!(equal(&v("abc"), &[v("abc")]));
        assert!(equal(&v(1), &[v(true)]));
        assert!(!equal(&v(3), &[v(4)]));
        assert!(!equal(&v(3), &[]));
        assert!(!equal(&v(0), &[Value::Null]));
        assert!(!equal(&v(true), &[v(true)]));
        assert!(!equal(&Value::Null, &[Value::Null]));
        assert!(!equal(&v(f64::NAN), &[v(f64::NAN)]));
    }

    #[test]
    fn test_above_and_below() {
        assert!(above(&v(5), &[v(4)]));
        assert!(above(&v(5), &[v("4")]));
        assert!(above(&v(5), &[v("4abc")]));
        assert!(above(&v("10"), &[v(9)]));
        assert!(!above(&v(4), &[v(4)]));
        assert!(!above(&v("abc"), &[v(1)]));
        assert!(!above(&v(5), &[v("abc")]));
        assert!(!above(&v(5), &[]));
        assert!(below(&v(3), &[v(4)]));
        assert!(below(&v(-1), &[v("0")]));
        assert!(!below(&v(4), &[v(4)]));
    }

    #[test]
    fn test_signed_radix_strings_are_not_numbers() {
        assert!(equal(&v("0x1f"), &[v(31)]));
        assert!(!equal(&v("0x+5"), &[v(5)]));
        assert!(!above(&v("0x+5"), &[v(4)]));
        assert!(!below(&v("0x-5"), &[v(6)]));
    }

    #[test]
    fn test_comparisons_reject_ineligible_values() {
        let bound = [v(-100)];
        assert!(!above(&v(""), &bound));
        assert!(!above(&v(true), &bound));
        assert!(!above(&v(vec![1]), &bound));
        assert!(!above(&Value::object([("a", 1)]), &bound));
        assert!(!above(&Value::Null, &bound));
        assert!(!below(&v(""), &[v(100)]));
    }

    #[test]
    fn test_least_and_most() {
        assert!(least(&v(5), &[v(5)]));
        assert!(least(&v(6), &[v(5)]));
        assert!(!least(&v(4), &[v(5)]));
        assert!(most(&v(5), &[v(5)]));
        assert!(most(&v(4), &[v(5)]));
        assert!(!most(&v(6), &[v(5)]));
    }

    #[test]
    fn test_within_is_inclusive() {
        let bounds = [v(1), v(10)];
        assert!(within(&v(1), &bounds));
        assert!(within(&v(5.5), &bounds));
        assert!(within(&v(10), &bounds));
        assert!(!within(&v(0), &bounds));
        assert!(!within(&v(10.01), &bounds));
        assert!(within(&v("5"), &bounds));
        assert!(!within(&v(5), &[v(1)]));
        assert!(!within(&v(5), &[]));
    }

    #[test]
    fn test_lat_lng() {
        assert!(lat(&v(45)));
        assert!(lat(&v(-90)));
        assert!(lat(&v(90)));
        assert!(!lat(&v(90.5)));
        assert!(!lat(&v(-91)));
        assert!(lng(&v(180)));
        assert!(lng(&v(-179.9)));
        assert!(!lng(&v(181)));
        assert!(!lat(&Value::Null));
    }
}
