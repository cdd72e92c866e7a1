//! Type classification predicates
//!
//! Each predicate here is a single comparison against [`Value::kind`]. `NaN`
//! is the one overlap: it is of numeric kind and passes [`nan`], but fails
//! [`number`].

use crate::value::{Kind, Value};

/// Value is the not-a-number marker.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::nan(&Value::from(f64::NAN)));
/// assert!(!predicate::nan(&Value::from(1)));
/// assert!(!predicate::nan(&Value::from("NaN")));
/// ```
pub fn nan(value: &Value) -> bool {
    value.kind() == Kind::NaN
}

/// Value is an array.
pub fn array(value: &Value) -> bool {
    value.kind() == Kind::Array
}

/// Value is a byte buffer.
pub fn buffer(value: &Value) -> bool {
    value.kind() == Kind::Buffer
}

/// Value is a plain mapping. Argument lists count as plain mappings.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::object(&Value::object([("a", 1)])));
/// assert!(predicate::object(&Value::arguments([1, 2])));
/// assert!(!predicate::object(&Value::from(vec![1, 2])));
/// ```
pub fn object(value: &Value) -> bool {
    value.kind().is_mapping()
}

/// Value is a positional argument list.
pub fn arguments(value: &Value) -> bool {
    value.kind() == Kind::Arguments
}

/// Value is a boolean.
pub fn boolean(value: &Value) -> bool {
    value.kind() == Kind::Boolean
}

/// Value is a regular expression.
pub fn regexp(value: &Value) -> bool {
    value.kind() == Kind::RegExp
}

/// Value is an error.
pub fn error(value: &Value) -> bool {
    value.kind() == Kind::Error
}

/// Value is a function.
pub fn function(value: &Value) -> bool {
    value.kind() == Kind::Function
}

/// Value is a string.
pub fn string(value: &Value) -> bool {
    value.kind() == Kind::String
}

/// Value is a date.
pub fn date(value: &Value) -> bool {
    value.kind() == Kind::Date
}

/// Value is numeric and not `NaN`. Infinities are numbers.
pub fn number(value: &Value) -> bool {
    value.kind() == Kind::Number
}

/// Value is neither null nor undefined.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::exist(&Value::from(0)));
/// assert!(predicate::exist(&Value::from(false)));
/// assert!(!predicate::exist(&Value::Null));
/// assert!(!predicate::exist(&Value::Undefined));
/// ```
pub fn exist(value: &Value) -> bool {
    !matches!(value.kind(), Kind::Undefined | Kind::Null)
}
