//! Container and membership predicates
//!
//! This module provides size and membership checks over arrays, strings and
//! plain mappings.

use std::slice;

use super::arg;
use super::number::{equal, within};
use crate::coerce::loose_eq;
use crate::value::{Kind, Value};

/// Mapping with no keys, empty array, empty string, null or undefined.
///
/// Zero and `false` are not empty.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::empty(&Value::from("")));
/// assert!(predicate::empty(&Value::Null));
/// assert!(!predicate::empty(&Value::from(0)));
/// assert!(!predicate::empty(&Value::from(" ")));
/// ```
pub fn empty(value: &Value) -> bool {
    match value {
        Value::Undefined | Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Arguments(values) | Value::Array(values) => values.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Structural size: key count, array length, or string length in UTF-16 code
/// units. `None` for kinds without a size.
fn size(value: &Value) -> Option<usize> {
    match value {
        Value::Object(map) => Some(map.len()),
        Value::Arguments(values) | Value::Array(values) => Some(values.len()),
        Value::String(s) => Some(s.encode_utf16().count()),
        _ => None,
    }
}

/// Size equals `args[0]`, or with two arguments lies within `[args[0], args[1]]`.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// let pair = Value::object([("a", 1), ("b", 2)]);
/// assert!(predicate::length(&pair, &[Value::from(2)]));
/// assert!(predicate::length(&Value::from(vec![1, 2, 3]), &[Value::from(1), Value::from(4)]));
/// assert!(!predicate::length(&Value::from("hi"), &[Value::from(3)]));
/// ```
pub fn length(value: &Value, args: &[Value]) -> bool {
    let Some(size) = size(value) else {
        return false;
    };
    let size = Value::from(size);

    if args.len() == 2 {
        within(&size, args)
    } else {
        equal(&size, slice::from_ref(arg(args, 0)))
    }
}

/// A plain mapping whose keys include every argument.
pub fn key(value: &Value, args: &[Value]) -> bool {
    let Some(keys) = value.keys() else {
        return false;
    };
    include(&Value::from(keys), args, false)
}

/// Membership of `candidates` in an array, string or number.
///
/// - arrays: a candidate matches when it loosely equals an element
/// - strings: a candidate matches when its string form is a substring
/// - numbers: searched as their string form
///
/// With `some` set, one matching candidate is enough; otherwise all must
/// match. Other kinds never match.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// let items = Value::from(vec![1, 2, 3]);
/// assert!(predicate::include(&items, &[Value::from(1), Value::from(2)], false));
/// assert!(!predicate::include(&items, &[Value::from(1), Value::from(5)], false));
/// assert!(predicate::include(&items, &[Value::from(1), Value::from(5)], true));
/// ```
pub fn include(value: &Value, candidates: &[Value], some: bool) -> bool {
    let haystack = match value.kind() {
        Kind::Array | Kind::String | Kind::Number => value.to_js_string(),
        _ => return false,
    };

    let matches = |candidate: &Value| match value {
        Value::Array(items) => items.iter().any(|item| loose_eq(item, candidate)),
        _ => haystack.contains(&candidate.to_js_string()),
    };

    if some {
        candidates.iter().any(matches)
    } else {
        candidates.iter().all(matches)
    }
}

/// Value is one of the candidates: [`include`] with `some` set, restricted to
/// numbers, strings and arrays.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// let candidates = [Value::from(1), Value::from(2), Value::from(3)];
/// assert!(predicate::is_in(&Value::from(3), &candidates));
/// assert!(predicate::is_in(&Value::from("b"), &[Value::from("a"), Value::from("b")]));
/// assert!(!predicate::is_in(&Value::from(true), &[Value::from(true)]));
/// ```
pub fn is_in(value: &Value, candidates: &[Value]) -> bool {
    matches!(value.kind(), Kind::Number | Kind::String | Kind::Array)
        && include(value, candidates, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: impl Into<Value>) -> Value {
        x.into()
    }

    fn nums(xs: &[i32]) -> Vec<Value> {
        xs.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn test_empty() {
        assert!(empty(&Value::object(Vec::<(String, Value)>::new())));
        assert!(empty(&v(Vec::<Value>::new())));
        assert!(empty(&v("")));
        assert!(empty(&Value::Null));
        assert!(empty(&Value::Undefined));
        assert!(empty(&Value::arguments(Vec::<Value>::new())));
        assert!(!empty(&v(0)));
        assert!(!empty(&v(false)));
        assert!(!empty(&v(" ")));
        assert!(!empty(&v(vec![0])));
        assert!(!empty(&Value::object([("a", Value::Null)])));
        assert!(!empty(&Value::buffer(Vec::new())));
    }

    #[test]
    fn test_length_exact() {
        assert!(length(&Value::object([("a", 1), ("b", 2)]), &nums(&[2])));
        assert!(length(&v(vec![1, 2, 3]), &nums(&[3])));
        assert!(length(&v("hi"), &nums(&[2])));
        assert!(length(&v("hi"), &[v("2")]));
        assert!(!length(&v("hi"), &nums(&[3])));
        assert!(length(&Value::arguments([1, 2]), &nums(&[2])));
    }

    #[test]
    fn test_length_range() {
        assert!(length(&v(vec![1, 2, 3]), &nums(&[1, 4])));
        assert!(length(&v(vec![1, 2, 3]), &nums(&[3, 3])));
        assert!(!length(&v(vec![1, 2, 3]), &nums(&[4, 8])));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(length(&v("héllo"), &nums(&[5])));
        assert!(length(&v("😀"), &nums(&[2])));
    }

    #[test]
    fn test_length_rejects_sizeless_values() {
        assert!(!length(&Value::Undefined, &nums(&[0])));
        assert!(!length(&Value::Null, &nums(&[0])));
        assert!(!length(&v(12), &nums(&[2])));
        assert!(!length(&v(vec![1]), &[]));
    }

    #[test]
    fn test_key() {
        let obj = Value::object([("a", 1), ("b", 2)]);
        assert!(key(&obj, &[v("a")]));
        assert!(key(&obj, &[v("a"), v("b")]));
        assert!(!key(&obj, &[v("a"), v("c")]));
        assert!(key(&obj, &[]));
        assert!(!key(&v(vec!["a"]), &[v("0")]));
        assert!(!key(&v("a"), &[v("0")]));
        assert!(key(&Value::arguments(["x", "y"]), &[v(1)]));
    }

    #[test]
    fn test_include_array() {
        let items = v(vec![1, 2, 3]);
        assert!(include(&items, &nums(&[1, 2]), false));
        assert!(!include(&items, &nums(&[1, 5]), false));
        assert!(include(&items, &nums(&[1, 5]), true));
        assert!(!include(&items, &nums(&[4, 5]), true));
        assert!(include(&v(vec!["1"]), &nums(&[1]), false));
    }

    #[test]
    fn test_include_string_and_number() {
        let text = v("hello world");
        assert!(include(&text, &[v("hello"), v("world")], false));
        assert!(!include(&text, &[v("hello"), v("moon")], false));
        assert!(include(&text, &[v("hello"), v("moon")], true));
        assert!(include(&v(12345), &[v(23)], false));
        assert!(include(&v(12345), &[v("45")], false));
        assert!(!include(&v(12345), &[v(6)], false));
    }

    #[test]
    fn test_include_empty_candidates() {
        assert!(include(&v(vec![1]), &[], false));
        assert!(!include(&v(vec![1]), &[], true));
    }

    #[test]
    fn test_include_rejects_other_kinds() {
        assert!(!include(&v(true), &[v(true)], false));
        assert!(!include(&Value::object([("a", 1)]), &[v("a")], false));
        assert!(!include(&v(f64::NAN), &[v("NaN")], false));
        assert!(!include(&Value::Null, &[], false));
    }

    #[test]
    fn test_is_in() {
        assert!(is_in(&v(3), &nums(&[1, 2, 3])));
        assert!(!is_in(&v(4), &nums(&[1, 2, 3])));
        assert!(is_in(&v("b"), &[v("a"), v("b")]));
        assert!(is_in(&v(vec![2]), &nums(&[1, 2])));
        assert!(!is_in(&Value::Null, &[Value::Null]));
        assert!(!is_in(&v(3), &[]));
    }
}
