//! Coercion rules shared by the comparison and membership predicates
//!
//! All implicit conversions live here so that they can be audited in one
//! place:
//!
//! - [`operand`] decides which values may take part in a comparison at all
//!   (numbers and non-empty strings; everything else fails).
//! - [`string_to_number`] converts a whole string to a number the way loose
//!   equality does.
//! - [`parse_float`] reads the longest numeric prefix of a bound argument.
//! - [`to_string`] produces the string form used by pattern and substring
//!   predicates.
//! - [`loose_eq`] is the loose equality used by `equal` and `include`.

use crate::value::Value;

/// A value admitted to a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Operand<'a> {
    Number(f64),
    Text(&'a str),
}

impl Operand<'_> {
    pub(crate) fn to_number(self) -> f64 {
        match self {
            Operand::Number(n) => n,
            Operand::Text(s) => string_to_number(s),
        }
    }
}

/// Numeric-or-non-empty-string, else `None`.
pub(crate) fn operand(value: &Value) -> Option<Operand<'_>> {
    match value {
        Value::Number(n) if !n.is_nan() => Some(Operand::Number(*n)),
        Value::String(s) if !s.is_empty() => Some(Operand::Text(s)),
        _ => None,
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Whole-string numeric conversion: surrounding whitespace is ignored, the
/// empty string is zero, and any trailing garbage makes the result `NaN`.
pub(crate) fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    let radix = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, *radix)));
    if let Some((digits, radix)) = radix {
        return radix_to_number(digits, radix);
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // `f64::from_str` also accepts "inf" and "nan", which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned digits in `radix`; no sign, no separators. Accumulates in `f64`
/// so oversized literals stay finite.
fn radix_to_number(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Longest numeric prefix of the argument's string form, `NaN` when there is
/// none. A missing argument is `NaN`.
pub(crate) fn parse_float(value: &Value) -> f64 {
    if let Value::Number(n) = value {
        return *n;
    }

    let text = to_string(value);
    let s = text.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// String form of a number: integral values print without a fraction, very
/// large and very small magnitudes use exponent notation.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// The string form of any value.
pub(crate) fn to_string(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(*n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Undefined | Value::Null => String::new(),
                other => to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Arguments(_) => "[object Arguments]".to_string(),
        Value::Date(d) => d
            .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
            .to_string(),
        Value::RegExp(re) => format!("/{}/", re.as_str()),
        Value::Error(message) if message.is_empty() => "Error".to_string(),
        Value::Error(message) => format!("Error: {message}"),
        Value::Function(name) => format!("function {name}() {{ [native code] }}"),
        Value::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

/// Loose equality.
///
/// - null and undefined equal each other and nothing else
/// - numbers and strings compare numerically when mixed
/// - booleans compare as 0 / 1
/// - two non-primitive values are never equal (there is no identity to share)
/// - a non-primitive compared with a primitive compares by its string form
pub(crate) fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::String(s)) | (Value::String(s), Value::Number(x)) => {
            *x == string_to_number(s)
        }
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loose_eq(&Value::Number(f64::from(u8::from(*x))), other)
        }
        _ if is_primitive(a) => loose_eq(a, &Value::String(to_string(b))),
        _ if is_primitive(b) => loose_eq(&Value::String(to_string(a)), b),
        _ => false,
    }
}
