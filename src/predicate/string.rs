//! String and format predicates
//!
//! Format checks are backed by regular expressions compiled once on first use,
//! or by a real parser where one exists (`url`, `json`). None of them can fail:
//! a malformed pattern argument or an unparsable input is simply `false`.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::de::{Deserialize, IgnoredAny};
use url::Url;

use super::arg;
use crate::value::{Kind, Value};

// Letter classes are spelled out in ASCII: `(?i)` folds with Unicode rules,
// which lets `k` match the Kelvin sign and `s` match the long s.
static HEXA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-fA-F0-9]+$").expect("invalid hexa pattern"));

static ALPHANUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("invalid alphanum pattern"));

// The trailing group is an ASCII word boundary after the top-level domain.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}(?:$|[^a-zA-Z0-9_])",
    )
    .expect("invalid email pattern")
});

static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$")
        .expect("invalid dotted quad pattern")
});

/// Card networks recognised by [`creditcard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardIssuer {
    /// Starts with 4; 13 or 16 digits.
    Visa,
    /// Starts with 51 through 55; 16 digits.
    MasterCard,
    /// Starts with 34 or 37; 15 digits.
    AmericanExpress,
    /// Starts with 300 through 305, 36 or 38; 14 digits.
    DinersClub,
    /// Starts with 6011 or 65; 16 digits.
    Discover,
    /// Starts with 2131 or 1800 (15 digits), or 35 (16 digits).
    Jcb,
}

static CARD_PATTERNS: LazyLock<Vec<(CardIssuer, Regex)>> = LazyLock::new(|| {
    [
        (CardIssuer::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
        (CardIssuer::MasterCard, r"^5[1-5][0-9]{14}$"),
        (CardIssuer::AmericanExpress, r"^3[47][0-9]{13}$"),
        (CardIssuer::DinersClub, r"^3(?:0[0-5]|[68][0-9])[0-9]{11}$"),
        (CardIssuer::Discover, r"^6(?:011|5[0-9]{2})[0-9]{12}$"),
        (CardIssuer::Jcb, r"^(?:2131|1800|35[0-9]{3})[0-9]{11}$"),
    ]
    .into_iter()
    .map(|(issuer, pattern)| (issuer, Regex::new(pattern).expect("invalid card pattern")))
    .collect()
});

/// A string or number made only of hex digits.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::hexa(&Value::from("ff00AA")));
/// assert!(predicate::hexa(&Value::from(255)));
/// assert!(!predicate::hexa(&Value::from("0xff")));
/// ```
pub fn hexa(value: &Value) -> bool {
    matches!(value.kind(), Kind::String | Kind::Number) && HEXA.is_match(&value.to_js_string())
}

/// A string made only of ASCII letters and digits.
pub fn alphanum(value: &Value) -> bool {
    value.as_str().is_some_and(|s| ALPHANUM.is_match(s))
}

/// The string form of the value contains `args[0]`, which must be a string.
/// The first backslash in the needle is dropped before searching.
pub fn contain(value: &Value, args: &[Value]) -> bool {
    if !matches!(value.kind(), Kind::String | Kind::Number) {
        return false;
    }
    let Some(needle) = arg(args, 0).as_str() else {
        return false;
    };
    value.to_js_string().contains(&needle.replacen('\\', "", 1))
}

fn compile(pattern: &Value, case_insensitive: bool) -> Option<Regex> {
    let source = match pattern {
        Value::Undefined => return None,
        Value::String(s) => s.clone(),
        Value::RegExp(re) => re.as_str().to_string(),
        other => other.to_js_string(),
    };
    RegexBuilder::new(&source)
        .case_insensitive(case_insensitive)
        .build()
        .ok()
}

/// The string form of the value matches the pattern in `args[0]`.
///
/// The pattern may be a string or a regexp value. A missing or invalid
/// pattern never matches.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::matches(&Value::from("abc"), &[Value::from("^a")]));
/// assert!(predicate::matches(&Value::from(123), &[Value::from("^1")]));
/// assert!(!predicate::matches(&Value::from("ABC"), &[Value::from("^a")]));
/// assert!(!predicate::matches(&Value::from("abc"), &[Value::from("(")]));
/// ```
pub fn matches(value: &Value, args: &[Value]) -> bool {
    matches_with(value, args, false)
}

/// Case-insensitive [`matches`].
pub fn imatches(value: &Value, args: &[Value]) -> bool {
    matches_with(value, args, true)
}

/// [`matches`] with explicit case sensitivity.
pub fn matches_with(value: &Value, args: &[Value], case_insensitive: bool) -> bool {
    compile(arg(args, 0), case_insensitive).is_some_and(|re| re.is_match(&value.to_js_string()))
}

/// Informal RFC 5322 address check.
pub fn email(value: &Value) -> bool {
    EMAIL.is_match(&value.to_js_string())
}

/// A string that parses as a URL with a scheme, a host and a path.
///
/// # Example
///
/// ```rust
/// use vetting::{predicate, Value};
///
/// assert!(predicate::url(&Value::from("https://example.com/docs")));
/// assert!(!predicate::url(&Value::from("example.com")));
/// assert!(!predicate::url(&Value::from("mailto:someone@example.com")));
/// ```
pub fn url(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    Url::parse(s).is_ok_and(|parsed| {
        !parsed.scheme().is_empty()
            && parsed.host_str().is_some_and(|host| !host.is_empty())
            && !parsed.path().is_empty()
    })
}

/// Dotted-quad IPv4 address: four groups of one to three digits, each in
/// `0..=255`. Leading zeros are accepted.
pub fn ip(value: &Value) -> bool {
    let Some(s) = value.as_str() else {
        return false;
    };
    DOTTED_QUAD.is_match(s)
        && s.split('.')
            .all(|octet| octet.parse::<u16>().is_ok_and(|n| n <= 255))
}

/// Issuer of a card number, if it matches one of the known numbering schemes.
///
/// Accepts strings and numbers; every non-digit is ignored, so spaced or
/// dashed numbers work.
///
/// # Example
///
/// ```rust
/// use vetting::predicate::{card_issuer, CardIssuer};
/// use vetting::Value;
///
/// assert_eq!(card_issuer(&Value::from("4111 1111 1111 1111")), Some(CardIssuer::Visa));
/// assert_eq!(card_issuer(&Value::from("1234")), None);
/// ```
pub fn card_issuer(value: &Value) -> Option<CardIssuer> {
    if !matches!(value.kind(), Kind::String | Kind::Number) {
        return None;
    }
    let digits: String = value
        .to_js_string()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    CARD_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&digits))
        .map(|(issuer, _)| *issuer)
}

/// Card number from one of the known issuers.
pub fn creditcard(value: &Value) -> bool {
    card_issuer(value).is_some()
}

// Syntax only: no tree is built and nesting depth is unbounded.
fn parse_json(s: &str) -> Result<(), serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(s);
    de.disable_recursion_limit();
    IgnoredAny::deserialize(&mut de)?;
    de.end()
}

/// A string holding a valid JSON document.
pub fn json(value: &Value) -> bool {
    value.as_str().is_some_and(|s| parse_json(s).is_ok())
}
