//! Dynamic values and their classification
//!
//! Every predicate in this crate takes a [`Value`]: a closed enum covering the
//! runtime shapes a guard may be asked about. Classification happens in one
//! place, [`Value::kind`], and predicates switch on the resulting [`Kind`]
//! instead of probing the value ad hoc.
//!
//! # Example
//!
//! ```rust
//! use vetting::{Kind, Value};
//!
//! assert_eq!(Value::from(42).kind(), Kind::Number);
//! assert_eq!(Value::from(f64::NAN).kind(), Kind::NaN);
//! assert_eq!(Value::from("hi").kind(), Kind::String);
//! assert_eq!(Value::object([("a", 1)]).kind(), Kind::Object);
//! assert_eq!(Value::arguments([1, 2]).kind(), Kind::Arguments);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;

use crate::coerce;

/// A runtime value that predicates can be evaluated against.
///
/// `Undefined` is the default and stands for "no value at all", as opposed to
/// an explicit `Null`.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. `NaN` is a number that classifies as [`Kind::NaN`].
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A plain key-value mapping.
    Object(BTreeMap<String, Value>),
    /// A positional argument list. Classified as a plain mapping whose keys are
    /// the positions `"0"`, `"1"`, ...
    Arguments(Vec<Value>),
    /// A point in time.
    Date(DateTime<Utc>),
    /// A compiled regular expression.
    RegExp(Regex),
    /// An error carrying its message.
    Error(String),
    /// A callable, identified by name.
    Function(String),
    /// A raw byte buffer.
    Buffer(Vec<u8>),
}

/// The classification tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Undefined`]
    Undefined,
    /// [`Value::Null`]
    Null,
    /// A numeric value holding the not-a-number marker.
    NaN,
    /// A numeric value that is not `NaN`.
    Number,
    /// [`Value::String`]
    String,
    /// [`Value::Bool`]
    Boolean,
    /// [`Value::Array`]
    Array,
    /// [`Value::Buffer`]
    Buffer,
    /// [`Value::Object`]
    Object,
    /// [`Value::Arguments`]
    Arguments,
    /// [`Value::RegExp`]
    RegExp,
    /// [`Value::Error`]
    Error,
    /// [`Value::Function`]
    Function,
    /// [`Value::Date`]
    Date,
}

impl Kind {
    /// Lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::NaN => "nan",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Array => "array",
            Kind::Buffer => "buffer",
            Kind::Object => "object",
            Kind::Arguments => "arguments",
            Kind::RegExp => "regexp",
            Kind::Error => "error",
            Kind::Function => "function",
            Kind::Date => "date",
        }
    }

    /// True for both numeric kinds, `Number` and `NaN`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Number | Kind::NaN)
    }

    /// True for kinds treated as a plain mapping: objects and argument lists.
    pub fn is_mapping(self) -> bool {
        matches!(self, Kind::Object | Kind::Arguments)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Classify this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(n) if n.is_nan() => Kind::NaN,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Arguments(_) => Kind::Arguments,
            Value::Date(_) => Kind::Date,
            Value::RegExp(_) => Kind::RegExp,
            Value::Error(_) => Kind::Error,
            Value::Function(_) => Kind::Function,
            Value::Buffer(_) => Kind::Buffer,
        }
    }

    /// Build a plain mapping from key-value pairs.
    ///
    /// ```rust
    /// use vetting::Value;
    ///
    /// let user = Value::object([("name", Value::from("ada")), ("age", Value::from(36))]);
    /// assert_eq!(user.keys().map(|k| k.len()), Some(2));
    /// ```
    pub fn object<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a positional argument list.
    pub fn arguments<V, I>(values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Arguments(values.into_iter().map(Into::into).collect())
    }

    /// Wrap raw bytes as a buffer.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Buffer(bytes.into())
    }

    /// An error value with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// A function value with the given name.
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(name.into())
    }

    /// Compile `pattern` into a regular-expression value.
    pub fn regexp(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Value::RegExp)
    }

    /// A date at midnight UTC, or `None` for an invalid calendar date.
    pub fn date_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Value::from)
    }

    /// The numeric payload, if this value classifies as [`Kind::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Keys of a plain mapping, in key order; positions for argument lists.
    /// `None` for every other kind.
    pub fn keys(&self) -> Option<Vec<String>> {
        match self {
            Value::Object(map) => Some(map.keys().cloned().collect()),
            Value::Arguments(values) => Some((0..values.len()).map(|i| i.to_string()).collect()),
            _ => None,
        }
    }

    /// The string form coercing predicates test against (`match`, `hexa`,
    /// `include`, ...).
    ///
    /// ```rust
    /// use vetting::Value;
    ///
    /// assert_eq!(Value::from(42).to_js_string(), "42");
    /// assert_eq!(Value::from(vec![1, 2]).to_js_string(), "1,2");
    /// assert_eq!(Value::Null.to_js_string(), "null");
    /// ```
    pub fn to_js_string(&self) -> String {
        coerce::to_string(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Arguments(a), Value::Arguments(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Date(date.and_time(NaiveTime::MIN).and_utc())
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::RegExp(re)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        const PATTERNS: &[&str] = &["^a", "[0-9]+", "(?i)hello", "x|y", ""];

        let leaf = prop_oneof![
            Just(Value::Undefined),
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(Value::Number),
            "[0-9a-f.@]{0,16}|.{0,12}".prop_map(Value::String),
            (-2_208_988_800i64..4_102_444_800)
                .prop_filter_map("timestamp in range", |secs| {
                    DateTime::from_timestamp(secs, 0).map(Value::Date)
                }),
            prop::sample::select(PATTERNS)
                .prop_filter_map("valid pattern", |p| Regex::new(p).ok().map(Value::RegExp)),
            ".{0,8}".prop_map(Value::Error),
            "[a-z_]{0,8}".prop_map(Value::Function),
            prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::Buffer),
        ];

        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,3}", inner.clone(), 0..4)
                    .prop_map(Value::Object),
                prop::collection::vec(inner, 0..4).prop_map(Value::Arguments),
            ]
        })
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::Null.kind(), Kind::Null);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from(1.5).kind(), Kind::Number);
        assert_eq!(Value::from(f64::NAN).kind(), Kind::NaN);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(vec![1]).kind(), Kind::Array);
        assert_eq!(Value::object([("a", 1)]).kind(), Kind::Object);
        assert_eq!(Value::arguments([1]).kind(), Kind::Arguments);
        assert_eq!(Value::date_ymd(2020, 1, 1).unwrap().kind(), Kind::Date);
        assert_eq!(Value::regexp("a+").unwrap().kind(), Kind::RegExp);
        assert_eq!(Value::error("boom").kind(), Kind::Error);
        assert_eq!(Value::function("f").kind(), Kind::Function);
        assert_eq!(Value::buffer(vec![1u8, 2]).kind(), Kind::Buffer);
    }

    #[test]
    fn test_nan_is_numeric_kind() {
        assert!(Kind::NaN.is_numeric());
        assert!(Kind::Number.is_numeric());
        assert!(!Kind::String.is_numeric());
    }

    #[test]
    fn test_arguments_is_mapping() {
        assert!(Kind::Arguments.is_mapping());
        assert!(Kind::Object.is_mapping());
        assert!(!Kind::Array.is_mapping());
    }

    #[test]
    fn test_keys() {
        let obj = Value::object([("b", 2), ("a", 1)]);
        assert_eq!(obj.keys(), Some(vec!["a".to_string(), "b".to_string()]));

        let args = Value::arguments(["x", "y"]);
        assert_eq!(args.keys(), Some(vec!["0".to_string(), "1".to_string()]));

        assert_eq!(Value::from(vec![1, 2]).keys(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }

    #[test]
    fn test_invalid_date() {
        assert!(Value::date_ymd(2021, 2, 30).is_none());
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value = serde_json::from_str(r#"{"a":[1,"b",null],"c":true}"#).unwrap();
        let value = Value::from(json);
        let expected = Value::object([
            (
                "a",
                Value::Array(vec![Value::from(1), Value::from("b"), Value::Null]),
            ),
            ("c", Value::from(true)),
        ]);
        assert_eq!(value, expected);
    }

    #[test]
    fn test_regexp_equality_by_pattern() {
        assert_eq!(Value::regexp("a+").unwrap(), Value::regexp("a+").unwrap());
        assert_ne!(Value::regexp("a+").unwrap(), Value::regexp("b+").unwrap());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::RegExp.to_string(), "regexp");
        assert_eq!(Kind::NaN.to_string(), "nan");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn value_arbitrary_always_classifies(value in any::<Value>()) {
                let kind = value.kind();
                prop_assert_eq!(kind == Kind::NaN, matches!(value, Value::Number(n) if n.is_nan()));
            }
        }
    }
}
