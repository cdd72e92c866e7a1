//! Name-based predicate lookup
//!
//! The registry is an immutable table from predicate name, canonical or alias,
//! to a [`PredicateDef`]. It is built once on first use and never changes
//! afterwards; aliases resolve to the very same definition as their canonical
//! name.
//!
//! # Example
//!
//! ```rust
//! use vetting::{is, registry, Error, Value};
//!
//! assert_eq!(is(&Value::from(5), "above", &[Value::from(3)]), Ok(true));
//! assert_eq!(is(&Value::from(5), "greaterThan", &[Value::from(7)]), Ok(false));
//!
//! let err = is(&Value::from(5), "shiny", &[]).unwrap_err();
//! assert_eq!(err, Error::UnknownPredicate { name: "shiny".to_string() });
//!
//! let within = registry().get("between").unwrap();
//! assert_eq!(within.name(), "within");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::predicate::{self, Predicate};
use crate::value::Value;

/// Signature shared by every registered predicate.
pub type PredicateFn = fn(&Value, &[Value]) -> bool;

/// A registered predicate: canonical name, aliases, and implementation.
#[derive(Clone, Copy)]
pub struct PredicateDef {
    name: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    func: PredicateFn,
}

impl PredicateDef {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alternative names resolving to this definition.
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// One-line summary of what the predicate checks.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The implementation.
    pub fn func(&self) -> PredicateFn {
        self.func
    }

    /// Evaluate against `value` with `args`.
    #[inline]
    pub fn check(&self, value: &Value, args: &[Value]) -> bool {
        (self.func)(value, args)
    }
}

impl fmt::Debug for PredicateDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateDef")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .finish_non_exhaustive()
    }
}

macro_rules! def {
    ($name:literal $(| $alias:literal)*, $description:literal, $func:expr) => {
        PredicateDef {
            name: $name,
            aliases: &[$($alias),*],
            description: $description,
            func: $func,
        }
    };
}

static DEFINITIONS: &[PredicateDef] = &[
    // types
    def!("nan" | "NaN", "numeric not-a-number marker", |v, _| predicate::nan(v)),
    def!("array", "array", |v, _| predicate::array(v)),
    def!("buffer", "byte buffer", |v, _| predicate::buffer(v)),
    def!("object", "plain mapping or argument list", |v, _| predicate::object(v)),
    def!("arguments", "positional argument list", |v, _| predicate::arguments(v)),
    def!("boolean", "boolean", |v, _| predicate::boolean(v)),
    def!("regexp", "regular expression", |v, _| predicate::regexp(v)),
    def!("error", "error", |v, _| predicate::error(v)),
    def!("function", "function", |v, _| predicate::function(v)),
    def!("string", "string", |v, _| predicate::string(v)),
    def!("date", "date", |v, _| predicate::date(v)),
    def!("number", "number other than NaN", |v, _| predicate::number(v)),
    def!("exist", "neither null nor undefined", |v, _| predicate::exist(v)),
    // numbers
    def!("positive", "number greater than zero", |v, _| predicate::positive(v)),
    def!("negative", "number less than zero", |v, _| predicate::negative(v)),
    def!("integer" | "int", "number without fractional part", |v, _| {
        predicate::integer(v)
    }),
    def!("float", "number with fractional part", |v, _| predicate::float(v)),
    def!("equal" | "exactly", "loosely equal to args[0]", predicate::equal),
    def!(
        "above" | "greaterThan" | "greaterthan",
        "greater than args[0]",
        predicate::above
    ),
    def!("least", "equal to or greater than args[0]", predicate::least),
    def!(
        "below" | "lessThan" | "lessthan",
        "less than args[0]",
        predicate::below
    ),
    def!("most", "equal to or less than args[0]", predicate::most),
    def!(
        "within" | "between" | "range",
        "inclusive range [args[0], args[1]]",
        predicate::within
    ),
    def!("lat", "latitude in [-90, 90]", |v, _| predicate::lat(v)),
    def!("lng", "longitude in [-180, 180]", |v, _| predicate::lng(v)),
    // strings
    def!("hexa", "hexadecimal digits", |v, _| predicate::hexa(v)),
    def!("alphanum", "letters and digits", |v, _| predicate::alphanum(v)),
    def!("contain", "string form contains args[0]", predicate::contain),
    def!("match", "string form matches pattern args[0]", predicate::matches),
    def!("imatch", "case-insensitive match", predicate::imatches),
    def!("email", "email address", |v, _| predicate::email(v)),
    def!("url", "url with scheme, host and path", |v, _| predicate::url(v)),
    def!("ip", "dotted-quad IPv4 address", |v, _| predicate::ip(v)),
    def!("creditcard", "card number of a known issuer", |v, _| {
        predicate::creditcard(v)
    }),
    def!("json", "string holding a JSON document", |v, _| predicate::json(v)),
    // collections
    def!("empty", "no keys, elements or characters", |v, _| predicate::empty(v)),
    def!(
        "length" | "size",
        "size equal to args[0] or within [args[0], args[1]]",
        predicate::length
    ),
    def!("key", "mapping with every key in args", predicate::key),
    def!("include", "contains every candidate in args", |v, args| {
        predicate::include(v, args, false)
    }),
    def!("in", "one of the candidates in args", predicate::is_in),
    // dates
    def!("year", "years since the date, relative to now", predicate::year),
];

/// Immutable name -> definition table.
#[derive(Debug)]
pub struct Registry {
    by_name: HashMap<&'static str, &'static PredicateDef>,
}

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Evaluate the predicate registered as `name`.
///
/// # Example
///
/// ```rust
/// use vetting::{is, Value};
///
/// assert_eq!(is(&Value::from("192.168.1.1"), "ip", &[]), Ok(true));
/// assert_eq!(is(&Value::from(4), "in", &[Value::from(1), Value::from(2)]), Ok(false));
/// assert!(is(&Value::Null, "nope", &[]).is_err());
/// ```
pub fn is(value: &Value, name: &str, args: &[Value]) -> Result<bool> {
    registry().check(name, value, args)
}

impl Registry {
    fn build() -> Self {
        let mut by_name = HashMap::new();
        for def in DEFINITIONS {
            for name in std::iter::once(&def.name).chain(def.aliases) {
                let previous = by_name.insert(*name, def);
                debug_assert!(previous.is_none(), "predicate `{name}` registered twice");
            }
        }
        Self { by_name }
    }

    /// Look up a predicate by canonical name or alias.
    pub fn get(&self, name: &str) -> Option<&'static PredicateDef> {
        self.by_name.get(name).copied()
    }

    /// True if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Every registered name, aliases included, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.by_name.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Canonical definitions in registration order.
    pub fn definitions(&self) -> &'static [PredicateDef] {
        DEFINITIONS
    }

    /// Evaluate the predicate registered as `name`.
    pub fn check(&self, name: &str, value: &Value, args: &[Value]) -> Result<bool> {
        let Some(def) = self.get(name) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(predicate = name, "unknown predicate");
            return Err(Error::UnknownPredicate {
                name: name.to_string(),
            });
        };

        let result = def.check(value, args);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            predicate = name,
            canonical = def.name(),
            kind = %value.kind(),
            result,
            "predicate evaluated"
        );

        Ok(result)
    }

    /// Bind a predicate to its arguments, producing a reusable [`Predicate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::predicate::Predicate;
    /// use vetting::{registry, Value};
    ///
    /// let teen = registry().bind("between", [13, 19]).unwrap();
    /// assert!(teen.check(&Value::from(15)));
    /// assert!(!teen.check(&Value::from(21)));
    /// ```
    pub fn bind<I, V>(&self, name: &str, args: I) -> Result<Bound>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let def = self.get(name).ok_or_else(|| Error::UnknownPredicate {
            name: name.to_string(),
        })?;
        Ok(Bound {
            def,
            args: args.into_iter().map(Into::into).collect(),
        })
    }
}

/// A registered predicate together with its arguments.
#[derive(Debug, Clone)]
pub struct Bound {
    def: &'static PredicateDef,
    args: Vec<Value>,
}

impl Bound {
    /// The bound definition.
    pub fn def(&self) -> &'static PredicateDef {
        self.def
    }

    /// The bound arguments.
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl Predicate for Bound {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.def.check(value, &self.args)
    }
}
