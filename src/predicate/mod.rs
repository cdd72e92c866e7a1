//! The predicate functions
//!
//! Every predicate is a plain function over a [`Value`], usually taking the
//! predicate arguments as a slice. They are total: any value of any kind
//! produces `true` or `false`, never a panic or an error.
//!
//! Predicates compose by calling one another directly:
//!
//! ```rust
//! use vetting::{predicate, Value};
//!
//! let bounds = [Value::from(1), Value::from(10)];
//! let x = Value::from(7);
//! assert_eq!(
//!     predicate::within(&x, &bounds),
//!     predicate::least(&x, &bounds[..1]) && predicate::most(&x, &bounds[1..]),
//! );
//! ```
//!
//! The [`Predicate`] trait and [`PredicateExt`] combinators let closures and
//! registry-bound predicates be joined with `and` / `or` / `not`.

mod collection;
mod combinators;
mod date;
mod number;
mod string;
mod types;

pub mod prelude;

use crate::value::Value;

static UNDEFINED: Value = Value::Undefined;

/// `args[index]`, or undefined when the caller supplied fewer arguments.
pub(crate) fn arg(args: &[Value], index: usize) -> &Value {
    args.get(index).unwrap_or(&UNDEFINED)
}

// Re-export core trait
pub use combinators::{And, Not, Or, Predicate, PredicateExt};

// Re-export type predicates
pub use types::{
    arguments, array, boolean, buffer, date, error, exist, function, nan, number, object, regexp,
    string,
};

// Re-export number predicates
pub use number::{
    above, below, equal, float, integer, lat, least, lng, most, negative, positive, within,
};

// Re-export string predicates
pub use string::{
    alphanum, card_issuer, contain, creditcard, email, hexa, imatches, ip, json, matches,
    matches_with, url, CardIssuer,
};

// Re-export collection predicates
pub use collection::{empty, include, is_in, key, length};

// Re-export date predicates
pub use date::{year, year_as_of};
