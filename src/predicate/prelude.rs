//! Predicate prelude for convenient imports
//!
//! This module re-exports the combinator traits and the predicate functions.
//!
//! # Example
//!
//! ```rust
//! use vetting::predicate::prelude::*;
//! use vetting::Value;
//!
//! let positive_integer = integer.and(positive);
//! assert!(positive_integer.check(&Value::from(25)));
//! ```

// Core trait
pub use super::combinators::{And, Not, Or, Predicate, PredicateExt};

// Type predicates
pub use super::types::{
    arguments, array, boolean, buffer, date, error, exist, function, nan, number, object, regexp,
    string,
};

// Number predicates
pub use super::number::{
    above, below, equal, float, integer, lat, least, lng, most, negative, positive, within,
};

// String predicates
pub use super::string::{
    alphanum, contain, creditcard, email, hexa, imatches, ip, json, matches, url,
};

// Collection predicates
pub use super::collection::{empty, include, is_in, key, length};

// Date predicates
pub use super::date::year;
