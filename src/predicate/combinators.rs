//! Core predicate trait and logical combinators
//!
//! This module provides the `Predicate` trait implemented by closures and by
//! predicates bound through the registry, and the `and` / `or` / `not`
//! combinators for joining them.

use crate::value::Value;

/// A check over a [`Value`].
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use vetting::predicate::{Predicate, PredicateExt};
/// use vetting::{registry, Value};
///
/// let adult = registry().bind("least", [18]).unwrap();
/// let retired = registry().bind("above", [65]).unwrap();
/// let working_age = adult.and(retired.not());
///
/// assert!(working_age.check(&Value::from(30)));
/// assert!(!working_age.check(&Value::from(70)));
/// ```
pub trait Predicate: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &Value) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
pub trait PredicateExt: Predicate + Sized {
    /// Combine with AND logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vetting::predicate::{self, Predicate, PredicateExt};
    /// use vetting::Value;
    ///
    /// let p = predicate::number.and(predicate::positive);
    /// assert!(p.check(&Value::from(3)));
    /// assert!(!p.check(&Value::from(-3)));
    /// ```
    fn and<P: Predicate>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    fn or<P: Predicate>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P: Predicate> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for And<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<P1: Predicate, P2: Predicate> Predicate for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn check(&self, value: &Value) -> bool {
        !self.0.check(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{empty, integer, negative, number, positive, string};

    #[test]
    fn test_and() {
        let p = number.and(positive);
        assert!(p.check(&Value::from(5)));
        assert!(!p.check(&Value::from(-5)));
        assert!(!p.check(&Value::from("5")));
    }

    #[test]
    fn test_or() {
        let p = string.or(number);
        assert!(p.check(&Value::from("x")));
        assert!(p.check(&Value::from(1)));
        assert!(!p.check(&Value::from(true)));
    }

    #[test]
    fn test_not() {
        let p = empty.not();
        assert!(p.check(&Value::from("x")));
        assert!(!p.check(&Value::Null));
    }

    #[test]
    fn test_complex_chain() {
        // non-zero integers
        let p = integer.and(positive.or(negative));
        assert!(p.check(&Value::from(3)));
        assert!(p.check(&Value::from(-3)));
        assert!(!p.check(&Value::from(0)));
        assert!(!p.check(&Value::from(1.5)));
    }

    #[test]
    fn test_closure_as_predicate() {
        let short = |v: &Value| v.as_str().is_some_and(|s| s.len() < 4);
        assert!(short.check(&Value::from("abc")));
        assert!(!short.and(number).check(&Value::from("abc")));
    }
}
