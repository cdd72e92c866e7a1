//! Testing utilities
//!
//! Assertion macros for code that guards its inputs with named predicates.
//! Values and arguments go through `Into<Value>`, so plain literals work.
//!
//! # Example
//!
//! ```rust
//! use vetting::{assert_is, assert_is_not};
//!
//! assert_is!(42, "integer");
//! assert_is!(5, "within", [1, 10]);
//! assert_is_not!("", "above", [-1]);
//! ```

/// Assert that a value satisfies a named predicate.
///
/// Panics when the predicate is false or the name is unknown.
///
/// # Example
///
/// ```rust
/// use vetting::assert_is;
///
/// assert_is!("192.168.0.1", "ip");
/// assert_is!(vec![1, 2, 3], "size", [3]);
/// ```
#[macro_export]
macro_rules! assert_is {
    ($value:expr, $name:expr) => {
        $crate::assert_is!($value, $name, [])
    };
    ($value:expr, $name:expr, [$($arg:expr),* $(,)?]) => {{
        let value: $crate::Value = ::std::convert::Into::into($value);
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$(::std::convert::Into::into($arg)),*];
        match $crate::is(&value, $name, &args) {
            ::std::result::Result::Ok(true) => {}
            ::std::result::Result::Ok(false) => {
                panic!("Expected {:?} to satisfy `{}` with {:?}", value, $name, args);
            }
            ::std::result::Result::Err(e) => panic!("{}", e),
        }
    }};
}

/// Assert that a value does not satisfy a named predicate.
///
/// Panics when the predicate is true or the name is unknown.
///
/// # Example
///
/// ```rust
/// use vetting::assert_is_not;
///
/// assert_is_not!(0, "positive");
/// assert_is_not!("hi", "length", [3]);
/// ```
#[macro_export]
macro_rules! assert_is_not {
    ($value:expr, $name:expr) => {
        $crate::assert_is_not!($value, $name, [])
    };
    ($value:expr, $name:expr, [$($arg:expr),* $(,)?]) => {{
        let value: $crate::Value = ::std::convert::Into::into($value);
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$(::std::convert::Into::into($arg)),*];
        match $crate::is(&value, $name, &args) {
            ::std::result::Result::Ok(false) => {}
            ::std::result::Result::Ok(true) => {
                panic!("Expected {:?} not to satisfy `{}` with {:?}", value, $name, args);
            }
            ::std::result::Result::Err(e) => panic!("{}", e),
        }
    }};
}
