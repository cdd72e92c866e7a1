//! # Vetting
//!
//! Named runtime predicates for dynamic values.
//!
//! Give it a value, the name of a predicate and the predicate's arguments, and
//! it answers `true` or `false`: type checks, range checks, format checks and
//! membership checks, all pure and all total.
//!
//! ## Philosophy
//!
//! - **Total**: no predicate panics or errors, whatever the shape of its input.
//!   An input a predicate cannot apply to simply fails it.
//! - **Stateless**: predicates are plain functions and the registry is an
//!   immutable table built once. Everything is safe to call from any thread.
//! - **Explicit coercion**: the few implicit conversions (numeric strings,
//!   loose equality, string forms) live in one place.
//!
//! ## Quick Example
//!
//! ```rust
//! use vetting::{is, predicate, Value};
//!
//! // By name, through the registry
//! assert_eq!(is(&Value::from(25), "within", &[Value::from(18), Value::from(65)]), Ok(true));
//! assert_eq!(is(&Value::from("a.b+c@example.co"), "email", &[]), Ok(true));
//! assert_eq!(is(&Value::from(r#"{"a":1}"#), "json", &[]), Ok(true));
//!
//! // Or directly
//! assert!(predicate::creditcard(&Value::from("4111111111111111")));
//! assert!(!predicate::ip(&Value::from("256.1.1.1")));
//! ```
//!
//! ## Composing
//!
//! ```rust
//! use vetting::predicate::{Predicate, PredicateExt};
//! use vetting::{registry, Value};
//!
//! let port = registry()
//!     .bind("integer", Vec::<Value>::new())
//!     .unwrap()
//!     .and(registry().bind("between", [1, 65535]).unwrap());
//!
//! assert!(port.check(&Value::from(8080)));
//! assert!(!port.check(&Value::from(80.5)));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace!` events for every dispatched predicate and a
//!   `debug!` event for unknown names.
//! - `proptest`: an `Arbitrary` implementation for [`Value`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod coerce;
pub mod error;
pub mod predicate;
pub mod registry;
pub mod testing;
pub mod value;

// Re-exports
pub use error::{Error, Result};
pub use registry::{is, registry, Bound, PredicateDef, PredicateFn, Registry};
pub use value::{Kind, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::registry::{is, registry, Bound, Registry};
    pub use crate::value::{Kind, Value};
}
