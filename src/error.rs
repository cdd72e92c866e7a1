//! Dispatch errors
//!
//! Predicates themselves never fail. The only error is asking the registry for
//! a name it does not know.

use thiserror::Error;

/// Errors raised by name-based dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No predicate or alias is registered under this name.
    #[error("unknown predicate `{name}`")]
    UnknownPredicate {
        /// The name that was looked up.
        name: String,
    },
}

/// Result alias for dispatch operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_predicate_display() {
        let err = Error::UnknownPredicate {
            name: "shiny".to_string(),
        };
        assert_eq!(err.to_string(), "unknown predicate `shiny`");
    }
}
