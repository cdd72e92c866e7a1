//! Dispatch logging, enabled by the `tracing` feature
#![cfg(feature = "tracing")]

use tracing_test::traced_test;
use vetting::{is, Value};

#[traced_test]
#[test]
fn dispatch_logs_canonical_name_and_result() {
    assert_eq!(is(&Value::from(5), "greaterThan", &[Value::from(3)]), Ok(true));
    assert!(logs_contain("predicate evaluated"));
    assert!(logs_contain("canonical=\"above\""));
    assert!(logs_contain("result=true"));
}

#[traced_test]
#[test]
fn unknown_names_are_logged() {
    assert!(is(&Value::Null, "shiny", &[]).is_err());
    assert!(logs_contain("unknown predicate"));
}
