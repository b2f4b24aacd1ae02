//! End-to-end substitution flows over the real process-wide binding.
//!
//! Every test that installs a substitute does so through the guard, so
//! the suites can run concurrently; default-behavior assertions go
//! through `without_substitution` for the same reason.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use calc_compose::add2;
use calc_core::{CalcError, add, badd};
use calc_test::{BindingGuard, StubAdder, with_adder, without_substitution};

#[test]
fn default_binding_doubles() {
    without_substitution(|| {
        assert_eq!(add2(2), 4);
        assert_eq!(add2(0), 0);
    });
}

#[test]
fn substitute_yields_five_then_restores() {
    let stub = StubAdder::fixed(5);
    let seen = with_adder(Arc::new(stub.clone()), || add2(2));

    assert_eq!(seen, 5);
    assert_eq!(stub.call_count(), 1);

    without_substitution(|| assert_eq!(add2(2), 4));
}

#[test]
fn substitute_yields_zero() {
    let result = with_adder(Arc::new(StubAdder::fixed(0)), || add2(2));
    assert_eq!(result, 0);
}

#[test]
fn add2_feeds_its_input_twice_to_the_binding() {
    let stub = StubAdder::passthrough();
    let result = with_adder(Arc::new(stub.clone()), || add2(3));

    assert_eq!(result, 6);
    assert_eq!(stub.calls(), vec![(3, 3)]);
}

#[test]
fn consecutive_guards_each_restore() {
    {
        let _five = BindingGuard::install(Arc::new(StubAdder::fixed(5)));
        assert_eq!(add2(2), 5);
    }
    {
        let _zero = BindingGuard::install(Arc::new(StubAdder::fixed(0)));
        assert_eq!(add2(2), 0);
    }

    without_substitution(|| assert_eq!(add2(2), 4));
}

#[test]
fn repeated_calls_under_one_substitute_are_idempotent() {
    let stub = StubAdder::fixed(5);
    with_adder(Arc::new(stub.clone()), || {
        assert_eq!(add2(2), 5);
        assert_eq!(add2(2), 5);
    });
    assert_eq!(stub.call_count(), 2);
    assert_eq!(stub.calls(), vec![(2, 2), (2, 2)]);
}

#[test]
fn core_operations_bypass_the_binding() {
    // Direct calls into the arithmetic core are not routed through the
    // substitutable binding.
    with_adder(Arc::new(StubAdder::fixed(99)), || {
        assert_eq!(add(2, 2), 4);
        let err = badd().unwrap_err();
        assert_eq!(err, CalcError::Blowup);
        assert_eq!(err.to_string(), "it blowed up");
    });
}
