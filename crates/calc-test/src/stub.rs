//! Stub adder for substitution tests.
//!
//! Provides a configurable stand-in for the addition binding.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use calc_compose::Adder;
use calc_core::ops;

/// Configurable stand-in for the addition binding.
///
/// Behavior:
/// - returns a fixed value, or passes through to the real `add`
/// - counts invocations
/// - records every observed operand pair
///
/// Cloning shares the underlying state, so a test can install one clone
/// through the binding and keep the other to inspect what happened.
#[derive(Clone)]
pub struct StubAdder {
    state: Arc<StubState>,
}

/// Internal state for the stub.
struct StubState {
    /// Fixed return value; `None` means pass through to the real `add`.
    fixed: Option<i64>,
    /// Number of `add` calls.
    call_count: AtomicU32,
    /// Operand pairs in call order.
    calls: parking_lot::RwLock<Vec<(i64, i64)>>,
}

impl StubAdder {
    /// Creates a passthrough stub: real addition, with counting and
    /// recording.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::with_fixed(None)
    }

    /// Creates a stub that ignores its operands and always returns
    /// `value`.
    #[must_use]
    pub fn fixed(value: i64) -> Self {
        Self::with_fixed(Some(value))
    }

    fn with_fixed(fixed: Option<i64>) -> Self {
        Self {
            state: Arc::new(StubState {
                fixed,
                call_count: AtomicU32::new(0),
                calls: parking_lot::RwLock::new(Vec::new()),
            }),
        }
    }

    /// Returns the number of `add` calls observed so far.
    #[must_use]
    pub fn call_count(&self) -> u32 {
        self.state.call_count.load(Ordering::SeqCst)
    }

    /// Returns the operand pairs observed so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(i64, i64)> {
        self.state.calls.read().clone()
    }
}

impl Adder for StubAdder {
    fn add(&self, a: i64, b: i64) -> i64 {
        self.state.call_count.fetch_add(1, Ordering::SeqCst);
        self.state.calls.write().push((a, b));

        match self.state.fixed {
            Some(value) => value,
            None => ops::add(a, b),
        }
    }
}
