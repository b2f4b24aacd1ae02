//! Addition seam.
//!
//! The composed operation depends on addition through this trait rather
//! than calling [`calc_core::add`] directly, so a caller can bind a
//! stand-in implementation for the duration of a test.

use calc_core::ops;

/// Addition dependency of the composed operation.
///
/// Implementations must be pure with respect to their inputs: the
/// composed operation reflects whatever they return, verbatim.
pub trait Adder: Send + Sync {
    /// Adds two integers.
    fn add(&self, a: i64, b: i64) -> i64;
}

/// Default adder, backed by the arithmetic core.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAdder;

impl Adder for SystemAdder {
    fn add(&self, a: i64, b: i64) -> i64 {
        ops::add(a, b)
    }
}
