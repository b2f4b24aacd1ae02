//! Arithmetic operations.
//!
//! Two operations with deliberately opposite contracts: [`add`] is total
//! and never fails, [`badd`] fails on every invocation. Consumers that
//! need to exercise both a success path and a failure path against the
//! same module get one of each.

use std::convert::Infallible;

use crate::error::{CalcError, Result};

/// Adds two integers.
///
/// Total and pure: defined for every input pair, no side effects, no
/// failure mode. Commutative over the whole domain.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Always fails.
///
/// The success type is [`Infallible`]: no value can ever be produced, and
/// the signature says so. Every invocation returns [`CalcError::Blowup`],
/// whose message is the fixed text `it blowed up`.
///
/// # Errors
///
/// Always. There is no success outcome.
pub const fn badd() -> Result<Infallible> {
    Err(CalcError::Blowup)
}
