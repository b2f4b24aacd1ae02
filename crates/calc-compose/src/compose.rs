//! Composed operations built on the arithmetic core.

use tracing::debug;

use crate::binding;

/// Doubles `x` by handing it to the bound adder as both operands.
///
/// The adder is resolved through the process-wide
/// [`binding`](crate::binding) once per invocation, so a substitute
/// installed by the caller takes effect immediately and its return value
/// is reflected verbatim. With the default binding this is `x + x`.
#[must_use]
pub fn add2(x: i64) -> i64 {
    let adder = binding::current();
    debug!(x, "delegating to bound adder");
    adder.add(x, x)
}
