//! Process-wide adder binding.
//!
//! One binding per process. [`current`] resolves it at call time;
//! [`install`] swaps it and hands back the previous adder so the caller
//! can restore it exactly. The binding itself does no scoping: install
//! before use, restore after use, and serialize concurrent substitutions
//! on the caller side.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::adder::{Adder, SystemAdder};

static BINDING: LazyLock<RwLock<Arc<dyn Adder>>> =
    LazyLock::new(|| RwLock::new(Arc::new(SystemAdder)));

/// Returns the currently bound adder.
///
/// Resolution happens on every call; nothing is cached beyond the
/// returned handle.
#[must_use]
pub fn current() -> Arc<dyn Adder> {
    BINDING.read().clone()
}

/// Installs `adder` as the process-wide binding and returns the adder it
/// replaced.
///
/// Re-installing the returned adder restores the previous behavior
/// identically, so a substitute can be bounded to a scope:
///
/// ```rust
/// use std::sync::Arc;
/// use calc_compose::{add2, binding, Adder};
///
/// struct Fixed(i64);
/// impl Adder for Fixed {
///     fn add(&self, _a: i64, _b: i64) -> i64 {
///         self.0
///     }
/// }
///
/// let previous = binding::install(Arc::new(Fixed(5)));
/// assert_eq!(add2(2), 5);
/// binding::install(previous);
/// assert_eq!(add2(2), 4);
/// ```
pub fn install(adder: Arc<dyn Adder>) -> Arc<dyn Adder> {
    std::mem::replace(&mut *BINDING.write(), adder)
}

/// Reinstalls the default [`SystemAdder`], returning what was bound.
pub fn reset() -> Arc<dyn Adder> {
    install(Arc::new(SystemAdder))
}
