//! Scoped substitution of the addition binding.
//!
//! The binding itself is process-wide and does no scoping of its own;
//! this module supplies the caller-side scope: install a substitute,
//! exercise the code under test, restore the previous adder on every
//! exit path.

use std::sync::Arc;

use calc_compose::{Adder, binding};
use parking_lot::{Mutex, MutexGuard};

// One substitution at a time across the process; the guard holds this
// lock for its whole lifetime.
static SUBSTITUTION_LOCK: Mutex<()> = Mutex::new(());

/// RAII scope that installs a substitute adder and restores the previous
/// binding when dropped.
///
/// Restoration runs on every exit path, including panics, so a failing
/// test cannot leak its substitute into later tests. Guards also
/// serialize substitutions: constructing a second guard blocks until the
/// first is dropped. Do not nest guards on one thread.
#[must_use = "the substitute is uninstalled when the guard is dropped"]
pub struct BindingGuard {
    previous: Option<Arc<dyn Adder>>,
    _serial: MutexGuard<'static, ()>,
}

impl BindingGuard {
    /// Installs `adder` as the process-wide binding until the guard is
    /// dropped.
    pub fn install(adder: Arc<dyn Adder>) -> Self {
        let serial = SUBSTITUTION_LOCK.lock();
        let previous = binding::install(adder);
        Self {
            previous: Some(previous),
            _serial: serial,
        }
    }
}

impl Drop for BindingGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            binding::install(previous);
        }
    }
}

/// Runs `f` while no guard-scoped substitute is installed.
///
/// Holds the substitution lock for the duration of `f`, so every
/// [`BindingGuard`] has been dropped (and its substitution unwound)
/// before `f` observes the binding. Use this to assert on default
/// behavior from tests that run concurrently with substituting ones.
pub fn without_substitution<T>(f: impl FnOnce() -> T) -> T {
    let _serial = SUBSTITUTION_LOCK.lock();
    f()
}

/// Runs `f` with `adder` installed, restoring the previous binding
/// afterwards.
///
/// ```rust
/// use std::sync::Arc;
/// use calc_compose::add2;
/// use calc_test::{StubAdder, with_adder};
///
/// let result = with_adder(Arc::new(StubAdder::fixed(5)), || add2(2));
/// assert_eq!(result, 5);
/// assert_eq!(add2(2), 4);
/// ```
pub fn with_adder<T>(adder: Arc<dyn Adder>, f: impl FnOnce() -> T) -> T {
    let _guard = BindingGuard::install(adder);
    f()
}
