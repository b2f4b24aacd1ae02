//! calc: minimal arithmetic core with a swappable addition binding.
//!
//! # Quick Start
//!
//! ```rust
//! use calc::prelude::*;
//!
//! assert_eq!(add(2, 2), 4);
//! assert_eq!(add2(2), 4);
//! assert_eq!(badd().unwrap_err().to_string(), "it blowed up");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use calc_compose as compose;
pub use calc_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use calc_compose::{Adder, SystemAdder, add2, binding};
    pub use calc_core::{CalcError, add, badd};
}
