// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # calc-test
//!
//! Test support for the calc workspace.
//!
//! This crate provides:
//! - **Stub adder**: a configurable stand-in with call counting and
//!   operand recording
//! - **Scoped substitution**: an RAII guard that installs a substitute
//!   adder, serializes substitutions, and restores the previous binding
//!   on every exit path
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use calc_compose::add2;
//! use calc_test::{StubAdder, with_adder};
//!
//! let stub = StubAdder::fixed(5);
//! let result = with_adder(Arc::new(stub.clone()), || add2(2));
//!
//! assert_eq!(result, 5);
//! assert_eq!(stub.calls(), vec![(2, 2)]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod harness;
pub mod stub;

pub use harness::{BindingGuard, with_adder, without_substitution};
pub use stub::StubAdder;
