// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # calc-core
//!
//! Arithmetic primitives for the calc workspace.
//!
//! This crate is the leaf of the dependency graph. It provides:
//!
//! - [`add`]: total, pure integer addition
//! - [`badd`]: an operation whose only defined behavior is to fail
//! - [`CalcError`]: the single error kind, carrying a fixed message
//!
//! ## Example
//!
//! ```rust
//! use calc_core::{add, badd};
//!
//! assert_eq!(add(2, 2), 4);
//! assert_eq!(badd().unwrap_err().to_string(), "it blowed up");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ops;

pub use error::{CalcError, Result};
pub use ops::{add, badd};
