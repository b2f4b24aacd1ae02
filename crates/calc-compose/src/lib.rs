// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # calc-compose
//!
//! Composed operations over [`calc_core`], with the addition dependency
//! behind a swappable process-wide binding.
//!
//! [`add2`] resolves its adder through [`binding`] on every invocation,
//! so an external harness can [`binding::install`] a stand-in, exercise
//! the composed operation, and restore the original afterwards. The
//! binding does not scope itself: install/restore sequencing and the
//! serialization of concurrent substitutions belong to the caller (the
//! `calc-test` crate provides a guard that does both).
//!
//! ## Example
//!
//! ```rust
//! use calc_compose::add2;
//!
//! assert_eq!(add2(2), 4);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adder;
pub mod binding;
pub mod compose;

pub use adder::{Adder, SystemAdder};
pub use compose::add2;
