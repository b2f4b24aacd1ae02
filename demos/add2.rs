// Examples are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Substitution walkthrough
//!
//! Demonstrates the three operations and the swappable addition binding.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example add2
//!
//! # With delegation events visible
//! RUST_LOG=debug cargo run --example add2
//! ```

use std::sync::Arc;

use calc::prelude::*;
use calc_test::{StubAdder, with_adder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("[CORE] add(2, 2)        = {}", add(2, 2));
    println!("[CORE] add(0, 0)        = {}", add(0, 0));
    println!(
        "[CORE] badd()           = Err({:?})",
        badd().unwrap_err().to_string()
    );
    println!();

    println!("[COMPOSE] add2(2)       = {} (default binding)", add2(2));
    println!();

    // Swap the adder for a stand-in, bounded to the closure's scope.
    let stub = StubAdder::fixed(5);
    let substituted = with_adder(Arc::new(stub.clone()), || add2(2));
    println!("[STUB] add2(2)          = {substituted} (stub always yields 5)");
    println!("[STUB] stub saw         = {:?}", stub.calls());
    println!();

    // The scope has ended; the original binding is back.
    println!("[RESTORED] add2(2)      = {} (default binding)", add2(2));
}
