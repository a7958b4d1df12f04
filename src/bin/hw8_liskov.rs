//! Homework 8: Liskov Substitution
//!
//! Run with: cargo run --bin hw8_liskov

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::Liskov)
}
