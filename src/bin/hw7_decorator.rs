//! Homework 7: Decorator
//!
//! Run with: cargo run --bin hw7_decorator

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::Decorator)
}
