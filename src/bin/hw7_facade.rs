//! Homework 7: Facade
//!
//! Run with: cargo run --bin hw7_facade

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::Facade)
}
