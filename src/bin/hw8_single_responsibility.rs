//! Homework 8: Single Responsibility
//!
//! Run with: cargo run --bin hw8_single_responsibility

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::SingleResponsibility)
}
