//! Homework 8: Interface Segregation
//!
//! Run with: cargo run --bin hw8_interface_segregation

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::InterfaceSegregation)
}
