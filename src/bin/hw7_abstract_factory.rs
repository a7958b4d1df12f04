//! Homework 7: Abstract Factory
//!
//! Run with: cargo run --bin hw7_abstract_factory

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::AbstractFactory)
}
