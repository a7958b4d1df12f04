//! Homework 7: Factory Method
//!
//! Run with: cargo run --bin hw7_factory_method

use std::process::ExitCode;

use classroom_patterns::{run_standalone, Exercise};

fn main() -> ExitCode {
    run_standalone(Exercise::FactoryMethod)
}
