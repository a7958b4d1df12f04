//! # Classroom Design Patterns
//!
//! Small, independent exercises on object-oriented design in Rust.
//!
//! ## Homework 7: Patterns
//! - Abstract Factory (car and engine families)
//! - Factory Method (notification channels)
//! - Decorator (Christmas tree)
//! - Facade (home theater)
//!
//! ## Homework 8: SOLID
//! - Single Responsibility (orders, email sender)
//! - Liskov Substitution (rectangles and squares)
//! - Interface Segregation (shop items)
//!
//! Run one exercise with its own binary, or all of them through the runner:
//! ```bash
//! cargo run --bin hw7_decorator
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run facade --config patterns.toml
//! cargo run --bin patterns -- all
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod exercises;
pub mod logging;

pub use config::ExerciseConfig;
pub use console::{Console, RecordingConsole, StdoutConsole};
pub use error::{ExerciseError, Result};
pub use exercises::Exercise;

/// Process exit status for a finished command: 0 on success, 1 on any error.
pub fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Reports an error on stderr and turns the result into an [`ExitCode`].
///
/// [`ExitCode`]: std::process::ExitCode
pub fn finish(result: Result<()>) -> std::process::ExitCode {
    use colored::Colorize;

    if let Err(err) = &result {
        eprintln!("{} {err}", "error:".red().bold());
    }
    std::process::ExitCode::from(exit_status(&result))
}

/// Shared `main` body for the single-exercise binaries.
pub fn run_standalone(exercise: Exercise) -> std::process::ExitCode {
    logging::init_tracing();
    finish(exercise.run(&StdoutConsole, &ExerciseConfig::default()))
}
