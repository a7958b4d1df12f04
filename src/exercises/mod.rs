//! The exercise catalogue.
//!
//! Homework 7 covers creational and structural patterns, Homework 8 the SOLID
//! refactorings. Every exercise exposes a `run` driver that writes its fixed
//! transcript to a [`Console`].

pub mod abstract_factory;
pub mod decorator;
pub mod facade;
pub mod factory_method;
pub mod interface_segregation;
pub mod liskov;
pub mod single_responsibility;

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::config::ExerciseConfig;
use crate::console::Console;
use crate::error::{ExerciseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exercise {
    AbstractFactory,
    FactoryMethod,
    Decorator,
    Facade,
    SingleResponsibility,
    Liskov,
    InterfaceSegregation,
}

impl Exercise {
    pub const ALL: [Exercise; 7] = [
        Exercise::AbstractFactory,
        Exercise::FactoryMethod,
        Exercise::Decorator,
        Exercise::Facade,
        Exercise::SingleResponsibility,
        Exercise::Liskov,
        Exercise::InterfaceSegregation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Exercise::AbstractFactory => "abstract-factory",
            Exercise::FactoryMethod => "factory-method",
            Exercise::Decorator => "decorator",
            Exercise::Facade => "facade",
            Exercise::SingleResponsibility => "single-responsibility",
            Exercise::Liskov => "liskov",
            Exercise::InterfaceSegregation => "interface-segregation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Exercise::AbstractFactory => "Abstract Factory: car and engine families",
            Exercise::FactoryMethod => "Factory Method: notification channels",
            Exercise::Decorator => "Decorator: Christmas tree",
            Exercise::Facade => "Facade: home theater",
            Exercise::SingleResponsibility => "Single Responsibility: orders and email",
            Exercise::Liskov => "Liskov Substitution: rectangles and squares",
            Exercise::InterfaceSegregation => "Interface Segregation: shop items",
        }
    }

    pub fn run(self, console: &dyn Console, config: &ExerciseConfig) -> Result<()> {
        info!(exercise = self.name(), "running exercise");
        match self {
            Exercise::AbstractFactory => abstract_factory::run(console),
            Exercise::FactoryMethod => factory_method::run(console),
            Exercise::Decorator => decorator::run(console),
            Exercise::Facade => facade::run(console, &config.facade),
            Exercise::SingleResponsibility => single_responsibility::run(console)?,
            Exercise::Liskov => liskov::run(console),
            Exercise::InterfaceSegregation => interface_segregation::run(console),
        }
        Ok(())
    }

    /// Parses `name` and runs it; an unknown name runs nothing.
    pub fn run_named(name: &str, console: &dyn Console, config: &ExerciseConfig) -> Result<()> {
        name.parse::<Exercise>()?.run(console, config)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = ExerciseError;

    /// Accepts the kebab-case name, with `_` allowed in place of `-`.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Exercise::ALL
            .into_iter()
            .find(|exercise| exercise.name() == wanted)
            .ok_or_else(|| ExerciseError::unrecognized("exercise", s))
    }
}
