// Abstract Factory: one factory per car brand, each producing a matching
// car and engine. Brands are a closed set, so the products are enums.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::console::Console;
use crate::error::{ExerciseError, Result};

// ============================================================================
// Brand selector
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Ford,
    Toyota,
    Mercedes,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::Ford, Brand::Toyota, Brand::Mercedes];

    pub fn name(self) -> &'static str {
        match self {
            Brand::Ford => "Ford",
            Brand::Toyota => "Toyota",
            Brand::Mercedes => "Mercedes",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Brand {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self> {
        Brand::ALL
            .into_iter()
            .find(|brand| brand.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExerciseError::unrecognized("car brand", s))
    }
}

// ============================================================================
// Products
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Car {
    Ford,
    Toyota,
    Mercedes,
}

impl Car {
    pub fn info(&self) -> &'static str {
        match self {
            Car::Ford => "Ford",
            Car::Toyota => "Toyota",
            Car::Mercedes => "Mercedes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Ford,
    Toyota,
    Mercedes,
}

impl Engine {
    pub fn power(&self) -> &'static str {
        match self {
            Engine::Ford => "Ford Engine 4.4",
            Engine::Toyota => "Toyota Engine 3.2",
            Engine::Mercedes => "Mercedes Engine 5.0",
        }
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Produces a car and an engine that always belong to the same brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarFactory {
    brand: Brand,
}

impl CarFactory {
    pub fn new(brand: Brand) -> Self {
        debug!(%brand, "car factory created");
        Self { brand }
    }

    /// Unknown brands are rejected here, before a factory exists.
    pub fn from_selector(selector: &str) -> Result<Self> {
        Ok(Self::new(selector.parse()?))
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn create_car(&self) -> Car {
        match self.brand {
            Brand::Ford => Car::Ford,
            Brand::Toyota => Car::Toyota,
            Brand::Mercedes => Car::Mercedes,
        }
    }

    pub fn create_engine(&self) -> Engine {
        match self.brand {
            Brand::Ford => Engine::Ford,
            Brand::Toyota => Engine::Toyota,
            Brand::Mercedes => Engine::Mercedes,
        }
    }
}

// ============================================================================
// Driver
// ============================================================================

pub fn run(console: &dyn Console) {
    for brand in [Brand::Toyota, Brand::Ford, Brand::Mercedes] {
        let factory = CarFactory::new(brand);
        console.line(factory.create_car().info());
        console.line(factory.create_engine().power());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;

    #[test]
    fn test_factory_pairs_match_brand() {
        let expected = [
            (Brand::Ford, "Ford", "Ford Engine 4.4"),
            (Brand::Toyota, "Toyota", "Toyota Engine 3.2"),
            (Brand::Mercedes, "Mercedes", "Mercedes Engine 5.0"),
        ];

        for (brand, car, engine) in expected {
            let factory = CarFactory::new(brand);
            assert_eq!(factory.create_car().info(), car);
            assert_eq!(factory.create_engine().power(), engine);
        }
    }

    #[test]
    fn test_selector_is_case_insensitive() {
        let factory = CarFactory::from_selector("  ford ").unwrap();
        assert_eq!(factory.brand(), Brand::Ford);
        assert_eq!(factory.create_engine().power(), "Ford Engine 4.4");
    }

    #[test]
    fn test_unknown_selector_rejected() {
        let err = CarFactory::from_selector("Lada").unwrap_err();
        assert!(matches!(
            err,
            ExerciseError::UnrecognizedVariant { kind: "car brand", ref selector } if selector == "Lada"
        ));
    }

    #[test]
    fn test_driver_transcript() {
        let console = RecordingConsole::new();
        run(&console);

        assert_eq!(
            console.lines(),
            vec![
                "Toyota",
                "Toyota Engine 3.2",
                "Ford",
                "Ford Engine 4.4",
                "Mercedes",
                "Mercedes Engine 5.0",
            ]
        );
    }
}
