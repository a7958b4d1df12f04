use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExerciseError, Result};

pub const DEFAULT_VOLUME: u8 = 50;

/// Runtime knobs for the exercise drivers, loaded from TOML.
///
/// ```toml
/// [output]
/// color = true
///
/// [facade]
/// volume = 50
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExerciseConfig {
    pub output: OutputConfig,
    pub facade: FacadeConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl OutputConfig {
    /// Color can only be forced off. When it is enabled, `colored` keeps its
    /// own terminal detection, so piped output stays plain.
    pub fn color_override(&self) -> Option<bool> {
        (!self.color).then_some(false)
    }

    pub fn apply(&self) {
        if let Some(enabled) = self.color_override() {
            colored::control::set_override(enabled);
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    pub volume: u8,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

impl ExerciseConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ExerciseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads `path` (or defaults), then lets `--no-color` win over the file.
    pub fn resolve(path: Option<&Path>, no_color: bool) -> Result<Self> {
        let mut config = Self::load(path)?;
        if no_color {
            config.output.color = false;
        }
        Ok(config)
    }
}
