use std::path::PathBuf;

use thiserror::Error;

/// Every failure an exercise or its plumbing can report.
#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("unrecognized {kind}: '{selector}'")]
    UnrecognizedVariant { kind: &'static str, selector: String },

    #[error("order #{0} does not exist")]
    OrderNotFound(u64),

    #[error("order #{0} is already saved, use update instead")]
    OrderAlreadyExists(u64),

    #[error("failed to (de)serialize order snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ExerciseError {
    pub fn unrecognized(kind: &'static str, selector: impl Into<String>) -> Self {
        Self::UnrecognizedVariant {
            kind,
            selector: selector.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
