//! Error types
//!
//! Library code returns these; the binary wraps them in `anyhow`.

use std::path::PathBuf;

/// Errors raised by the level curve itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    /// A level below 1 was requested.
    #[error("invalid input: level must be at least 1, got {0}")]
    InvalidInput(u32),

    /// Curve parameters would not produce a strictly increasing curve.
    #[error("invalid curve: {0}")]
    InvalidCurve(String),
}

/// Errors raised while loading a leveling config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error(transparent)]
    Curve(#[from] LevelError),
}

/// Errors raised while loading or saving a learner profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Profile version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}
