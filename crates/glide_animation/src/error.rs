//! Animation error types

use thiserror::Error;

/// Errors raised when an animation or segment is constructed with invalid inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// An animation needs at least one segment
    #[error("Animation requires at least one segment")]
    EmptySegments,

    /// Segment duration must be positive and finite
    #[error("Invalid segment duration: {0} (must be positive and finite)")]
    InvalidDuration(f64),

    /// Segment endpoints must be finite
    #[error("Non-finite segment values: {val0} -> {val1}")]
    NonFiniteValue { val0: f32, val1: f32 },

    /// Start time must be finite
    #[error("Non-finite animation start time: {0}")]
    NonFiniteStart(f64),
}

/// Result type for animation construction
pub type Result<T> = std::result::Result<T, AnimationError>;

/// Errors raised while loading an animation description
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the description file
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The description is not valid TOML for an animation
    #[error("Failed to parse animation config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to write a description back out
    #[error("Failed to serialize animation config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The description parsed but describes an invalid animation
    #[error(transparent)]
    Invalid(#[from] AnimationError),
}
