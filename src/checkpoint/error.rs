//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a wizard run
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The restored state breaks a wizard invariant
    #[error("Checkpoint validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<&'static str>),
}
