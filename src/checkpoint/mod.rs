//! Checkpoint and resume for wizard runs.
//!
//! A checkpoint captures the whole [`WizardState`] and the step history so a
//! run can be restored after the process restarts. Catalog, config and store
//! are not part of it; they are supplied again on resume.
//!
//! JSON is the readable format; bincode is the compact one.

use crate::core::{Step, StepHistory};
use crate::ids;
use crate::wizard::WizardState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a wizard run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WizardCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub state: WizardState,

    pub history: StepHistory<Step>,
}

impl WizardCheckpoint {
    pub fn new(state: WizardState, history: StepHistory<Step>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: ids::generate(),
            timestamp: Utc::now(),
            state,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()
    }

    /// Reject checkpoints from another format version or with a state the
    /// reducer could never have produced.
    fn validate(self) -> Result<Self, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let violations = self.state.invariant_violations();
        if !violations.is_empty() {
            return Err(CheckpointError::ValidationFailed(violations));
        }
        Ok(self)
    }
}
