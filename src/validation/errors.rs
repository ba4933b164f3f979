//! Validation error types.

use crate::core::Step;
use crate::ids::{BodyPartId, MedicationId, SymptomId};
use thiserror::Error;

/// A user action that cannot be applied as submitted.
///
/// Validation errors never propagate past the action that caused them: the
/// wizard stays where it is and shows the message inline.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select at least one symptom")]
    EmptySelection,

    #[error("Age {age} is outside the accepted range {min}-{max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("Unknown body part '{0}'")]
    UnknownBodyPart(BodyPartId),

    #[error("Unknown symptom '{0}'")]
    UnknownSymptom(SymptomId),

    #[error("Unknown medication '{0}'")]
    UnknownMedication(MedicationId),

    #[error("Symptom '{0}' is not selected")]
    SymptomNotSelected(SymptomId),

    #[error("Symptom '{0}' is not the one being assessed")]
    NotBeingAssessed(SymptomId),

    #[error("'{0}' is not offered for the selected symptoms and age")]
    MedicationNotRecommended(MedicationId),

    #[error("Please choose at least one medication")]
    NoMedications,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid phone number")]
    InvalidPhone(String),

    #[error("'{action}' is not available on the {step} step")]
    ActionNotAvailable { action: &'static str, step: Step },

    #[error("Please respond to the danger warning first")]
    WarningPending,
}
