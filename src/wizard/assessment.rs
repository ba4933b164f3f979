//! Assessment accumulator.
//!
//! Keeps `symptom_assessments` keyed only by selected symptoms: entries are
//! written for selected symptoms and pruned when a symptom is deselected.

use super::state::{Assessment, WizardState};
use crate::ids::SymptomId;
use crate::validation::ValidationError;

/// Store `assessment`, replacing any earlier one for the same symptom.
///
/// Returns the assessed symptom so the caller can log the same record.
pub fn record_assessment(
    state: &mut WizardState,
    assessment: Assessment,
) -> Result<SymptomId, ValidationError> {
    if !state.is_selected(&assessment.symptom) {
        return Err(ValidationError::SymptomNotSelected(assessment.symptom));
    }
    let symptom = assessment.symptom.clone();
    state
        .symptom_assessments
        .insert(symptom.clone(), assessment);
    Ok(symptom)
}

/// Remove the assessment of a symptom that is being deselected.
pub fn discard_assessment(state: &mut WizardState, symptom: &SymptomId) -> Option<Assessment> {
    state.symptom_assessments.remove(symptom)
}
