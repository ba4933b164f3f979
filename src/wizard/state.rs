//! The value threaded through the reducer.

use super::gate::DangerGate;
use crate::catalog::Medication;
use crate::core::Step;
use crate::ids::{BodyPartId, OrderId, SessionId, SymptomId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One answer of a symptom assessment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Text(String),
    /// Rating on a 1-10 scale
    Scale(u8),
    YesNo(bool),
    Choices(Vec<String>),
}

/// Follow-up answers collected for one selected symptom.
///
/// Questions differ per symptom, so answers are keyed by question id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub symptom: SymptomId,
    pub answers: BTreeMap<String, Answer>,
}

impl Assessment {
    pub fn new(symptom: SymptomId) -> Self {
        Self {
            symptom,
            answers: BTreeMap::new(),
        }
    }

    pub fn with_answer(mut self, question: impl Into<String>, answer: Answer) -> Self {
        self.answers.insert(question.into(), answer);
        self
    }

    pub fn answer(&self, question: &str) -> Option<&Answer> {
        self.answers.get(question)
    }
}

/// Severity the user reports on the confirmation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    High,
}

/// Complete state of one wizard run.
///
/// Fields are read through accessors; only the reducer produces new values,
/// which keeps the invariants listed in [`WizardState::invariant_violations`]
/// intact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub(crate) step: Step,
    pub(crate) user_age: Option<u32>,
    pub(crate) selected_body_part: Option<BodyPartId>,
    pub(crate) current_body_part: Option<BodyPartId>,
    pub(crate) selected_symptoms: Vec<SymptomId>,
    pub(crate) symptom_assessments: BTreeMap<SymptomId, Assessment>,
    pub(crate) current_symptom_for_assessment: Option<SymptomId>,
    pub(crate) selected_medications: Vec<Medication>,
    pub(crate) session_id: Option<SessionId>,
    pub(crate) last_order_id: Option<OrderId>,
    pub(crate) danger: DangerGate,
    pub(crate) is_selecting_more: bool,
}

impl WizardState {
    /// State of a freshly mounted wizard.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn user_age(&self) -> Option<u32> {
        self.user_age
    }

    pub fn selected_body_part(&self) -> Option<&BodyPartId> {
        self.selected_body_part.as_ref()
    }

    pub fn current_body_part(&self) -> Option<&BodyPartId> {
        self.current_body_part.as_ref()
    }

    /// Body part whose symptoms the symptom step lists.
    pub fn displayed_body_part(&self) -> Option<&BodyPartId> {
        self.current_body_part
            .as_ref()
            .or(self.selected_body_part.as_ref())
    }

    /// Selected symptoms in selection order.
    pub fn selected_symptoms(&self) -> &[SymptomId] {
        &self.selected_symptoms
    }

    pub fn is_selected(&self, symptom: &SymptomId) -> bool {
        self.selected_symptoms.contains(symptom)
    }

    pub fn symptom_assessments(&self) -> &BTreeMap<SymptomId, Assessment> {
        &self.symptom_assessments
    }

    pub fn assessment(&self, symptom: &SymptomId) -> Option<&Assessment> {
        self.symptom_assessments.get(symptom)
    }

    /// Selected symptoms without an assessment, in selection order.
    pub fn unassessed_symptoms(&self) -> Vec<&SymptomId> {
        self.selected_symptoms
            .iter()
            .filter(|s| !self.symptom_assessments.contains_key(*s))
            .collect()
    }

    pub fn current_symptom_for_assessment(&self) -> Option<&SymptomId> {
        self.current_symptom_for_assessment.as_ref()
    }

    pub fn selected_medications(&self) -> &[Medication] {
        &self.selected_medications
    }

    /// Sum of the selected medication prices, in minor units.
    pub fn total_cents(&self) -> u64 {
        self.selected_medications.iter().map(|m| m.price_cents).sum()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn last_order_id(&self) -> Option<&OrderId> {
        self.last_order_id.as_ref()
    }

    /// Whether the danger overlay is currently shown over the symptom step.
    pub fn show_danger_warning(&self) -> bool {
        self.danger.is_open()
    }

    /// Danger symptoms listed by the open overlay, empty when closed.
    pub fn danger_warning_symptoms(&self) -> &[SymptomId] {
        self.danger.pending()
    }

    pub fn danger_gate(&self) -> &DangerGate {
        &self.danger
    }

    pub fn is_selecting_more(&self) -> bool {
        self.is_selecting_more
    }

    /// Invariants that do not hold for this state, empty when consistent.
    pub fn invariant_violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if self
            .symptom_assessments
            .keys()
            .any(|s| !self.selected_symptoms.contains(s))
        {
            violations.push("assessment kept for a symptom that is not selected");
        }

        let mut seen = std::collections::BTreeSet::new();
        if !self.selected_symptoms.iter().all(|s| seen.insert(s)) {
            violations.push("symptom selected twice");
        }

        if self.current_symptom_for_assessment.is_some() != (self.step == Step::Assessment) {
            violations.push("assessment target set outside the assessment step");
        }

        if !self.selected_medications.is_empty()
            && !matches!(self.step, Step::Payment | Step::Success)
        {
            violations.push("medications selected before the payment step");
        }

        if self.danger.is_open() && self.step != Step::Symptom {
            violations.push("danger warning shown outside the symptom step");
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_age() {
        let state = WizardState::new();
        assert_eq!(state.step(), Step::Age);
        assert!(state.selected_symptoms().is_empty());
        assert!(!state.show_danger_warning());
        assert!(state.invariant_violations().is_empty());
    }

    #[test]
    fn displayed_body_part_falls_back_to_selected() {
        let mut state = WizardState::new();
        state.selected_body_part = Some(BodyPartId::new("head"));
        assert_eq!(state.displayed_body_part(), Some(&BodyPartId::new("head")));

        state.current_body_part = Some(BodyPartId::new("chest"));
        assert_eq!(state.displayed_body_part(), Some(&BodyPartId::new("chest")));
    }

    #[test]
    fn unassessed_keeps_selection_order() {
        let mut state = WizardState::new();
        state.selected_symptoms = vec![
            SymptomId::new("fever"),
            SymptomId::new("cough"),
            SymptomId::new("rash"),
        ];
        state.symptom_assessments.insert(
            SymptomId::new("cough"),
            Assessment::new(SymptomId::new("cough")),
        );

        let unassessed = state.unassessed_symptoms();
        assert_eq!(
            unassessed,
            vec![&SymptomId::new("fever"), &SymptomId::new("rash")]
        );
    }

    #[test]
    fn orphaned_assessment_is_a_violation() {
        let mut state = WizardState::new();
        state.symptom_assessments.insert(
            SymptomId::new("cough"),
            Assessment::new(SymptomId::new("cough")),
        );
        assert_eq!(
            state.invariant_violations(),
            vec!["assessment kept for a symptom that is not selected"]
        );
    }

    #[test]
    fn assessment_answers_are_keyed_by_question() {
        let assessment = Assessment::new(SymptomId::new("headache"))
            .with_answer("duration_days", Answer::Scale(3))
            .with_answer("with_nausea", Answer::YesNo(false));

        assert_eq!(assessment.answer("duration_days"), Some(&Answer::Scale(3)));
        assert_eq!(assessment.answer("missing"), None);
    }
}
