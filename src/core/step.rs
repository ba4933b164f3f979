//! Screens of the symptom-checker wizard.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Position of the wizard in its flow.
///
/// The flow is `Age → BodyPart → Symptom → Assessment → Confirmation →
/// Medication → Payment → Success`, with `Consultation` as the exit for
/// severe or dangerous symptoms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    #[default]
    Age,
    BodyPart,
    Symptom,
    Assessment,
    Confirmation,
    Medication,
    Payment,
    Consultation,
    Success,
}

/// Progress indicator data for a step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct Progress {
    pub number: u8,
    pub total: u8,
    pub label: &'static str,
}

/// Number of stages shown by the progress indicator.
pub const PROGRESS_STAGES: u8 = 7;

impl Step {
    pub const ALL: [Step; 9] = [
        Step::Age,
        Step::BodyPart,
        Step::Symptom,
        Step::Assessment,
        Step::Confirmation,
        Step::Medication,
        Step::Payment,
        Step::Consultation,
        Step::Success,
    ];

    /// Step reached by "back", if back is offered on this step.
    ///
    /// `Age` is the entry point and `Success` only offers reset.
    pub fn predecessor(self) -> Option<Step> {
        match self {
            Step::Age | Step::Success => None,
            Step::BodyPart => Some(Step::Age),
            Step::Symptom => Some(Step::BodyPart),
            Step::Assessment => Some(Step::Symptom),
            Step::Confirmation => Some(Step::Symptom),
            Step::Medication => Some(Step::Confirmation),
            Step::Payment => Some(Step::Medication),
            Step::Consultation => Some(Step::Confirmation),
        }
    }

    /// Whether the back control is shown on this step.
    pub fn allows_back(self) -> bool {
        self.predecessor().is_some()
    }

    /// Progress indicator for this step.
    ///
    /// Assessment shares the symptom stage and consultation shares the
    /// medication stage, so the indicator never jumps backwards.
    pub fn progress(self) -> Progress {
        let (number, label) = match self {
            Step::Age => (1, "Your age"),
            Step::BodyPart => (2, "Body part"),
            Step::Symptom => (3, "Symptoms"),
            Step::Assessment => (3, "Symptom details"),
            Step::Confirmation => (4, "Confirm symptoms"),
            Step::Medication => (5, "Recommended medication"),
            Step::Consultation => (5, "Consultation"),
            Step::Payment => (6, "Payment"),
            Step::Success => (7, "Order placed"),
        };
        Progress {
            number,
            total: PROGRESS_STAGES,
            label,
        }
    }
}

impl State for Step {
    fn name(&self) -> &str {
        match self {
            Self::Age => "age",
            Self::BodyPart => "bodyPart",
            Self::Symptom => "symptom",
            Self::Assessment => "assessment",
            Self::Confirmation => "confirmation",
            Self::Medication => "medication",
            Self::Payment => "payment",
            Self::Consultation => "consultation",
            Self::Success => "success",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predecessor_table_matches_flow() {
        assert_eq!(Step::BodyPart.predecessor(), Some(Step::Age));
        assert_eq!(Step::Symptom.predecessor(), Some(Step::BodyPart));
        assert_eq!(Step::Assessment.predecessor(), Some(Step::Symptom));
        assert_eq!(Step::Confirmation.predecessor(), Some(Step::Symptom));
        assert_eq!(Step::Medication.predecessor(), Some(Step::Confirmation));
        assert_eq!(Step::Payment.predecessor(), Some(Step::Medication));
        assert_eq!(Step::Consultation.predecessor(), Some(Step::Confirmation));
    }

    #[test]
    fn entry_and_terminal_steps_have_no_back() {
        assert!(!Step::Age.allows_back());
        assert!(!Step::Success.allows_back());
    }

    #[test]
    fn progress_never_exceeds_total() {
        for step in Step::ALL {
            let progress = step.progress();
            assert!(progress.number >= 1);
            assert!(progress.number <= progress.total);
        }
    }

    #[test]
    fn assessment_shares_symptom_stage() {
        assert_eq!(
            Step::Assessment.progress().number,
            Step::Symptom.progress().number
        );
    }
}
