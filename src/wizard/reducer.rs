//! The transition function `(state, action) → (state, effects)`.
//!
//! `reduce` is pure: it never touches the store or the clock. Store calls
//! come back as [`SideEffect`]s for the driver, and problems the user must
//! see come back as a [`Notice`]. A rejected or invalid action returns the
//! input state unchanged.

use super::action::{Action, PaymentDetails};
use super::assessment::{discard_assessment, record_assessment};
use super::effect::SideEffect;
use super::gate::danger_intersection;
use super::state::{Assessment, Severity, WizardState};
use crate::catalog::Catalog;
use crate::config::WizardConfig;
use crate::core::Step;
use crate::ids::{BodyPartId, MedicationId, SymptomId};
use crate::persistence::{AssessmentRecord, OrderRecord, OrderStatus, SessionUpdate};
use crate::validation::{check_age, check_payment, into_result, ValidationError};

/// Message the user must see after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The action was not applied
    Invalid(Vec<ValidationError>),
    /// The order could not be created; payment may be resubmitted
    OrderFailed(String),
}

/// Result of reducing one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Reduction {
    pub state: WizardState,
    pub effects: Vec<SideEffect>,
    pub notice: Option<Notice>,
}

impl Reduction {
    fn to(state: WizardState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            notice: None,
        }
    }

    fn with_effect(mut self, effect: Option<SideEffect>) -> Self {
        self.effects.extend(effect);
        self
    }

    fn invalid(state: &WizardState, errors: Vec<ValidationError>) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
            notice: Some(Notice::Invalid(errors)),
        }
    }

    fn rejected(state: &WizardState, error: ValidationError) -> Self {
        Self::invalid(state, vec![error])
    }

    /// Whether the action left the state as it was.
    pub fn is_rejected(&self) -> bool {
        matches!(self.notice, Some(Notice::Invalid(_)))
    }
}

/// Apply `action` to `state`.
pub fn reduce(
    state: &WizardState,
    action: Action,
    catalog: &Catalog,
    config: &WizardConfig,
) -> Reduction {
    if state.danger.is_open() && !action.resolves_warning() && !action.is_feedback() {
        return Reduction::rejected(state, ValidationError::WarningPending);
    }

    match (state.step, action) {
        (_, Action::SessionStarted(id)) => {
            let mut next = state.clone();
            next.session_id = Some(id);
            Reduction::to(next)
        }
        (Step::Age, Action::SubmitAge(age)) => submit_age(state, age, config),
        (Step::BodyPart, Action::ChooseBodyPart(body_part)) => {
            choose_body_part(state, body_part, catalog)
        }
        (Step::Symptom, Action::ToggleSymptom(symptom)) => toggle_symptom(state, symptom, catalog),
        (Step::Symptom, Action::MoreSymptoms) => {
            let mut next = state.clone();
            next.is_selecting_more = true;
            next.current_body_part = None;
            next.step = Step::BodyPart;
            Reduction::to(next)
        }
        (Step::Symptom, Action::StartAssessment(symptom)) => {
            if !state.is_selected(&symptom) {
                return Reduction::rejected(state, ValidationError::SymptomNotSelected(symptom));
            }
            Reduction::to(assess(state.clone(), symptom))
        }
        (Step::Symptom, Action::CompleteSelection) => complete_selection(state, catalog),
        (Step::Symptom, Action::ConsultAfterWarning) if state.danger.is_open() => {
            let mut next = state.clone();
            next.danger = state.danger.dismiss();
            next.step = Step::Consultation;
            Reduction::to(next)
        }
        (Step::Symptom, Action::ContinueAfterWarning) if state.danger.is_open() => {
            let mut next = state.clone();
            next.danger = state.danger.dismiss();
            Reduction::to(route_unassessed(next))
        }
        (Step::Assessment, Action::SubmitAssessment(assessment)) => {
            submit_assessment(state, assessment)
        }
        (Step::Confirmation, Action::ConfirmSymptoms(severity)) => confirm(state, severity),
        (Step::Medication, Action::RequestOrder(medications)) => {
            request_order(state, &medications, catalog)
        }
        (Step::Payment, Action::SubmitPayment(details)) => submit_payment(state, details),
        (Step::Payment, Action::OrderPlaced(order_id)) => {
            let mut next = state.clone();
            next.last_order_id = Some(order_id);
            next.step = Step::Success;
            Reduction::to(next)
        }
        (Step::Payment, Action::OrderFailed(reason)) => Reduction {
            state: state.clone(),
            effects: Vec::new(),
            notice: Some(Notice::OrderFailed(reason)),
        },
        (Step::Success, Action::Reset) => {
            Reduction::to(WizardState::new()).with_effect(Some(SideEffect::CreateSession))
        }
        (step, Action::Back) => match step.predecessor() {
            Some(previous) => Reduction::to(back(state, previous)),
            None => Reduction::rejected(
                state,
                ValidationError::ActionNotAvailable {
                    action: "back",
                    step,
                },
            ),
        },
        (step, action) => Reduction::rejected(
            state,
            ValidationError::ActionNotAvailable {
                action: action.name(),
                step,
            },
        ),
    }
}

fn session_update(state: &WizardState, update: SessionUpdate) -> Option<SideEffect> {
    state
        .session_id
        .clone()
        .map(|session_id| SideEffect::UpdateSession { session_id, update })
}

fn submit_age(state: &WizardState, age: u32, config: &WizardConfig) -> Reduction {
    let age = match into_result(check_age(age, &config.age_range)) {
        Ok(age) => age,
        Err(errors) => return Reduction::invalid(state, errors),
    };

    let mut next = state.clone();
    next.user_age = Some(age);
    next.step = Step::BodyPart;
    let effect = session_update(&next, SessionUpdate::Age { user_age: age });
    Reduction::to(next).with_effect(effect)
}

fn choose_body_part(state: &WizardState, body_part: BodyPartId, catalog: &Catalog) -> Reduction {
    if catalog.body_part(&body_part).is_none() {
        return Reduction::rejected(state, ValidationError::UnknownBodyPart(body_part));
    }

    let mut next = state.clone();
    next.selected_body_part = Some(body_part.clone());
    next.current_body_part = Some(body_part.clone());
    next.step = Step::Symptom;
    let effect = session_update(&next, SessionUpdate::BodyPart { body_part });
    Reduction::to(next).with_effect(effect)
}

fn toggle_symptom(state: &WizardState, symptom: SymptomId, catalog: &Catalog) -> Reduction {
    if catalog.symptom(&symptom).is_none() {
        return Reduction::rejected(state, ValidationError::UnknownSymptom(symptom));
    }

    let mut next = state.clone();
    if next.is_selected(&symptom) {
        next.selected_symptoms.retain(|s| s != &symptom);
        discard_assessment(&mut next, &symptom);
        next.danger = next.danger.forget(&symptom);
    } else {
        next.selected_symptoms.push(symptom);
    }
    Reduction::to(next)
}

fn assess(mut state: WizardState, symptom: SymptomId) -> WizardState {
    state.current_symptom_for_assessment = Some(symptom);
    state.step = Step::Assessment;
    state
}

/// Steps 3 and 4 of selection completion: first unassessed symptom, or
/// confirmation once everything is assessed.
fn route_unassessed(mut state: WizardState) -> WizardState {
    let next = state.unassessed_symptoms().first().map(|s| (*s).clone());
    match next {
        Some(symptom) => assess(state, symptom),
        None => {
            state.step = Step::Confirmation;
            state
        }
    }
}

fn complete_selection(state: &WizardState, catalog: &Catalog) -> Reduction {
    if state.selected_symptoms.is_empty() {
        return Reduction::rejected(state, ValidationError::EmptySelection);
    }

    let dangerous = danger_intersection(catalog.danger_symptoms(), &state.selected_symptoms);
    if state.danger.needs_warning(&dangerous) {
        let mut next = state.clone();
        next.danger = state.danger.open(dangerous);
        return Reduction::to(next);
    }

    Reduction::to(route_unassessed(state.clone()))
}

fn submit_assessment(state: &WizardState, assessment: Assessment) -> Reduction {
    if state.current_symptom_for_assessment() != Some(&assessment.symptom) {
        return Reduction::rejected(
            state,
            ValidationError::NotBeingAssessed(assessment.symptom),
        );
    }

    let mut next = state.clone();
    let record = AssessmentRecord {
        session_id: state.session_id.clone(),
        user_age: state.user_age,
        body_part: state.selected_body_part.clone(),
        symptom: assessment.symptom.clone(),
        assessment: assessment.clone(),
    };

    if let Err(error) = record_assessment(&mut next, assessment) {
        return Reduction::rejected(state, error);
    }

    next.current_symptom_for_assessment = None;
    next.step = Step::Symptom;
    Reduction::to(next).with_effect(Some(SideEffect::SaveAssessment { record }))
}

fn confirm(state: &WizardState, severity: Severity) -> Reduction {
    let mut next = state.clone();
    next.step = match severity {
        Severity::High => Step::Consultation,
        Severity::Low => Step::Medication,
    };
    let effect = session_update(
        &next,
        SessionUpdate::Confirmation {
            symptoms: next.selected_symptoms.clone(),
            assessments: next.symptom_assessments.clone(),
            severity,
        },
    );
    Reduction::to(next).with_effect(effect)
}

fn request_order(state: &WizardState, medications: &[MedicationId], catalog: &Catalog) -> Reduction {
    if medications.is_empty() {
        return Reduction::rejected(state, ValidationError::NoMedications);
    }

    let offered = catalog.medications_for(state.selected_symptoms(), state.user_age());
    let mut chosen = Vec::with_capacity(medications.len());
    let mut errors = Vec::new();
    for id in medications {
        match catalog.medication(id) {
            Some(medication) if offered.iter().any(|m| m.id == *id) => {
                chosen.push(medication.clone())
            }
            Some(_) => errors.push(ValidationError::MedicationNotRecommended(id.clone())),
            None => errors.push(ValidationError::UnknownMedication(id.clone())),
        }
    }
    if !errors.is_empty() {
        return Reduction::invalid(state, errors);
    }

    let mut next = state.clone();
    next.selected_medications = chosen;
    next.step = Step::Payment;
    Reduction::to(next)
}

fn submit_payment(state: &WizardState, details: PaymentDetails) -> Reduction {
    if let Err(errors) = into_result(check_payment(&details)) {
        return Reduction::invalid(state, errors);
    }

    let order = OrderRecord {
        session_id: state.session_id.clone(),
        user_age: state.user_age,
        selected_body_part: state.selected_body_part.clone(),
        symptoms: state.selected_symptoms.clone(),
        symptom_assessments: state.symptom_assessments.clone(),
        medications: state.selected_medications.clone(),
        customer: details.customer,
        payment_method: details.payment_method,
        total_cents: state.total_cents(),
        status: OrderStatus::Pending,
    };
    Reduction::to(state.clone()).with_effect(Some(SideEffect::CreateOrder { order }))
}

fn back(state: &WizardState, previous: Step) -> WizardState {
    let mut next = state.clone();
    match state.step {
        Step::Symptom => next.current_body_part = None,
        Step::Assessment => next.current_symptom_for_assessment = None,
        Step::Payment => next.selected_medications.clear(),
        _ => {}
    }
    next.step = previous;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{OrderId, SessionId};
    use crate::persistence::{CustomerInfo, PaymentMethod};

    struct Harness {
        catalog: Catalog,
        config: WizardConfig,
        state: WizardState,
        effects: Vec<SideEffect>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                catalog: Catalog::builtin(),
                config: WizardConfig::default(),
                state: WizardState::new(),
                effects: Vec::new(),
            }
        }

        fn apply(&mut self, action: Action) -> Option<Notice> {
            let reduction = reduce(&self.state, action, &self.catalog, &self.config);
            self.state = reduction.state;
            self.effects.extend(reduction.effects);
            reduction.notice
        }

        fn at_symptoms(symptoms: &[&str]) -> Self {
            let mut h = Self::new();
            h.apply(Action::SessionStarted(SessionId::new("s1")));
            h.apply(Action::SubmitAge(30));
            h.apply(Action::ChooseBodyPart(BodyPartId::new("head")));
            for s in symptoms {
                h.apply(Action::ToggleSymptom(SymptomId::new(*s)));
            }
            h.effects.clear();
            h
        }

        fn assess_current(&mut self) -> Option<Notice> {
            let symptom = self.state.current_symptom_for_assessment().unwrap().clone();
            self.apply(Action::SubmitAssessment(Assessment::new(symptom)))
        }
    }

    fn details() -> PaymentDetails {
        PaymentDetails {
            customer: CustomerInfo {
                name: "Aina".to_string(),
                email: "aina@example.my".to_string(),
                phone: "0123456789".to_string(),
                address: "Jalan Ampang 1".to_string(),
            },
            payment_method: PaymentMethod::OnlineBanking,
        }
    }

    fn sid(name: &str) -> SymptomId {
        SymptomId::new(name)
    }

    #[test]
    fn age_moves_to_body_part_and_updates_session() {
        let mut h = Harness::new();
        h.apply(Action::SessionStarted(SessionId::new("s1")));
        assert_eq!(h.apply(Action::SubmitAge(30)), None);

        assert_eq!(h.state.step(), Step::BodyPart);
        assert_eq!(h.state.user_age(), Some(30));
        assert_eq!(
            h.effects,
            vec![SideEffect::UpdateSession {
                session_id: SessionId::new("s1"),
                update: SessionUpdate::Age { user_age: 30 },
            }]
        );
    }

    #[test]
    fn no_session_means_no_session_updates() {
        let mut h = Harness::new();
        h.apply(Action::SubmitAge(30));
        h.apply(Action::ChooseBodyPart(BodyPartId::new("head")));
        assert!(h.effects.is_empty());
    }

    #[test]
    fn out_of_range_age_is_rejected() {
        let mut h = Harness::new();
        let notice = h.apply(Action::SubmitAge(0));

        assert!(matches!(notice, Some(Notice::Invalid(_))));
        assert_eq!(h.state.step(), Step::Age);
        assert_eq!(h.state.user_age(), None);
    }

    #[test]
    fn unknown_body_part_is_rejected() {
        let mut h = Harness::new();
        h.apply(Action::SubmitAge(30));
        let notice = h.apply(Action::ChooseBodyPart(BodyPartId::new("tail")));

        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::UnknownBodyPart(
                BodyPartId::new("tail")
            )]))
        );
        assert_eq!(h.state.step(), Step::BodyPart);
    }

    #[test]
    fn deselecting_prunes_assessment() {
        let mut h = Harness::at_symptoms(&["headache"]);
        h.apply(Action::StartAssessment(sid("headache")));
        h.assess_current();
        assert!(h.state.assessment(&sid("headache")).is_some());

        h.apply(Action::ToggleSymptom(sid("headache")));

        assert!(h.state.selected_symptoms().is_empty());
        assert!(h.state.symptom_assessments().is_empty());
    }

    #[test]
    fn empty_selection_cannot_complete() {
        let mut h = Harness::at_symptoms(&[]);
        let notice = h.apply(Action::CompleteSelection);

        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::EmptySelection]))
        );
        assert_eq!(h.state.step(), Step::Symptom);
    }

    #[test]
    fn harmless_symptom_routes_through_assessment_to_confirmation() {
        let mut h = Harness::at_symptoms(&["headache"]);

        h.apply(Action::CompleteSelection);
        assert_eq!(h.state.step(), Step::Assessment);
        assert_eq!(h.state.current_symptom_for_assessment(), Some(&sid("headache")));

        h.assess_current();
        assert_eq!(h.state.step(), Step::Symptom);
        assert_eq!(h.state.current_symptom_for_assessment(), None);
        assert!(matches!(
            h.effects.as_slice(),
            [SideEffect::SaveAssessment { .. }]
        ));

        h.apply(Action::CompleteSelection);
        assert_eq!(h.state.step(), Step::Confirmation);
    }

    #[test]
    fn first_unassessed_symptom_in_selection_order_is_assessed() {
        let mut h = Harness::at_symptoms(&["fever", "headache"]);
        h.apply(Action::StartAssessment(sid("headache")));
        h.assess_current();

        h.apply(Action::CompleteSelection);
        assert_eq!(h.state.current_symptom_for_assessment(), Some(&sid("fever")));
    }

    #[test]
    fn danger_symptom_shows_overlay_then_continue_assesses() {
        let mut h = Harness::at_symptoms(&[]);
        h.apply(Action::MoreSymptoms);
        h.apply(Action::ChooseBodyPart(BodyPartId::new("chest")));
        h.apply(Action::ToggleSymptom(sid("chest-pain")));

        h.apply(Action::CompleteSelection);
        assert!(h.state.show_danger_warning());
        assert_eq!(h.state.step(), Step::Symptom);
        assert_eq!(h.state.danger_warning_symptoms(), &[sid("chest-pain")]);

        h.apply(Action::ContinueAfterWarning);
        assert!(!h.state.show_danger_warning());
        assert_eq!(h.state.step(), Step::Assessment);
        assert_eq!(h.state.current_symptom_for_assessment(), Some(&sid("chest-pain")));
    }

    #[test]
    fn acknowledged_warning_is_not_shown_again() {
        let mut h = Harness::at_symptoms(&["headache"]);
        h.apply(Action::MoreSymptoms);
        h.apply(Action::ChooseBodyPart(BodyPartId::new("chest")));
        h.apply(Action::ToggleSymptom(sid("chest-pain")));
        h.apply(Action::CompleteSelection);
        h.apply(Action::ContinueAfterWarning);
        h.assess_current();

        h.apply(Action::CompleteSelection);
        assert!(!h.state.show_danger_warning());
        assert_eq!(h.state.step(), Step::Assessment);
        h.assess_current();

        h.apply(Action::CompleteSelection);
        assert_eq!(h.state.step(), Step::Confirmation);
    }

    #[test]
    fn newly_added_danger_symptom_warns_again() {
        let mut h = Harness::at_symptoms(&[]);
        h.apply(Action::MoreSymptoms);
        h.apply(Action::ChooseBodyPart(BodyPartId::new("chest")));
        h.apply(Action::ToggleSymptom(sid("chest-pain")));
        h.apply(Action::CompleteSelection);
        h.apply(Action::ContinueAfterWarning);
        h.apply(Action::Back);

        h.apply(Action::ToggleSymptom(sid("difficulty-breathing")));
        h.apply(Action::CompleteSelection);

        assert!(h.state.show_danger_warning());
        assert_eq!(
            h.state.danger_warning_symptoms(),
            &[sid("chest-pain"), sid("difficulty-breathing")]
        );
    }

    #[test]
    fn overlay_consultation_exit() {
        let mut h = Harness::at_symptoms(&[]);
        h.apply(Action::MoreSymptoms);
        h.apply(Action::ChooseBodyPart(BodyPartId::new("chest")));
        h.apply(Action::ToggleSymptom(sid("chest-pain")));
        h.apply(Action::CompleteSelection);

        h.apply(Action::ConsultAfterWarning);

        assert_eq!(h.state.step(), Step::Consultation);
        assert!(!h.state.show_danger_warning());
    }

    #[test]
    fn overlay_blocks_other_actions() {
        let mut h = Harness::at_symptoms(&[]);
        h.apply(Action::MoreSymptoms);
        h.apply(Action::ChooseBodyPart(BodyPartId::new("chest")));
        h.apply(Action::ToggleSymptom(sid("chest-pain")));
        h.apply(Action::CompleteSelection);
        let before = h.state.clone();

        for action in [
            Action::CompleteSelection,
            Action::Back,
            Action::ToggleSymptom(sid("cough")),
        ] {
            let notice = h.apply(action);
            assert_eq!(
                notice,
                Some(Notice::Invalid(vec![ValidationError::WarningPending]))
            );
        }
        assert_eq!(h.state, before);
    }

    #[test]
    fn overlay_exits_need_open_overlay() {
        let mut h = Harness::at_symptoms(&["headache"]);
        let notice = h.apply(Action::ContinueAfterWarning);
        assert!(matches!(notice, Some(Notice::Invalid(_))));
        assert_eq!(h.state.step(), Step::Symptom);
    }

    #[test]
    fn assessment_requires_selected_symptom() {
        let mut h = Harness::at_symptoms(&["headache"]);
        let notice = h.apply(Action::StartAssessment(sid("fever")));
        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::SymptomNotSelected(
                sid("fever")
            )]))
        );
    }

    #[test]
    fn severity_decides_branch() {
        let mut high = Harness::at_symptoms(&["headache"]);
        high.apply(Action::StartAssessment(sid("headache")));
        high.assess_current();
        high.apply(Action::CompleteSelection);
        let mut low = Harness {
            state: high.state.clone(),
            ..Harness::new()
        };

        high.apply(Action::ConfirmSymptoms(Severity::High));
        low.apply(Action::ConfirmSymptoms(Severity::Low));

        assert_eq!(high.state.step(), Step::Consultation);
        assert_eq!(low.state.step(), Step::Medication);
        assert!(matches!(
            low.effects.as_slice(),
            [SideEffect::UpdateSession {
                update: SessionUpdate::Confirmation {
                    severity: Severity::Low,
                    ..
                },
                ..
            }]
        ));
    }

    fn at_medication() -> Harness {
        let mut h = Harness::at_symptoms(&["headache"]);
        h.apply(Action::StartAssessment(sid("headache")));
        h.assess_current();
        h.apply(Action::CompleteSelection);
        h.apply(Action::ConfirmSymptoms(Severity::Low));
        h.effects.clear();
        h
    }

    #[test]
    fn empty_order_is_rejected() {
        let mut h = at_medication();
        let notice = h.apply(Action::RequestOrder(Vec::new()));
        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::NoMedications]))
        );
        assert_eq!(h.state.step(), Step::Medication);
    }

    #[test]
    fn unknown_medications_are_all_reported() {
        let mut h = at_medication();
        let notice = h.apply(Action::RequestOrder(vec![
            MedicationId::new("snake-oil"),
            MedicationId::new("paracetamol-500"),
            MedicationId::new("moon-dust"),
        ]));
        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![
                ValidationError::UnknownMedication(MedicationId::new("snake-oil")),
                ValidationError::UnknownMedication(MedicationId::new("moon-dust")),
            ]))
        );
        assert!(h.state.selected_medications().is_empty());
    }

    #[test]
    fn age_restricted_medication_cannot_be_ordered_for_a_child() {
        let mut h = Harness::new();
        h.apply(Action::SubmitAge(3));
        h.apply(Action::ChooseBodyPart(BodyPartId::new("head")));
        h.apply(Action::ToggleSymptom(sid("headache")));
        h.apply(Action::CompleteSelection);
        h.assess_current();
        h.apply(Action::CompleteSelection);
        h.apply(Action::ConfirmSymptoms(Severity::Low));

        let notice = h.apply(Action::RequestOrder(vec![
            MedicationId::new("paracetamol-500"),
            MedicationId::new("ibuprofen-200"),
        ]));

        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![
                ValidationError::MedicationNotRecommended(MedicationId::new("paracetamol-500")),
                ValidationError::MedicationNotRecommended(MedicationId::new("ibuprofen-200")),
            ]))
        );
        assert_eq!(h.state.step(), Step::Medication);
        assert!(h.state.selected_medications().is_empty());

        h.apply(Action::RequestOrder(vec![MedicationId::new("paracetamol-syrup")]));
        assert_eq!(h.state.step(), Step::Payment);
    }

    #[test]
    fn medication_for_unselected_symptoms_is_rejected() {
        let mut h = at_medication();
        let notice = h.apply(Action::RequestOrder(vec![
            MedicationId::new("paracetamol-500"),
            MedicationId::new("cough-syrup"),
        ]));

        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::MedicationNotRecommended(
                MedicationId::new("cough-syrup")
            )]))
        );
        assert_eq!(h.state.step(), Step::Medication);
    }

    #[test]
    fn assessment_must_target_the_current_symptom() {
        let mut h = Harness::at_symptoms(&["headache", "fever"]);
        h.apply(Action::CompleteSelection);
        assert_eq!(h.state.current_symptom_for_assessment(), Some(&sid("headache")));

        let notice = h.apply(Action::SubmitAssessment(Assessment::new(sid("fever"))));

        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::NotBeingAssessed(
                sid("fever")
            )]))
        );
        assert_eq!(h.state.step(), Step::Assessment);
        assert!(h.state.symptom_assessments().is_empty());
        assert!(h.effects.is_empty());
    }

    #[test]
    fn payment_emits_order_and_waits_for_outcome() {
        let mut h = at_medication();
        h.apply(Action::RequestOrder(vec![
            MedicationId::new("paracetamol-500"),
            MedicationId::new("ibuprofen-200"),
        ]));
        assert_eq!(h.state.step(), Step::Payment);
        assert_eq!(h.state.total_cents(), 590 + 790);

        h.apply(Action::SubmitPayment(details()));
        assert_eq!(h.state.step(), Step::Payment);
        match h.effects.as_slice() {
            [SideEffect::CreateOrder { order }] => {
                assert_eq!(order.total_cents, 1380);
                assert_eq!(order.session_id, Some(SessionId::new("s1")));
                assert_eq!(order.status, OrderStatus::Pending);
            }
            other => panic!("expected one order effect, got {other:?}"),
        }

        h.apply(Action::OrderPlaced(OrderId::new("o1")));
        assert_eq!(h.state.step(), Step::Success);
        assert_eq!(h.state.last_order_id(), Some(&OrderId::new("o1")));
    }

    #[test]
    fn failed_order_stays_on_payment() {
        let mut h = at_medication();
        h.apply(Action::RequestOrder(vec![MedicationId::new("paracetamol-500")]));
        h.apply(Action::SubmitPayment(details()));

        let notice = h.apply(Action::OrderFailed("store unavailable".to_string()));

        assert_eq!(notice, Some(Notice::OrderFailed("store unavailable".to_string())));
        assert_eq!(h.state.step(), Step::Payment);
        assert_eq!(h.state.last_order_id(), None);
    }

    #[test]
    fn invalid_payment_creates_no_order() {
        let mut h = at_medication();
        h.apply(Action::RequestOrder(vec![MedicationId::new("paracetamol-500")]));
        let mut form = details();
        form.customer.email = "nope".to_string();
        form.customer.name.clear();

        let notice = h.apply(Action::SubmitPayment(form));

        match notice {
            Some(Notice::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert!(h.effects.is_empty());
    }

    #[test]
    fn back_from_payment_clears_medications() {
        let mut h = at_medication();
        h.apply(Action::RequestOrder(vec![MedicationId::new("paracetamol-500")]));
        h.apply(Action::Back);

        assert_eq!(h.state.step(), Step::Medication);
        assert!(h.state.selected_medications().is_empty());
    }

    #[test]
    fn back_clears_step_local_fields() {
        let mut h = Harness::at_symptoms(&["headache"]);
        h.apply(Action::StartAssessment(sid("headache")));
        h.apply(Action::Back);
        assert_eq!(h.state.step(), Step::Symptom);
        assert_eq!(h.state.current_symptom_for_assessment(), None);

        h.apply(Action::Back);
        assert_eq!(h.state.step(), Step::BodyPart);
        assert_eq!(h.state.current_body_part(), None);
        assert_eq!(h.state.selected_body_part(), Some(&BodyPartId::new("head")));

        h.apply(Action::Back);
        assert_eq!(h.state.step(), Step::Age);

        let notice = h.apply(Action::Back);
        assert!(matches!(notice, Some(Notice::Invalid(_))));
        assert_eq!(h.state.step(), Step::Age);
    }

    #[test]
    fn more_symptoms_keeps_selection() {
        let mut h = Harness::at_symptoms(&["headache"]);
        h.apply(Action::MoreSymptoms);

        assert_eq!(h.state.step(), Step::BodyPart);
        assert!(h.state.is_selecting_more());
        assert_eq!(h.state.current_body_part(), None);
        assert_eq!(h.state.selected_symptoms(), &[sid("headache")]);
    }

    #[test]
    fn reset_restores_initial_state_and_requests_session() {
        let mut h = at_medication();
        h.apply(Action::RequestOrder(vec![MedicationId::new("paracetamol-500")]));
        h.apply(Action::SubmitPayment(details()));
        h.apply(Action::OrderPlaced(OrderId::new("o1")));
        h.effects.clear();

        h.apply(Action::Reset);

        assert_eq!(h.state, WizardState::new());
        assert_eq!(h.effects, vec![SideEffect::CreateSession]);
    }

    #[test]
    fn actions_on_wrong_step_are_rejected() {
        let mut h = Harness::new();
        let notice = h.apply(Action::CompleteSelection);
        assert_eq!(
            notice,
            Some(Notice::Invalid(vec![ValidationError::ActionNotAvailable {
                action: "completeSelection",
                step: Step::Age,
            }]))
        );
        assert_eq!(h.state, WizardState::new());
    }
}
