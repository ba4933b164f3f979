//! Wizard driver: owns a run and executes its side effects.

use super::perform::perform;
use crate::catalog::{Catalog, Medication, Symptom};
use crate::checkpoint::WizardCheckpoint;
use crate::config::WizardConfig;
use crate::core::{Progress, State, Step, StepHistory, StepTransition};
use crate::persistence::WizardStore;
use crate::wizard::{reduce, Action, Notice, SideEffect, WizardState};
use chrono::Utc;
use std::collections::VecDeque;
use stillwater::effect::Effect;
use tracing::{debug, error, info, warn};

/// One wizard run bound to a catalog, a config and a store.
///
/// `dispatch` reduces an action, commits the new state, then runs the
/// requested store calls. Feedback from those calls is reduced in turn
/// until nothing is left, so a dispatch returns with the run settled.
pub struct Wizard<St: WizardStore + Clone + Send + Sync + 'static> {
    state: WizardState,
    history: StepHistory<Step>,
    catalog: Catalog,
    config: WizardConfig,
    store: St,
}

impl<St: WizardStore + Clone + Send + Sync + 'static> Wizard<St> {
    /// Create a run at the age step. Call [`Wizard::start`] to open a session.
    pub fn new(catalog: Catalog, config: WizardConfig, store: St) -> Self {
        Self {
            state: WizardState::new(),
            history: StepHistory::new(),
            catalog,
            config,
            store,
        }
    }

    /// Continue a run from a checkpoint.
    pub fn resume(
        checkpoint: WizardCheckpoint,
        catalog: Catalog,
        config: WizardConfig,
        store: St,
    ) -> Self {
        info!(
            "Resuming wizard run at step '{}' from checkpoint {}",
            checkpoint.state.step(),
            checkpoint.id
        );
        Self {
            state: checkpoint.state,
            history: checkpoint.history,
            catalog,
            config,
            store,
        }
    }

    /// Open the session for this run.
    ///
    /// A failure leaves the run without a session id; the wizard stays usable.
    pub async fn start(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if let Some(feedback) = self.run_effect(SideEffect::CreateSession).await {
            notices = self.dispatch(feedback).await;
        }
        notices
    }

    /// Apply a user action and everything it sets in motion.
    pub async fn dispatch(&mut self, action: Action) -> Vec<Notice> {
        let mut queue = VecDeque::from([action]);
        let mut notices = Vec::new();

        while let Some(action) = queue.pop_front() {
            let trigger = action.name();
            let resetting = matches!(action, Action::Reset);
            let from = self.state.step();
            debug!("Reducing '{}' at step '{}'", trigger, from);

            let reduction = reduce(&self.state, action, &self.catalog, &self.config);
            self.state = reduction.state;

            if let Some(notice) = reduction.notice {
                debug!("'{}' produced notice: {:?}", trigger, notice);
                notices.push(notice);
            }

            let to = self.state.step();
            if resetting && from == Step::Success && to == Step::Age {
                info!("Run reset, starting a new history");
                self.history = StepHistory::new();
            } else if to != from {
                info!("Step change: {} -> {} via '{}'", from.name(), to.name(), trigger);
                self.history = self.history.record(StepTransition {
                    from,
                    to,
                    trigger: trigger.to_string(),
                    timestamp: Utc::now(),
                });
            }

            for effect in reduction.effects {
                if let Some(feedback) = self.run_effect(effect).await {
                    queue.push_back(feedback);
                }
            }
        }

        notices
    }

    async fn run_effect(&self, effect: SideEffect) -> Option<Action> {
        let name = effect.name();
        let blocking = effect.is_blocking();

        match perform(effect, &self.config).run(&self.store).await {
            Ok(feedback) => {
                match &feedback {
                    Some(Action::SessionStarted(id)) => info!("Session {} created", id),
                    Some(Action::OrderPlaced(id)) => info!("Order {} created", id),
                    _ => debug!("'{}' completed", name),
                }
                feedback
            }
            Err(e) if blocking => {
                error!("'{}' failed: {}", name, e);
                Some(Action::OrderFailed(e.to_string()))
            }
            Err(e) => {
                warn!("'{}' failed, continuing without it: {}", name, e);
                None
            }
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn history(&self) -> &StepHistory<Step> {
        &self.history
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    /// Symptoms listed on the symptom step.
    pub fn visible_symptoms(&self) -> Vec<&Symptom> {
        self.state
            .displayed_body_part()
            .map(|body_part| self.catalog.symptoms_for(body_part))
            .unwrap_or_default()
    }

    /// Medications offered on the medication step.
    pub fn recommended_medications(&self) -> Vec<&Medication> {
        self.catalog
            .medications_for(self.state.selected_symptoms(), self.state.user_age())
    }

    /// Whether the back control is offered right now.
    pub fn can_go_back(&self) -> bool {
        self.state.step().allows_back() && !self.state.show_danger_warning()
    }

    pub fn progress(&self) -> Progress {
        self.state.step().progress()
    }

    /// Snapshot the run for later [`Wizard::resume`].
    pub fn checkpoint(&self) -> WizardCheckpoint {
        WizardCheckpoint::new(self.state.clone(), self.history.clone())
    }
}
