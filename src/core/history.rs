//! Step transition history tracking.
//!
//! Every step change of a wizard run is kept as an immutable record, so a
//! run can be replayed for diagnostics or carried inside a checkpoint.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step change.
///
/// # Example
///
/// ```rust
/// use symptom_wizard::core::{Step, StepTransition};
/// use chrono::Utc;
///
/// let transition = StepTransition {
///     from: Step::Age,
///     to: Step::BodyPart,
///     trigger: "submitAge".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Step::BodyPart);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Name of the action that caused the change
    pub trigger: String,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of step changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use symptom_wizard::core::{Step, StepHistory, StepTransition};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepTransition {
///         from: Step::Age,
///         to: Step::BodyPart,
///         trigger: "submitAge".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StepTransition {
///         from: Step::BodyPart,
///         to: Step::Symptom,
///         trigger: "chooseBodyPart".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&Step::Age, &Step::BodyPart, &Step::Symptom]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepHistory<S: State> {
    transitions: Vec<StepTransition<S>>,
}

impl<S: State> Default for StepHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StepHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StepTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// How many times `state` was entered.
    pub fn visits(&self, state: &S) -> usize {
        self.transitions.iter().filter(|t| &t.to == state).count()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StepTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StepTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
