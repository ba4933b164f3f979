//! The wizard state machine.
//!
//! A run is a [`WizardState`] folded over [`Action`]s by [`reduce`]. Every
//! reduction yields the next state plus the [`SideEffect`]s the driver must
//! perform against the store; outcomes the state machine cares about come
//! back in as feedback actions (`SessionStarted`, `OrderPlaced`,
//! `OrderFailed`).
//!
//! Two rules are enforced here rather than by callers:
//!
//! - assessments are only kept for selected symptoms ([`record_assessment`],
//!   [`discard_assessment`])
//! - completing a selection that contains a danger symptom stops at the
//!   warning overlay first ([`DangerGate`])

mod action;
mod assessment;
mod effect;
mod gate;
mod reducer;
mod state;

pub use action::{Action, PaymentDetails};
pub use assessment::{discard_assessment, record_assessment};
pub use effect::SideEffect;
pub use gate::{danger_intersection, DangerGate};
pub use reducer::{reduce, Notice, Reduction};
pub use state::{Answer, Assessment, Severity, WizardState};
