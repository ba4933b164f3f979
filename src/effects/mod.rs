//! The imperative shell around the wizard reducer.
//!
//! The reducer in [`crate::wizard`] only describes store calls. This module
//! turns each [`SideEffect`](crate::wizard::SideEffect) into a Stillwater
//! effect over a [`WizardStore`](crate::persistence::WizardStore) environment
//! and runs it, feeding outcomes back into the reducer.
//!
//! # Key Concepts
//!
//! - **perform**: one side effect as a `BoxedEffect`, resolved against the store
//! - **Wizard**: owns the state, runs actions to quiescence, records history
//! - **Failure policy**: session and assessment writes are best effort; a
//!   failed order comes back as `Action::OrderFailed`

mod driver;
mod perform;

pub use driver::Wizard;
pub use perform::perform;
