//! Core step types.
//!
//! This module contains the pure building blocks the wizard is made of:
//! - the `State` trait and the `Step` enum implementing it
//! - immutable history of step changes
//!
//! Nothing here performs I/O.

mod history;
mod state;
mod step;

pub use history::{StepHistory, StepTransition};
pub use state::State;
pub use step::{Progress, Step, PROGRESS_STAGES};
