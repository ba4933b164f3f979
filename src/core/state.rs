//! Core State trait for wizard steps.
//!
//! Anything that can sit in a [`StepHistory`](super::StepHistory) implements
//! this trait. Its methods are pure and only inspect the value.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states of the wizard flow.
///
/// # Required Traits
///
/// - `Clone`: states are copied into history records
/// - `PartialEq`: transitions compare states to detect step changes
/// - `Debug`: for diagnostics and log fields
/// - `Serialize` + `Deserialize`: states are checkpointed
///
/// # Example
///
/// ```rust
/// use symptom_wizard::core::{State, Step};
///
/// assert_eq!(Step::BodyPart.name(), "bodyPart");
/// assert!(Step::Success.is_final());
/// assert!(!Step::Payment.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
