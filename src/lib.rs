//! Symptom wizard: the guided flow of an online pharmacy.
//!
//! A user enters their age, picks body parts and symptoms, answers follow-up
//! questions per symptom, rates overall severity and is routed either to a
//! doctor consultation or to medication ordering and payment. Selections that
//! include a danger symptom stop at a warning first.
//!
//! The crate follows a "pure core, imperative shell" layout. The transition
//! function [`wizard::reduce`] is pure and returns the store calls it needs as
//! data; [`effects::Wizard`] runs those calls through Stillwater effects
//! against a [`persistence::WizardStore`].
//!
//! # Core Concepts
//!
//! - **Step**: where the user is, with the back-navigation table
//! - **WizardState**: everything collected so far, kept consistent by the reducer
//! - **Catalog**: body parts, symptoms, danger symptoms and medications
//! - **Checkpoint**: a run serialized for later resume
//!
//! # Example
//!
//! ```rust
//! use symptom_wizard::catalog::Catalog;
//! use symptom_wizard::config::WizardConfig;
//! use symptom_wizard::core::Step;
//! use symptom_wizard::ids::{BodyPartId, SymptomId};
//! use symptom_wizard::wizard::{reduce, Action, WizardState};
//!
//! let catalog = Catalog::builtin();
//! let config = WizardConfig::default();
//!
//! let state = WizardState::new();
//! let state = reduce(&state, Action::SubmitAge(34), &catalog, &config).state;
//! let state = reduce(&state, Action::ChooseBodyPart(BodyPartId::new("chest")), &catalog, &config).state;
//! let state = reduce(&state, Action::ToggleSymptom(SymptomId::new("chest-pain")), &catalog, &config).state;
//! let state = reduce(&state, Action::CompleteSelection, &catalog, &config).state;
//!
//! assert_eq!(state.step(), Step::Symptom);
//! assert!(state.show_danger_warning());
//! ```

pub mod catalog;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod effects;
pub mod ids;
pub mod persistence;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use catalog::Catalog;
pub use checkpoint::{CheckpointError, WizardCheckpoint};
pub use config::WizardConfig;
pub use core::{State, Step, StepHistory, StepTransition};
pub use effects::Wizard;
pub use persistence::{InMemoryStore, PersistenceError, WizardStore};
pub use validation::ValidationError;
pub use wizard::{reduce, Action, Notice, SideEffect, WizardState};
