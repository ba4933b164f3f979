//! Side effects as Stillwater effects.

use crate::config::WizardConfig;
use crate::persistence::{PersistenceError, WizardStore};
use crate::wizard::{Action, SideEffect};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;

/// Build the store call for `effect`.
///
/// The effect yields the feedback action to reduce next, if any. Store
/// errors are returned unchanged; the caller decides which ones the user sees.
pub fn perform<Env>(
    effect: SideEffect,
    config: &WizardConfig,
) -> BoxedEffect<Option<Action>, PersistenceError, Env>
where
    Env: WizardStore + Clone + Send + Sync + 'static,
{
    match effect {
        SideEffect::CreateSession => {
            let metadata = config.session_metadata();
            from_fn(move |env: &Env| {
                env.create_session(&metadata)
                    .map(|id| Some(Action::SessionStarted(id)))
            })
            .boxed()
        }
        SideEffect::UpdateSession { session_id, update } => {
            from_fn(move |env: &Env| env.update_session(&session_id, &update).map(|()| None))
                .boxed()
        }
        SideEffect::SaveAssessment { record } => {
            from_fn(move |env: &Env| env.save_assessment(&record).map(|_| None)).boxed()
        }
        SideEffect::CreateOrder { order } => from_fn(move |env: &Env| {
            env.create_order(&order)
                .map(|id| Some(Action::OrderPlaced(id)))
        })
        .boxed(),
    }
}
