//! Work the reducer asks the driver to perform.

use crate::ids::SessionId;
use crate::persistence::{AssessmentRecord, OrderRecord, SessionUpdate};
use serde::{Deserialize, Serialize};

/// A store call requested by a transition.
///
/// Only order creation reports back into the state machine; the other
/// calls are best effort and their failures are logged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SideEffect {
    /// Open a session for a new run
    CreateSession,
    UpdateSession {
        session_id: SessionId,
        update: SessionUpdate,
    },
    SaveAssessment {
        record: AssessmentRecord,
    },
    CreateOrder {
        order: OrderRecord,
    },
}

impl SideEffect {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateSession => "createSession",
            Self::UpdateSession { .. } => "updateSession",
            Self::SaveAssessment { .. } => "saveAssessment",
            Self::CreateOrder { .. } => "createOrder",
        }
    }

    /// Whether a failure must reach the user and hold the wizard in place.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::CreateOrder { .. })
    }
}
