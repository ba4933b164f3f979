//! Inputs to the reducer.

use super::state::{Assessment, Severity};
use crate::ids::{BodyPartId, MedicationId, OrderId, SessionId, SymptomId};
use crate::persistence::{CustomerInfo, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Contents of the payment form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
}

/// Something that happened: a user action, or the outcome of a store call
/// fed back by the driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    SubmitAge(u32),
    ChooseBodyPart(BodyPartId),
    ToggleSymptom(SymptomId),
    /// "Any other symptoms?"
    MoreSymptoms,
    StartAssessment(SymptomId),
    SubmitAssessment(Assessment),
    CompleteSelection,
    /// Danger overlay exit: go to consultation
    ConsultAfterWarning,
    /// Danger overlay exit: carry on with the selection
    ContinueAfterWarning,
    ConfirmSymptoms(Severity),
    RequestOrder(Vec<MedicationId>),
    SubmitPayment(PaymentDetails),
    Back,
    Reset,

    SessionStarted(SessionId),
    OrderPlaced(OrderId),
    OrderFailed(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SubmitAge(_) => "submitAge",
            Self::ChooseBodyPart(_) => "chooseBodyPart",
            Self::ToggleSymptom(_) => "toggleSymptom",
            Self::MoreSymptoms => "moreSymptoms",
            Self::StartAssessment(_) => "startAssessment",
            Self::SubmitAssessment(_) => "submitAssessment",
            Self::CompleteSelection => "completeSelection",
            Self::ConsultAfterWarning => "consultAfterWarning",
            Self::ContinueAfterWarning => "continueAfterWarning",
            Self::ConfirmSymptoms(_) => "confirmSymptoms",
            Self::RequestOrder(_) => "requestOrder",
            Self::SubmitPayment(_) => "submitPayment",
            Self::Back => "back",
            Self::Reset => "reset",
            Self::SessionStarted(_) => "sessionStarted",
            Self::OrderPlaced(_) => "orderPlaced",
            Self::OrderFailed(_) => "orderFailed",
        }
    }

    /// Outcome of a store call rather than user input.
    pub fn is_feedback(&self) -> bool {
        matches!(
            self,
            Self::SessionStarted(_) | Self::OrderPlaced(_) | Self::OrderFailed(_)
        )
    }

    /// One of the two exits of the danger overlay.
    pub fn resolves_warning(&self) -> bool {
        matches!(self, Self::ConsultAfterWarning | Self::ContinueAfterWarning)
    }
}
