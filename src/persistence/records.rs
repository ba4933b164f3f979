//! Documents exchanged with the session/order store.

use crate::catalog::Medication;
use crate::ids::{AssessmentLogId, BodyPartId, OrderId, SessionId, SymptomId};
use crate::wizard::{Assessment, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sent once when a wizard run opens its session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub started_at: DateTime<Utc>,
    pub user_agent: String,
    pub platform: String,
}

/// Partial update of a session, one per major transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionUpdate {
    Age {
        user_age: u32,
    },
    BodyPart {
        body_part: BodyPartId,
    },
    Confirmation {
        symptoms: Vec<SymptomId>,
        assessments: BTreeMap<SymptomId, Assessment>,
        severity: Severity,
    },
}

impl SessionUpdate {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Age { .. } => "age",
            Self::BodyPart { .. } => "body_part",
            Self::Confirmation { .. } => "confirmation",
        }
    }
}

/// A session as held by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub metadata: SessionMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_age: Option<u32>,
    pub selected_body_part: Option<BodyPartId>,
    pub body_part_selected_at: Option<DateTime<Utc>>,
    pub selected_symptoms: Vec<SymptomId>,
    pub symptom_assessments: BTreeMap<SymptomId, Assessment>,
    pub severity: Option<Severity>,
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl SessionRecord {
    pub fn new(id: SessionId, metadata: SessionMetadata, now: DateTime<Utc>) -> Self {
        Self {
            id,
            metadata,
            created_at: now,
            updated_at: now,
            user_age: None,
            selected_body_part: None,
            body_part_selected_at: None,
            selected_symptoms: Vec::new(),
            symptom_assessments: BTreeMap::new(),
            severity: None,
            confirmed_at: None,
        }
    }

    /// Merge an update into the record, stamping it with `at`.
    pub fn apply(&mut self, update: &SessionUpdate, at: DateTime<Utc>) {
        match update {
            SessionUpdate::Age { user_age } => self.user_age = Some(*user_age),
            SessionUpdate::BodyPart { body_part } => {
                self.selected_body_part = Some(body_part.clone());
                self.body_part_selected_at = Some(at);
            }
            SessionUpdate::Confirmation {
                symptoms,
                assessments,
                severity,
            } => {
                self.selected_symptoms = symptoms.clone();
                self.symptom_assessments = assessments.clone();
                self.severity = Some(*severity);
                self.confirmed_at = Some(at);
            }
        }
        self.updated_at = at;
    }
}

/// Entry of the assessment log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub session_id: Option<SessionId>,
    pub user_age: Option<u32>,
    pub body_part: Option<BodyPartId>,
    pub symptom: SymptomId,
    pub assessment: Assessment,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: AssessmentLogId,
    pub record: AssessmentRecord,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    OnlineBanking,
    EWallet,
    CashOnDelivery,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];
}

/// Order as submitted at payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub session_id: Option<SessionId>,
    pub user_age: Option<u32>,
    pub selected_body_part: Option<BodyPartId>,
    pub symptoms: Vec<SymptomId>,
    pub symptom_assessments: BTreeMap<SymptomId, Assessment>,
    pub medications: Vec<Medication>,
    pub customer: CustomerInfo,
    pub payment_method: PaymentMethod,
    pub total_cents: u64,
    pub status: OrderStatus,
}

/// An order as held by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredOrder {
    pub id: OrderId,
    pub order: OrderRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatistics {
    pub total_orders: usize,
    pub total_revenue_cents: u64,
    pub status_count: BTreeMap<OrderStatus, usize>,
    pub average_order_cents: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomStatistics {
    pub symptom_count: BTreeMap<SymptomId, usize>,
    pub body_part_count: BTreeMap<BodyPartId, usize>,
    pub total_assessments: usize,
}
