//! Session, assessment-log and order persistence.
//!
//! The wizard only needs the four calls of [`WizardStore`]. Which of them may
//! fail silently is decided by the driver, not the store: session and
//! assessment writes are best effort, order creation gates the success step.

mod memory;
mod records;

pub use memory::InMemoryStore;
pub use records::{
    AssessmentRecord, CustomerInfo, OrderRecord, OrderStatistics, OrderStatus, PaymentMethod,
    SessionMetadata, SessionRecord, SessionUpdate, StoredAssessment, StoredOrder,
    SymptomStatistics,
};

use crate::ids::{AssessmentLogId, OrderId, SessionId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("{collection} document '{id}' not found")]
    NotFound { collection: &'static str, id: String },

    #[error("Store rejected the write: {0}")]
    Rejected(String),
}

/// Backing service for sessions, the assessment log and orders.
pub trait WizardStore {
    /// Open a session for a new wizard run.
    fn create_session(&self, metadata: &SessionMetadata) -> Result<SessionId, PersistenceError>;

    /// Merge a partial update into an existing session.
    fn update_session(&self, id: &SessionId, update: &SessionUpdate)
        -> Result<(), PersistenceError>;

    /// Append an entry to the assessment log.
    fn save_assessment(
        &self,
        record: &AssessmentRecord,
    ) -> Result<AssessmentLogId, PersistenceError>;

    /// Store a new order; the store sets its status to pending.
    fn create_order(&self, order: &OrderRecord) -> Result<OrderId, PersistenceError>;
}
