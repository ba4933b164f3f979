//! In-memory store backed by concurrent maps.

use super::records::{
    AssessmentRecord, OrderRecord, OrderStatistics, OrderStatus, SessionMetadata, SessionRecord,
    SessionUpdate, StoredAssessment, StoredOrder, SymptomStatistics,
};
use super::{PersistenceError, WizardStore};
use crate::ids::{self, AssessmentLogId, OrderId, SessionId};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;

/// Store keeping every document in process memory.
///
/// Clones share the same maps, so a clone handed to the wizard and one kept
/// for inspection see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    sessions: Arc<DashMap<SessionId, SessionRecord>>,
    assessments: Arc<DashMap<AssessmentLogId, StoredAssessment>>,
    orders: Arc<DashMap<OrderId, StoredOrder>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_session(&self, id: &SessionId) -> Option<SessionRecord> {
        self.sessions.get(id).map(|entry| entry.clone())
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn get_order(&self, id: &OrderId) -> Option<StoredOrder> {
        self.orders.get(id).map(|entry| entry.clone())
    }

    pub fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), PersistenceError> {
        let mut entry = self
            .orders
            .get_mut(id)
            .ok_or_else(|| PersistenceError::NotFound {
                collection: "orders",
                id: id.to_string(),
            })?;
        entry.order.status = status;
        entry.updated_at = Utc::now();
        Ok(())
    }

    /// Most recent orders first, at most `limit` of them.
    pub fn recent_orders(&self, limit: usize) -> Vec<StoredOrder> {
        let mut orders: Vec<StoredOrder> =
            self.orders.iter().map(|entry| entry.value().clone()).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders.truncate(limit);
        orders
    }

    /// Orders placed with `email`, most recent first.
    pub fn orders_by_email(&self, email: &str) -> Vec<StoredOrder> {
        let mut orders: Vec<StoredOrder> = self
            .orders
            .iter()
            .filter(|entry| entry.order.customer.email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Most recent assessment-log entries first, at most `limit`.
    pub fn recent_assessments(&self, limit: usize) -> Vec<StoredAssessment> {
        let mut entries: Vec<StoredAssessment> = self
            .assessments
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        entries
    }

    pub fn order_statistics(&self) -> OrderStatistics {
        let mut stats = OrderStatistics {
            status_count: OrderStatus::ALL.into_iter().map(|s| (s, 0)).collect(),
            ..OrderStatistics::default()
        };

        for entry in self.orders.iter() {
            stats.total_orders += 1;
            stats.total_revenue_cents += entry.order.total_cents;
            *stats.status_count.entry(entry.order.status).or_insert(0) += 1;
        }

        if stats.total_orders > 0 {
            stats.average_order_cents = stats.total_revenue_cents / stats.total_orders as u64;
        }
        stats
    }

    pub fn symptom_statistics(&self) -> SymptomStatistics {
        let mut stats = SymptomStatistics::default();

        for entry in self.assessments.iter() {
            let record = &entry.record;
            stats.total_assessments += 1;
            *stats
                .symptom_count
                .entry(record.symptom.clone())
                .or_insert(0) += 1;
            if let Some(body_part) = &record.body_part {
                *stats.body_part_count.entry(body_part.clone()).or_insert(0) += 1;
            }
        }
        stats
    }
}

impl WizardStore for InMemoryStore {
    fn create_session(&self, metadata: &SessionMetadata) -> Result<SessionId, PersistenceError> {
        let id = SessionId::new(ids::generate());
        let record = SessionRecord::new(id.clone(), metadata.clone(), Utc::now());
        self.sessions.insert(id.clone(), record);
        Ok(id)
    }

    fn update_session(
        &self,
        id: &SessionId,
        update: &SessionUpdate,
    ) -> Result<(), PersistenceError> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| PersistenceError::NotFound {
                collection: "user_sessions",
                id: id.to_string(),
            })?;
        entry.apply(update, Utc::now());
        Ok(())
    }

    fn save_assessment(
        &self,
        record: &AssessmentRecord,
    ) -> Result<AssessmentLogId, PersistenceError> {
        let id = AssessmentLogId::new(ids::generate());
        let stored = StoredAssessment {
            id: id.clone(),
            record: record.clone(),
            created_at: Utc::now(),
        };
        self.assessments.insert(id.clone(), stored);
        Ok(id)
    }

    fn create_order(&self, order: &OrderRecord) -> Result<OrderId, PersistenceError> {
        let id = OrderId::new(ids::generate());
        let now = Utc::now();
        let mut order = order.clone();
        order.status = OrderStatus::Pending;
        self.orders.insert(
            id.clone(),
            StoredOrder {
                id: id.clone(),
                order,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }
}
