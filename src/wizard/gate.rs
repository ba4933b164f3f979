//! Danger-symptom gate.
//!
//! The gate decides whether completing the symptom selection must first show
//! the danger warning. Its memory is the set of danger symptoms the user has
//! already been warned about: the warning is shown again only when the
//! selection contains a danger symptom outside that set. Deselecting a
//! symptom forgets its acknowledgement; back navigation does not.

use crate::ids::SymptomId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Danger symptoms in `selected`, in selection order.
///
/// Pure; safe to recompute on every completion attempt.
pub fn danger_intersection(
    danger: &BTreeSet<SymptomId>,
    selected: &[SymptomId],
) -> Vec<SymptomId> {
    selected
        .iter()
        .filter(|s| danger.contains(*s))
        .cloned()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerGate {
    /// Symptoms listed by the open overlay
    pending: Option<Vec<SymptomId>>,
    acknowledged: BTreeSet<SymptomId>,
}

impl DangerGate {
    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> &[SymptomId] {
        self.pending.as_deref().unwrap_or_default()
    }

    pub fn acknowledged(&self) -> &BTreeSet<SymptomId> {
        &self.acknowledged
    }

    /// Whether this completion attempt must stop at the warning.
    pub fn needs_warning(&self, intersection: &[SymptomId]) -> bool {
        !self.is_open() && intersection.iter().any(|s| !self.acknowledged.contains(s))
    }

    /// Show the overlay for `intersection`.
    pub fn open(&self, intersection: Vec<SymptomId>) -> Self {
        Self {
            pending: Some(intersection),
            acknowledged: self.acknowledged.clone(),
        }
    }

    /// Close the overlay, remembering the listed symptoms as acknowledged.
    pub fn dismiss(&self) -> Self {
        let mut acknowledged = self.acknowledged.clone();
        acknowledged.extend(self.pending().iter().cloned());
        Self {
            pending: None,
            acknowledged,
        }
    }

    /// Drop the acknowledgement of a deselected symptom.
    pub fn forget(&self, symptom: &SymptomId) -> Self {
        let mut acknowledged = self.acknowledged.clone();
        acknowledged.remove(symptom);
        Self {
            pending: self.pending.clone(),
            acknowledged,
        }
    }
}
