//! Read-only reference data consumed by the wizard.
//!
//! A [`Catalog`] lists the body parts a user can pick, the symptoms offered
//! for each body part, which symptoms are dangerous, and the medications that
//! can be recommended. Catalogs are either the built-in pharmacy data
//! ([`Catalog::builtin`]) or loaded from JSON ([`Catalog::from_json`]).

mod builtin;

use crate::ids::{BodyPartId, MedicationId, SymptomId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BodyPart {
    pub id: BodyPartId,
    pub name: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
    pub body_part: BodyPartId,
}

/// A product that can be recommended and ordered.
///
/// Prices are kept in minor currency units.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Medication {
    pub id: MedicationId,
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    /// Symptoms this medication is recommended for
    pub treats: Vec<SymptomId>,
    /// Youngest age the medication may be sold for, if restricted
    #[serde(default)]
    pub min_age: Option<u32>,
}

impl Medication {
    /// Whether a user of `age` may be offered this medication.
    ///
    /// Restricted medications are never offered to a user whose age is
    /// unknown.
    pub fn suitable_for(&self, age: Option<u32>) -> bool {
        match (self.min_age, age) {
            (None, _) => true,
            (Some(min), Some(age)) => age >= min,
            (Some(_), None) => false,
        }
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Symptom '{symptom}' refers to unknown body part '{body_part}'")]
    UnknownBodyPart {
        symptom: SymptomId,
        body_part: BodyPartId,
    },

    #[error("'{referenced_by}' refers to unknown symptom '{symptom}'")]
    UnknownSymptom {
        symptom: SymptomId,
        referenced_by: String,
    },

    #[error("Duplicate id '{0}' in catalog")]
    DuplicateId(String),
}

/// Reference data catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    body_parts: Vec<BodyPart>,
    symptoms: Vec<Symptom>,
    danger_symptoms: BTreeSet<SymptomId>,
    medications: Vec<Medication>,
}

impl Catalog {
    /// Build a catalog, checking that every cross reference resolves.
    pub fn new(
        body_parts: Vec<BodyPart>,
        symptoms: Vec<Symptom>,
        danger_symptoms: BTreeSet<SymptomId>,
        medications: Vec<Medication>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            body_parts,
            symptoms,
            danger_symptoms,
            medications,
        };
        catalog.check_references()?;
        Ok(catalog)
    }

    /// Load a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check_references()?;
        Ok(catalog)
    }

    /// The built-in pharmacy catalog.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    fn check_references(&self) -> Result<(), CatalogError> {
        let mut seen = BTreeSet::new();
        let ids = self
            .body_parts
            .iter()
            .map(|b| format!("body part {}", b.id))
            .chain(self.symptoms.iter().map(|s| format!("symptom {}", s.id)))
            .chain(self.medications.iter().map(|m| format!("medication {}", m.id)));
        for id in ids {
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateId(id));
            }
        }

        for symptom in &self.symptoms {
            if self.body_part(&symptom.body_part).is_none() {
                return Err(CatalogError::UnknownBodyPart {
                    symptom: symptom.id.clone(),
                    body_part: symptom.body_part.clone(),
                });
            }
        }

        for danger in &self.danger_symptoms {
            if self.symptom(danger).is_none() {
                return Err(CatalogError::UnknownSymptom {
                    symptom: danger.clone(),
                    referenced_by: "danger list".to_string(),
                });
            }
        }

        for medication in &self.medications {
            if let Some(missing) = medication.treats.iter().find(|s| self.symptom(s).is_none()) {
                return Err(CatalogError::UnknownSymptom {
                    symptom: missing.clone(),
                    referenced_by: format!("medication {}", medication.id),
                });
            }
        }

        Ok(())
    }

    pub fn body_parts(&self) -> &[BodyPart] {
        &self.body_parts
    }

    pub fn body_part(&self, id: &BodyPartId) -> Option<&BodyPart> {
        self.body_parts.iter().find(|b| &b.id == id)
    }

    pub fn symptom(&self, id: &SymptomId) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| &s.id == id)
    }

    /// Symptoms offered for one body part, in catalog order.
    pub fn symptoms_for(&self, body_part: &BodyPartId) -> Vec<&Symptom> {
        self.symptoms
            .iter()
            .filter(|s| &s.body_part == body_part)
            .collect()
    }

    pub fn danger_symptoms(&self) -> &BTreeSet<SymptomId> {
        &self.danger_symptoms
    }

    pub fn is_dangerous(&self, symptom: &SymptomId) -> bool {
        self.danger_symptoms.contains(symptom)
    }

    pub fn medication(&self, id: &MedicationId) -> Option<&Medication> {
        self.medications.iter().find(|m| &m.id == id)
    }

    /// Medications recommended for the selected symptoms and user age.
    ///
    /// A medication is listed once, in catalog order, if it treats at least
    /// one selected symptom and is suitable for `age`.
    pub fn medications_for(&self, symptoms: &[SymptomId], age: Option<u32>) -> Vec<&Medication> {
        self.medications
            .iter()
            .filter(|m| m.treats.iter().any(|t| symptoms.contains(t)))
            .filter(|m| m.suitable_for(age))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
