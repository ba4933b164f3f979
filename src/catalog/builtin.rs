//! Built-in pharmacy reference data.

use super::{BodyPart, Catalog, Medication, Symptom};
use crate::ids::{BodyPartId, MedicationId, SymptomId};
use std::collections::BTreeSet;

const BODY_PARTS: &[(&str, &str)] = &[
    ("head", "Head"),
    ("throat", "Throat & Nose"),
    ("chest", "Chest"),
    ("stomach", "Stomach"),
    ("skin", "Skin"),
    ("muscles", "Muscles & Joints"),
];

const SYMPTOMS: &[(&str, &str, &str)] = &[
    ("headache", "Headache", "head"),
    ("migraine", "Migraine", "head"),
    ("dizziness", "Dizziness", "head"),
    ("fever", "Fever", "head"),
    ("sore-throat", "Sore throat", "throat"),
    ("runny-nose", "Runny nose", "throat"),
    ("nasal-congestion", "Nasal congestion", "throat"),
    ("cough", "Cough", "chest"),
    ("chest-pain", "Chest pain", "chest"),
    ("difficulty-breathing", "Difficulty breathing", "chest"),
    ("heartburn", "Heartburn", "stomach"),
    ("diarrhea", "Diarrhea", "stomach"),
    ("nausea", "Nausea", "stomach"),
    ("blood-in-stool", "Blood in stool", "stomach"),
    ("rash", "Rash", "skin"),
    ("itching", "Itching", "skin"),
    ("muscle-ache", "Muscle ache", "muscles"),
    ("joint-pain", "Joint pain", "muscles"),
];

const DANGER_SYMPTOMS: &[&str] = &["chest-pain", "difficulty-breathing", "blood-in-stool"];

struct Product {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: u64,
    treats: &'static [&'static str],
    min_age: Option<u32>,
}

const MEDICATIONS: &[Product] = &[
    Product {
        id: "paracetamol-500",
        name: "Paracetamol 500mg",
        description: "Relief of mild to moderate pain and fever",
        price_cents: 590,
        treats: &["headache", "fever", "muscle-ache", "sore-throat"],
        min_age: Some(12),
    },
    Product {
        id: "paracetamol-syrup",
        name: "Paracetamol Syrup 120mg/5ml",
        description: "Pain and fever relief for children",
        price_cents: 850,
        treats: &["headache", "fever"],
        min_age: None,
    },
    Product {
        id: "ibuprofen-200",
        name: "Ibuprofen 200mg",
        description: "Anti-inflammatory pain relief",
        price_cents: 790,
        treats: &["headache", "migraine", "muscle-ache", "joint-pain", "fever"],
        min_age: Some(12),
    },
    Product {
        id: "cough-syrup",
        name: "Dextromethorphan Cough Syrup",
        description: "Suppresses dry cough",
        price_cents: 1250,
        treats: &["cough"],
        min_age: Some(6),
    },
    Product {
        id: "throat-lozenges",
        name: "Strepsils Lozenges",
        description: "Soothes sore throat",
        price_cents: 680,
        treats: &["sore-throat"],
        min_age: Some(6),
    },
    Product {
        id: "loratadine-10",
        name: "Loratadine 10mg",
        description: "Non-drowsy antihistamine",
        price_cents: 1490,
        treats: &["runny-nose", "itching", "rash"],
        min_age: Some(12),
    },
    Product {
        id: "saline-spray",
        name: "Saline Nasal Spray",
        description: "Clears nasal congestion",
        price_cents: 990,
        treats: &["nasal-congestion", "runny-nose"],
        min_age: None,
    },
    Product {
        id: "antacid",
        name: "Antacid Chewable Tablets",
        description: "Neutralises stomach acid",
        price_cents: 650,
        treats: &["heartburn", "nausea"],
        min_age: Some(12),
    },
    Product {
        id: "oral-rehydration",
        name: "Oral Rehydration Salts",
        description: "Replaces fluids lost through diarrhea",
        price_cents: 450,
        treats: &["diarrhea"],
        min_age: None,
    },
    Product {
        id: "hydrocortisone-cream",
        name: "Hydrocortisone 1% Cream",
        description: "Relieves itching and mild rashes",
        price_cents: 1190,
        treats: &["rash", "itching"],
        min_age: Some(2),
    },
    Product {
        id: "dimenhydrinate",
        name: "Dimenhydrinate 50mg",
        description: "Relieves dizziness and nausea",
        price_cents: 880,
        treats: &["dizziness", "nausea"],
        min_age: Some(12),
    },
];

pub(super) fn catalog() -> Catalog {
    let body_parts = BODY_PARTS
        .iter()
        .map(|&(id, name)| BodyPart {
            id: BodyPartId::new(id),
            name: name.to_string(),
        })
        .collect();

    let symptoms = SYMPTOMS
        .iter()
        .map(|&(id, name, body_part)| Symptom {
            id: SymptomId::new(id),
            name: name.to_string(),
            body_part: BodyPartId::new(body_part),
        })
        .collect();

    let danger_symptoms: BTreeSet<SymptomId> =
        DANGER_SYMPTOMS.iter().copied().map(SymptomId::from).collect();

    let medications = MEDICATIONS
        .iter()
        .map(|p| Medication {
            id: MedicationId::new(p.id),
            name: p.name.to_string(),
            description: p.description.to_string(),
            price_cents: p.price_cents,
            treats: p.treats.iter().copied().map(SymptomId::from).collect(),
            min_age: p.min_age,
        })
        .collect();

    Catalog {
        body_parts,
        symptoms,
        danger_symptoms,
        medications,
    }
}
