// lib/src/catalog.rs

//! Static reference data: the symptom list, the prescribed medications and
//! the blood banks. Logs in the store hold ids into these.

use serde::{Deserialize, Serialize};

use thalcare_models::{BloodBank, Medication, MedicationLog, Symptom, SymptomCategory, SymptomLog};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub medications: Vec<Medication>,
    #[serde(default)]
    pub blood_banks: Vec<BloodBank>,
}

impl Catalog {
    pub fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id.as_str() == id)
    }

    pub fn medication(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id.as_str() == id)
    }

    pub fn blood_bank(&self, id: &str) -> Option<&BloodBank> {
        self.blood_banks.iter().find(|b| b.id.as_str() == id)
    }

    pub fn symptoms_in(&self, category: SymptomCategory) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter().filter(move |s| s.category == category)
    }

    pub fn symptom_for(&self, log: &SymptomLog) -> Option<&Symptom> {
        self.symptom(&log.symptom_id)
    }

    pub fn medication_for(&self, log: &MedicationLog) -> Option<&Medication> {
        self.medication(&log.medication_id)
    }

    /// Verified banks that report units in stock, in listing order.
    pub fn banks_with_stock(&self) -> impl Iterator<Item = &BloodBank> {
        self.blood_banks
            .iter()
            .filter(|b| b.is_verified && b.available_units.unwrap_or(0) > 0)
    }
}
