// models/src/medical/symptom.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    Common,
    Warning,
    Emergency,
}

/// Catalog entry. Logs refer to it by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: RecordId,
    pub name: String,
    pub icon: String, // icon name, opaque to the store
    pub category: SymptomCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomLog {
    pub id: RecordId,
    pub symptom_id: RecordId,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub logged_at: NaiveDateTime,
}

impl SymptomLog {
    /// A new log entry with a freshly generated id.
    pub fn new(symptom_id: RecordId, severity: Severity, logged_at: NaiveDateTime) -> Self {
        SymptomLog {
            id: RecordId::generate("sl"),
            symptom_id,
            severity,
            notes: None,
            logged_at,
        }
    }
}
