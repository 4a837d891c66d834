// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialty: String, // e.g., "Hematologist", "Nutritionist"
    pub hospital: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
