// models/src/medical/emergency_contact.rs
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub id: RecordId,
    pub name: String,
    pub relationship: String, // e.g., "Father", "Primary Doctor"
    pub phone: String,
    pub is_primary: bool,
}
