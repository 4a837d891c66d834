// models/src/medical/blood_bank.rs
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodBank {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>, // display label, e.g. "2.5 km"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_units: Option<u32>,
    pub is_verified: bool,
}
