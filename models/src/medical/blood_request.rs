// models/src/medical/blood_request.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use super::BloodType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestUrgency {
    Routine,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Matched,
    Fulfilled,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    pub id: RecordId,
    pub blood_type: BloodType,
    pub units_needed: u32,
    pub urgency: RequestUrgency,
    pub status: RequestStatus,
    pub request_date: NaiveDate,
    pub required_by: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_donors: Option<u32>,
}
