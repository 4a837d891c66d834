// models/src/medical/vital_sign.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    Temperature,
    OxygenSaturation,
}

impl VitalKind {
    pub const ALL: [VitalKind; 4] = [
        VitalKind::HeartRate,
        VitalKind::BloodPressure,
        VitalKind::Temperature,
        VitalKind::OxygenSaturation,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

/// A point-in-time reading. `value` is kept as entered (e.g. `"110/72"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSign {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: VitalKind,
    pub value: String,
    pub unit: String,
    pub status: VitalStatus,
    pub recorded_at: NaiveDateTime,
}
