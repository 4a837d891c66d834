// models/src/medical/transfusion.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use crate::time_format;
use super::BloodBank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransfusionStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfusion {
    pub id: RecordId,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    pub blood_bank: BloodBank,
    pub units: u32,
    pub hemoglobin_before: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hemoglobin_after: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: TransfusionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<bool>,
}

impl Transfusion {
    pub fn is_scheduled(&self) -> bool {
        self.status == TransfusionStatus::Scheduled
    }

    /// Hemoglobin gained, once the post-transfusion reading exists.
    pub fn hemoglobin_gain(&self) -> Option<f64> {
        self.hemoglobin_after.map(|after| after - self.hemoglobin_before)
    }
}
