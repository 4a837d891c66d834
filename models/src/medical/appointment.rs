// models/src/medical/appointment.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use crate::time_format;
use super::Doctor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    Checkup,
    Transfusion,
    Consultation,
    Followup,
    Telehealth,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Upcoming,
    Completed,
    Cancelled,
    Rescheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub doctor: Doctor,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Still expected to happen: scheduled or upcoming, dated `today` or later.
    pub fn is_pending_on(&self, today: NaiveDate) -> bool {
        matches!(self.status, AppointmentStatus::Scheduled | AppointmentStatus::Upcoming)
            && self.date >= today
    }
}
