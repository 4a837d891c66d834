// models/src/medical/medication.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::RecordId;
use crate::time_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicationType {
    Chelation,
    Supplement,
    Other,
}

/// Catalog entry for a prescribed medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: RecordId,
    pub name: String,
    pub dosage: String, // e.g., "500mg"
    pub frequency: String, // e.g., "Once daily"
    #[serde(rename = "type")]
    pub medication_type: MedicationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Medication {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| date <= end)
    }
}

/// One scheduled dose of one medication for the day.
///
/// Whether the dose was taken is derived from `taken_at`, so the flag and the
/// time can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MedicationLogRecord", into = "MedicationLogRecord")]
pub struct MedicationLog {
    pub id: RecordId,
    pub medication_id: RecordId,
    pub scheduled_time: NaiveTime,
    taken_at: Option<NaiveTime>,
    pub skipped_reason: Option<String>,
}

impl MedicationLog {
    pub fn pending(id: RecordId, medication_id: RecordId, scheduled_time: NaiveTime) -> Self {
        MedicationLog {
            id,
            medication_id,
            scheduled_time,
            taken_at: None,
            skipped_reason: None,
        }
    }

    pub fn taken_at_time(mut self, at: NaiveTime) -> Self {
        self.taken_at = Some(time_format::truncate_to_minute(at));
        self
    }

    pub fn taken(&self) -> bool {
        self.taken_at.is_some()
    }

    pub fn taken_at(&self) -> Option<NaiveTime> {
        self.taken_at
    }

    /// `07:15 AM` style label for the dose time, when taken.
    pub fn taken_at_label(&self) -> Option<String> {
        self.taken_at.map(time_format::display_label)
    }

    /// Flips the dose between taken and not taken. Marking it taken stamps
    /// `now` to the minute; unmarking clears the stamp.
    pub fn toggle(&mut self, now: NaiveTime) {
        self.taken_at = match self.taken_at {
            Some(_) => None,
            None => Some(time_format::truncate_to_minute(now)),
        };
    }

    /// Not taken and the scheduled time already passed at `now`.
    pub fn is_missed_at(&self, now: NaiveTime) -> bool {
        !self.taken() && now > self.scheduled_time
    }
}

/// Wire shape of a medication log, with both the flag and the time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MedicationLogRecord {
    id: RecordId,
    medication_id: RecordId,
    taken: bool,
    #[serde(with = "time_format")]
    scheduled_time: NaiveTime,
    #[serde(default, with = "time_format::option", skip_serializing_if = "Option::is_none")]
    taken_at: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    skipped_reason: Option<String>,
}

impl TryFrom<MedicationLogRecord> for MedicationLog {
    type Error = ValidationError;

    fn try_from(record: MedicationLogRecord) -> ValidationResult<Self> {
        if record.taken != record.taken_at.is_some() {
            return Err(ValidationError::InconsistentDose(record.id.to_string()));
        }
        Ok(MedicationLog {
            id: record.id,
            medication_id: record.medication_id,
            scheduled_time: record.scheduled_time,
            taken_at: record.taken_at,
            skipped_reason: record.skipped_reason,
        })
    }
}

impl From<MedicationLog> for MedicationLogRecord {
    fn from(log: MedicationLog) -> Self {
        MedicationLogRecord {
            id: log.id,
            medication_id: log.medication_id,
            taken: log.taken_at.is_some(),
            scheduled_time: log.scheduled_time,
            taken_at: log.taken_at,
            skipped_reason: log.skipped_reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn vitamin_d() -> MedicationLog {
        MedicationLog::pending(
            RecordId::new("ml-3").unwrap(),
            RecordId::new("med-3").unwrap(),
            at(8, 0),
        )
    }

    #[test]
    fn toggle_sets_and_clears_time_together() {
        let mut log = vitamin_d();
        log.toggle(NaiveTime::from_hms_opt(9, 41, 27).unwrap());
        assert!(log.taken());
        assert_eq!(log.taken_at(), Some(at(9, 41)));
        assert_eq!(log.taken_at_label().as_deref(), Some("09:41 AM"));

        log.toggle(at(10, 0));
        assert!(!log.taken());
        assert_eq!(log.taken_at(), None);
    }

    #[test]
    fn missed_only_after_schedule_and_when_not_taken() {
        let log = vitamin_d();
        assert!(!log.is_missed_at(at(7, 59)));
        assert!(log.is_missed_at(at(8, 1)));
        assert!(!log.taken_at_time(at(8, 5)).is_missed_at(at(12, 0)));
    }

    #[test]
    fn wire_shape_carries_flag_and_time() {
        let log = vitamin_d().taken_at_time(at(8, 10));
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["taken"], true);
        assert_eq!(json["takenAt"], "08:10");
        assert_eq!(json["scheduledTime"], "08:00");

        let back: MedicationLog = serde_json::from_value(json).unwrap();
        assert_eq!(back, log);
    }

    #[test]
    fn disagreeing_flag_and_time_are_rejected() {
        let raw = r#"{"id":"ml-1","medicationId":"med-1","taken":true,"scheduledTime":"07:00"}"#;
        assert!(serde_json::from_str::<MedicationLog>(raw).is_err());
        let raw = r#"{"id":"ml-1","medicationId":"med-1","taken":false,"scheduledTime":"07:00","takenAt":"07:15"}"#;
        assert!(serde_json::from_str::<MedicationLog>(raw).is_err());
    }

    #[test]
    fn medication_active_window() {
        let med = Medication {
            id: RecordId::new("med-9").unwrap(),
            name: "Deferiprone".to_string(),
            dosage: "500mg".to_string(),
            frequency: "Twice daily".to_string(),
            medication_type: MedicationType::Chelation,
            instructions: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()),
        };
        assert!(med.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()));
        assert!(!med.is_active_on(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }
}
