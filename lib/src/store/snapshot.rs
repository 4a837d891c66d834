// lib/src/store/snapshot.rs
use serde::{Deserialize, Serialize};

use thalcare_models::{
    AIInsight, Appointment, BloodRequest, HealthMetric, MedicationLog, Patient, SymptomLog,
    Transfusion, VitalSign,
};

/// Everything a store is seeded with, and what it can hand back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSnapshot {
    pub patient: Patient,
    #[serde(default)]
    pub health_metrics: Vec<HealthMetric>,
    #[serde(default)]
    pub vital_signs: Vec<VitalSign>, // most recent first
    #[serde(default)]
    pub transfusions: Vec<Transfusion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_request: Option<BloodRequest>,
    #[serde(default)]
    pub symptom_logs: Vec<SymptomLog>,
    #[serde(default)]
    pub medication_logs: Vec<MedicationLog>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub ai_insights: Vec<AIInsight>,
}
