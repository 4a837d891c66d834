// lib/src/store/dashboard.rs
use chrono::NaiveDate;
use serde::Serialize;

use thalcare_models::{EmergencyContact, VitalKind, VitalSign};

use crate::catalog::Catalog;
use super::countdown::CountdownUrgency;
use super::health_score::Adherence;
use super::patient_store::PatientStore;

/// Roll-up of the store for the home screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub patient_name: String,
    pub patient_age: u32,
    pub primary_contact: Option<EmergencyContact>,
    pub health_score: u8,
    pub days_until_transfusion: u32,
    pub countdown_urgency: CountdownUrgency,
    pub next_transfusion_date: Option<NaiveDate>,
    pub last_hemoglobin_gain: Option<f64>,
    pub adherence: Adherence,
    pub adherence_percent: u8,
    pub missed_doses: usize,
    pub missed_medications: Vec<String>,
    pub active_insights: usize,
    pub upcoming_appointments: usize,
    pub latest_vitals: Vec<VitalSign>,
}

impl PatientStore {
    /// Medication names are resolved through `catalog`; a dose whose
    /// medication is not listed shows its medication id instead.
    pub fn dashboard_summary(&self, catalog: &Catalog) -> DashboardSummary {
        let adherence = self.medication_adherence();
        let missed = self.missed_doses();
        let patient = self.patient();
        DashboardSummary {
            patient_name: patient.name.clone(),
            patient_age: patient.age_on(self.clock().local_today()),
            primary_contact: patient.primary_emergency_contact().cloned(),
            health_score: self.health_score(),
            days_until_transfusion: self.days_until_next_transfusion(),
            countdown_urgency: self.countdown_urgency(),
            next_transfusion_date: self.next_scheduled_transfusion().map(|t| t.date),
            last_hemoglobin_gain: self.latest_hemoglobin_gain(),
            adherence,
            adherence_percent: adherence.percent(),
            missed_doses: missed.len(),
            missed_medications: missed
                .iter()
                .map(|log| match catalog.medication_for(log) {
                    Some(medication) => medication.name.clone(),
                    None => log.medication_id.to_string(),
                })
                .collect(),
            active_insights: self.insights().len(),
            upcoming_appointments: self.upcoming_appointments().len(),
            latest_vitals: latest_per_kind(self.vital_signs()),
        }
    }
}

/// Newest reading of each kind, in `VitalKind::ALL` order.
fn latest_per_kind(vitals: &[VitalSign]) -> Vec<VitalSign> {
    VitalKind::ALL
        .iter()
        .filter_map(|kind| vitals.iter().find(|v| v.kind == *kind).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use thalcare_models::{RecordId, VitalStatus};

    use crate::clock::FixedClock;
    use crate::seed::{demo_catalog, demo_snapshot};
    use super::*;

    fn demo_store() -> PatientStore {
        let clock = FixedClock::from_rfc3339("2024-12-23T10:00:00+00:00").unwrap();
        PatientStore::new(demo_snapshot().unwrap(), Arc::new(clock))
    }

    #[test]
    fn summarises_demo_session() {
        let mut store = demo_store();
        store.add_vital_sign(VitalSign {
            id: RecordId::new("hr-2").unwrap(),
            kind: VitalKind::HeartRate,
            value: "96".to_string(),
            unit: "bpm".to_string(),
            status: VitalStatus::Warning,
            recorded_at: NaiveDate::from_ymd_opt(2024, 12, 23)
                .unwrap()
                .and_hms_opt(9, 55, 0)
                .unwrap(),
        });

        let summary = store.dashboard_summary(&demo_catalog().unwrap());
        assert_eq!(summary.patient_name, "Aarav Patel");
        assert_eq!(summary.patient_age, 12);
        assert_eq!(summary.primary_contact.map(|c| c.name), Some("Vikram Patel".to_string()));
        assert_eq!(summary.health_score, 70);
        assert_eq!(summary.days_until_transfusion, 5);
        assert_eq!(summary.countdown_urgency, CountdownUrgency::Soon);
        assert_eq!(summary.next_transfusion_date, NaiveDate::from_ymd_opt(2024, 12, 28));
        assert!(summary.last_hemoglobin_gain.is_some());
        assert_eq!(summary.adherence_percent, 67);
        assert_eq!(summary.missed_doses, 1);
        assert_eq!(summary.missed_medications, vec!["Vitamin D3".to_string()]);
        assert_eq!(summary.active_insights, 4);
        assert_eq!(summary.upcoming_appointments, 3);
        assert_eq!(summary.latest_vitals.len(), 4);
        assert_eq!(summary.latest_vitals[0].value, "96");
    }

    #[test]
    fn unlisted_medication_falls_back_to_its_id() {
        let summary = demo_store().dashboard_summary(&Catalog::default());
        assert_eq!(summary.missed_medications, vec!["med-3".to_string()]);
    }

    #[test]
    fn missed_medications_clear_once_taken() {
        let mut store = demo_store();
        store.toggle_medication_taken("ml-3");
        let summary = store.dashboard_summary(&demo_catalog().unwrap());
        assert_eq!(summary.missed_doses, 0);
        assert!(summary.missed_medications.is_empty());
    }
}
