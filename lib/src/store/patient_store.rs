// lib/src/store/patient_store.rs
use std::sync::Arc;

use log::debug;

use thalcare_models::{
    AIInsight, Appointment, BloodRequest, HealthMetric, MedicationLog, Patient, RecordId,
    SymptomLog, Transfusion, TransfusionStatus, VitalSign,
};

use crate::clock::Clock;
use crate::config::VITALS_HISTORY_LIMIT;
use super::countdown::{self, CountdownUrgency};
use super::health_score::{self, Adherence};
use super::snapshot::PatientSnapshot;

/// One patient's health record for the length of a session.
///
/// Built once from a seed snapshot and handed to whatever needs it by
/// reference. Mutations that name an id not present in the store change
/// nothing and report nothing.
#[derive(Debug)]
pub struct PatientStore {
    patient: Patient,
    health_metrics: Vec<HealthMetric>,
    vital_signs: Vec<VitalSign>,
    transfusions: Vec<Transfusion>,
    blood_request: Option<BloodRequest>,
    symptom_logs: Vec<SymptomLog>,
    medication_logs: Vec<MedicationLog>,
    appointments: Vec<Appointment>,
    insights: Vec<AIInsight>,
    clock: Arc<dyn Clock>,
}

impl PatientStore {
    pub fn new(snapshot: PatientSnapshot, clock: Arc<dyn Clock>) -> Self {
        debug!(
            "Seeding store for patient {} ({} metrics, {} vitals, {} doses)",
            snapshot.patient.id,
            snapshot.health_metrics.len(),
            snapshot.vital_signs.len(),
            snapshot.medication_logs.len()
        );
        PatientStore {
            patient: snapshot.patient,
            health_metrics: snapshot.health_metrics,
            vital_signs: snapshot.vital_signs,
            transfusions: snapshot.transfusions,
            blood_request: snapshot.blood_request,
            symptom_logs: snapshot.symptom_logs,
            medication_logs: snapshot.medication_logs,
            appointments: snapshot.appointments,
            insights: snapshot.ai_insights,
            clock,
        }
    }

    /// The store's current contents as a snapshot.
    pub fn snapshot(&self) -> PatientSnapshot {
        PatientSnapshot {
            patient: self.patient.clone(),
            health_metrics: self.health_metrics.clone(),
            vital_signs: self.vital_signs.clone(),
            transfusions: self.transfusions.clone(),
            blood_request: self.blood_request.clone(),
            symptom_logs: self.symptom_logs.clone(),
            medication_logs: self.medication_logs.clone(),
            appointments: self.appointments.clone(),
            ai_insights: self.insights.clone(),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    // --- Reads ---

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn health_metrics(&self) -> &[HealthMetric] {
        &self.health_metrics
    }

    pub fn health_metric(&self, id: &str) -> Option<&HealthMetric> {
        self.health_metrics.iter().find(|m| m.id.as_str() == id)
    }

    /// Most recent first.
    pub fn vital_signs(&self) -> &[VitalSign] {
        &self.vital_signs
    }

    pub fn transfusions(&self) -> &[Transfusion] {
        &self.transfusions
    }

    pub fn blood_request(&self) -> Option<&BloodRequest> {
        self.blood_request.as_ref()
    }

    /// Oldest first.
    pub fn symptom_logs(&self) -> &[SymptomLog] {
        &self.symptom_logs
    }

    pub fn medication_logs(&self) -> &[MedicationLog] {
        &self.medication_logs
    }

    pub fn medication_log(&self, id: &str) -> Option<&MedicationLog> {
        self.medication_logs.iter().find(|l| l.id.as_str() == id)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn insights(&self) -> &[AIInsight] {
        &self.insights
    }

    // --- Mutations ---

    pub fn replace_patient(&mut self, patient: Patient) {
        debug!("Replacing patient profile {} with {}", self.patient.id, patient.id);
        self.patient = patient;
    }

    /// Sets a lab value, reclassifies it against its normal range and stamps
    /// today's date. The trend is left as seeded.
    pub fn update_health_metric(&mut self, metric_id: &str, value: f64) {
        let today = self.clock.today();
        if let Some(metric) = self.health_metrics.iter_mut().find(|m| m.id.as_str() == metric_id) {
            metric.record_value(value, today);
            debug!("Metric {} set to {} ({:?})", metric.id, metric.value, metric.status);
        }
    }

    /// Prepends a reading, keeping only the most recent ones.
    pub fn add_vital_sign(&mut self, vital: VitalSign) {
        debug!("Recording {:?} vital {}", vital.kind, vital.id);
        self.vital_signs.insert(0, vital);
        self.vital_signs.truncate(VITALS_HISTORY_LIMIT);
    }

    /// Appends the log as given and returns its id.
    pub fn add_symptom_log(&mut self, log: SymptomLog) -> RecordId {
        let id = log.id.clone();
        debug!("Logged symptom {} as {} ({:?})", log.symptom_id, id, log.severity);
        self.symptom_logs.push(log);
        id
    }

    pub fn remove_symptom_log(&mut self, id: &str) {
        let before = self.symptom_logs.len();
        self.symptom_logs.retain(|log| log.id.as_str() != id);
        if self.symptom_logs.len() != before {
            debug!("Removed symptom log {}", id);
        }
    }

    /// Marks a dose taken at the current local time, or unmarks it.
    pub fn toggle_medication_taken(&mut self, log_id: &str) {
        let now = self.clock.local_time();
        if let Some(log) = self.medication_logs.iter_mut().find(|l| l.id.as_str() == log_id) {
            log.toggle(now);
            debug!("Dose {} taken: {} ({:?})", log.id, log.taken(), log.taken_at());
        }
    }

    pub fn dismiss_insight(&mut self, id: &str) {
        let before = self.insights.len();
        self.insights.retain(|insight| insight.id.as_str() != id);
        if self.insights.len() != before {
            debug!("Dismissed insight {}", id);
        }
    }

    // --- Derived ---

    pub fn next_scheduled_transfusion(&self) -> Option<&Transfusion> {
        countdown::next_scheduled(&self.transfusions)
    }

    pub fn days_until_next_transfusion(&self) -> u32 {
        countdown::days_until_next(&self.transfusions, self.clock.now())
    }

    pub fn countdown_urgency(&self) -> CountdownUrgency {
        CountdownUrgency::for_days(self.days_until_next_transfusion())
    }

    /// Hemoglobin gained at the most recent completed transfusion that has a
    /// post-transfusion reading.
    pub fn latest_hemoglobin_gain(&self) -> Option<f64> {
        self.transfusions
            .iter()
            .filter(|t| t.status == TransfusionStatus::Completed)
            .filter_map(|t| t.hemoglobin_gain().map(|gain| (t.date, gain)))
            .max_by_key(|(date, _)| *date)
            .map(|(_, gain)| gain)
    }

    pub fn health_score(&self) -> u8 {
        health_score::health_score(&self.health_metrics, &self.medication_logs)
    }

    pub fn medication_adherence(&self) -> Adherence {
        Adherence::of(&self.medication_logs)
    }

    /// Doses not yet taken whose scheduled time has passed today.
    pub fn missed_doses(&self) -> Vec<&MedicationLog> {
        let now = self.clock.local_time();
        self.medication_logs.iter().filter(|l| l.is_missed_at(now)).collect()
    }

    /// Appointments still to come, in list order.
    pub fn upcoming_appointments(&self) -> Vec<&Appointment> {
        let today = self.clock.local_today();
        self.appointments.iter().filter(|a| a.is_pending_on(today)).collect()
    }
}
