// models/src/medical/mod.rs

pub mod appointment;
pub mod blood_bank;
pub mod blood_request;
pub mod doctor;
pub mod emergency_contact;
pub mod health_metric;
pub mod insight;
pub mod login;
pub mod medication;
pub mod patient;
pub mod symptom;
pub mod transfusion;
pub mod vital_sign;

pub use appointment::{Appointment, AppointmentStatus, AppointmentType};
pub use blood_bank::BloodBank;
pub use blood_request::{BloodRequest, RequestStatus, RequestUrgency};
pub use doctor::Doctor;
pub use emergency_contact::EmergencyContact;
pub use health_metric::{HealthMetric, MetricStatus, NormalRange, TrendDirection, FERRITIN, HEMOGLOBIN};
pub use insight::{AIInsight, InsightPriority, InsightType};
pub use login::Login;
pub use medication::{Medication, MedicationLog, MedicationType};
pub use patient::{BloodType, Diagnosis, Patient};
pub use symptom::{Severity, Symptom, SymptomCategory, SymptomLog};
pub use transfusion::{Transfusion, TransfusionStatus};
pub use vital_sign::{VitalKind, VitalSign, VitalStatus};
