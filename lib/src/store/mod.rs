// lib/src/store/mod.rs

//! The patient record store: a single in-memory aggregate of one patient's
//! health state, its mutation entry points and the readings derived from it.

pub mod countdown;
pub mod dashboard;
pub mod health_score;
pub mod patient_store;
pub mod snapshot;

pub use countdown::CountdownUrgency;
pub use dashboard::DashboardSummary;
pub use health_score::Adherence;
pub use patient_store::PatientStore;
pub use snapshot::PatientSnapshot;
