// models/src/lib.rs

//! Typed records for a single patient's thalassemia care session: profile,
//! lab metrics, vitals, transfusions, logs, appointments and advisory notices.

pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod time_format;

pub use errors::{ValidationError, ValidationResult};
pub use identifiers::RecordId;
pub use medical::*;
