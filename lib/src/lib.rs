// lib/src/lib.rs

pub mod catalog;
pub mod clock;
pub mod config;
pub mod errors;
pub mod seed;
pub mod store;

pub use thalcare_models as models;

pub use crate::catalog::Catalog;
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::AppConfig;
pub use crate::errors::{Result, StoreError};
pub use crate::store::{Adherence, CountdownUrgency, DashboardSummary, PatientSnapshot, PatientStore};
