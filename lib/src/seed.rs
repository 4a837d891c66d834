// lib/src/seed.rs

//! Seed data: the bundled demo session and loading snapshots from disk.

use std::fs;
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::errors::{Result, StoreError};
use crate::store::PatientSnapshot;

const DEMO_SNAPSHOT_YAML: &str = include_str!("../fixtures/demo_snapshot.yaml");
const DEMO_CATALOG_YAML: &str = include_str!("../fixtures/demo_catalog.yaml");

/// The demo patient session the app ships with.
pub fn demo_snapshot() -> Result<PatientSnapshot> {
    Ok(serde_yaml::from_str(DEMO_SNAPSHOT_YAML)?)
}

pub fn demo_catalog() -> Result<Catalog> {
    Ok(serde_yaml::from_str(DEMO_CATALOG_YAML)?)
}

/// Reads a snapshot from a `.yaml`, `.yml` or `.json` file.
pub fn load_snapshot(path: &Path) -> Result<PatientSnapshot> {
    let snapshot: PatientSnapshot = load_document(path)?;
    info!(
        "Loaded snapshot for patient {} from {:?}",
        snapshot.patient.id, path
    );
    Ok(snapshot)
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    load_document(path)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = DocumentFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| StoreError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(StoreError::ConfigurationError(format!(
                "Unsupported seed file {}: expected .yaml, .yml or .json",
                path.display()
            ))),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T> {
        match self {
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}
