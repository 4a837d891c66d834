// cli/src/handlers.rs
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};

use thalcare_lib::catalog::Catalog;
use thalcare_lib::clock::{Clock, FixedClock, SystemClock};
use thalcare_lib::config::AppConfig;
use thalcare_lib::seed;
use thalcare_lib::store::{DashboardSummary, PatientSnapshot, PatientStore};
use thalcare_models::Login;
use thalcare_security::AuthGate;

use crate::commands::SeedFormat;

/// Seeds a store from `seed_override`, else the configured seed path, else
/// the demo fixtures.
pub fn build_store(config: &AppConfig, seed_override: Option<&Path>, at: Option<&str>) -> Result<PatientStore> {
    let snapshot = match seed_override.or(config.store.seed_path.as_deref()) {
        Some(path) => seed::load_snapshot(path)
            .with_context(|| format!("Failed to load seed snapshot {}", path.display()))?,
        None => {
            debug!("No seed path configured; using demo fixtures");
            seed::demo_snapshot().context("Failed to parse bundled demo snapshot")?
        }
    };
    let clock: Arc<dyn Clock> = match at {
        Some(instant) => Arc::new(FixedClock::from_rfc3339(instant)?),
        None => Arc::new(SystemClock),
    };
    Ok(PatientStore::new(snapshot, clock))
}

pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => seed::load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => seed::demo_catalog().context("Failed to parse bundled demo catalog"),
    }
}

pub fn handle_dashboard(
    config: &AppConfig,
    seed_override: Option<&Path>,
    catalog_path: Option<&Path>,
    at: Option<&str>,
) -> Result<DashboardSummary> {
    let store = build_store(config, seed_override, at)?;
    let catalog = load_catalog(catalog_path)?;
    let summary = store.dashboard_summary(&catalog);
    info!(
        "Dashboard for {}: score {}, transfusion in {} days",
        summary.patient_name, summary.health_score, summary.days_until_transfusion
    );
    Ok(summary)
}

pub fn handle_login(config: &AppConfig, login: &Login) -> bool {
    let mut gate = AuthGate::new(config.auth.clone());
    gate.login_with(login)
}

pub fn render_seed(format: SeedFormat) -> Result<String> {
    let snapshot: PatientSnapshot = seed::demo_snapshot()?;
    let rendered = match format {
        SeedFormat::Yaml => serde_yaml::to_string(&snapshot)?,
        SeedFormat::Json => serde_json::to_string_pretty(&snapshot)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn dashboard_at_fixed_instant() {
        let summary = handle_dashboard(&AppConfig::default(), None, None, Some("2024-12-23T10:00:00Z")).unwrap();
        assert_eq!(summary.days_until_transfusion, 5);
        assert_eq!(summary.health_score, 70);
        assert_eq!(summary.missed_medications, vec!["Vitamin D3".to_string()]);
    }

    #[test]
    fn dashboard_names_doses_from_catalog_file() {
        let mut catalog = seed::demo_catalog().unwrap();
        for medication in &mut catalog.medications {
            medication.name = medication.name.to_uppercase();
        }
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{}", serde_json::to_string(&catalog).unwrap()).unwrap();

        let summary =
            handle_dashboard(&AppConfig::default(), None, Some(file.path()), Some("2024-12-23T10:00:00Z")).unwrap();
        assert_eq!(summary.missed_medications, vec!["VITAMIN D3".to_string()]);
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let err = load_catalog(Some(Path::new("/nonexistent/catalog.yaml"))).unwrap_err();
        assert!(err.to_string().contains("catalog"));
    }

    #[test]
    fn bad_instant_is_reported() {
        assert!(handle_dashboard(&AppConfig::default(), None, None, Some("next tuesday")).is_err());
    }

    #[test]
    fn missing_seed_file_is_reported() {
        let err = build_store(&AppConfig::default(), Some(Path::new("/nonexistent/seed.yaml")), None).unwrap_err();
        assert!(err.to_string().contains("seed snapshot"));
    }

    #[test]
    fn login_uses_configured_credentials() {
        let config = AppConfig::default();
        assert!(handle_login(&config, &Login::new("demo", "Demo123")));
        assert!(!handle_login(&config, &Login::new("demo", "nope")));
    }

    #[test]
    fn rendered_seed_parses_back() {
        let json = render_seed(SeedFormat::Json).unwrap();
        let snapshot: PatientSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.patient.id, "TH-2024-001");
        let yaml = render_seed(SeedFormat::Yaml).unwrap();
        let snapshot: PatientSnapshot = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(snapshot.medication_logs.len(), 3);
    }
}
