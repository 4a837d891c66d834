// lib/src/store/health_score.rs

//! The 0-100 display heuristic combining hemoglobin, ferritin and today's
//! medication adherence. Not a clinical instrument.

use serde::{Deserialize, Serialize};

use thalcare_models::{HealthMetric, MedicationLog, FERRITIN, HEMOGLOBIN};

pub const MAX_SCORE: i64 = 100;
pub const MISSED_DOSE_PENALTY: i64 = 5;

/// Penalty thresholds, checked in order; the first match applies.
const HEMOGLOBIN_BELOW: [(f64, i64); 2] = [(9.0, 20), (10.0, 10)];
const FERRITIN_ABOVE: [(f64, i64); 3] = [(2500.0, 25), (1500.0, 15), (1000.0, 5)];

fn metric_named<'a>(metrics: &'a [HealthMetric], name: &str) -> Option<&'a HealthMetric> {
    metrics.iter().find(|m| m.name == name)
}

fn hemoglobin_penalty(metrics: &[HealthMetric]) -> i64 {
    metric_named(metrics, HEMOGLOBIN)
        .and_then(|hb| {
            HEMOGLOBIN_BELOW
                .iter()
                .find(|(threshold, _)| hb.value < *threshold)
                .map(|(_, penalty)| *penalty)
        })
        .unwrap_or(0)
}

fn ferritin_penalty(metrics: &[HealthMetric]) -> i64 {
    metric_named(metrics, FERRITIN)
        .and_then(|ferritin| {
            FERRITIN_ABOVE
                .iter()
                .find(|(threshold, _)| ferritin.value > *threshold)
                .map(|(_, penalty)| *penalty)
        })
        .unwrap_or(0)
}

pub fn health_score(metrics: &[HealthMetric], doses: &[MedicationLog]) -> u8 {
    let missed = doses.iter().filter(|d| !d.taken()).count() as i64;
    let score = MAX_SCORE
        - hemoglobin_penalty(metrics)
        - ferritin_penalty(metrics)
        - missed * MISSED_DOSE_PENALTY;
    score.clamp(0, MAX_SCORE) as u8
}

/// Doses taken out of doses scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adherence {
    pub taken: usize,
    pub total: usize,
}

impl Adherence {
    pub fn of(doses: &[MedicationLog]) -> Self {
        Adherence {
            taken: doses.iter().filter(|d| d.taken()).count(),
            total: doses.len(),
        }
    }

    pub fn missed(&self) -> usize {
        self.total - self.taken
    }

    /// Rounded percentage; a day with nothing scheduled counts as 100.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.taken as f64 / self.total as f64) * 100.0).round() as u8
    }
}
