// models/src/medical/health_metric.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::RecordId;

pub const HEMOGLOBIN: &str = "Hemoglobin";
pub const FERRITIN: &str = "Ferritin";

/// Inclusive reference interval for a lab value. `min <= max` holds for
/// every instance, including deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawRange> for NormalRange {
    type Error = ValidationError;

    fn try_from(raw: RawRange) -> ValidationResult<Self> {
        NormalRange::new(raw.min, raw.max)
    }
}

impl NormalRange {
    pub fn new(min: f64, max: f64) -> ValidationResult<Self> {
        if min > max {
            return Err(ValidationError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Normal,
    Low,
    High,
    Critical, // seeded only, never produced by `classify`
}

impl MetricStatus {
    /// Range comparison used whenever a metric value changes.
    pub fn classify(value: f64, range: &NormalRange) -> Self {
        if value < range.min {
            MetricStatus::Low
        } else if value > range.max {
            MetricStatus::High
        } else {
            MetricStatus::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: RecordId,
    pub name: String, // e.g., "Hemoglobin", "Ferritin"
    pub value: f64,
    pub unit: String,
    pub normal_range: NormalRange,
    pub status: MetricStatus,
    pub trend: TrendDirection, // informational, not derived from history
    pub last_updated: NaiveDate,
}

impl HealthMetric {
    /// Sets a new value and the status that goes with it. Trend is untouched.
    pub fn record_value(&mut self, value: f64, on: NaiveDate) {
        self.value = value;
        self.status = MetricStatus::classify(value, &self.normal_range);
        self.last_updated = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hemoglobin() -> HealthMetric {
        HealthMetric {
            id: RecordId::new("hb-1").unwrap(),
            name: HEMOGLOBIN.to_string(),
            value: 9.2,
            unit: "g/dL".to_string(),
            normal_range: NormalRange::new(9.0, 11.0).unwrap(),
            status: MetricStatus::Normal,
            trend: TrendDirection::Stable,
            last_updated: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        }
    }

    #[test]
    fn classify_follows_range_bounds() {
        let range = NormalRange::new(9.0, 11.0).unwrap();
        assert_eq!(MetricStatus::classify(8.5, &range), MetricStatus::Low);
        assert_eq!(MetricStatus::classify(9.0, &range), MetricStatus::Normal);
        assert_eq!(MetricStatus::classify(10.0, &range), MetricStatus::Normal);
        assert_eq!(MetricStatus::classify(11.0, &range), MetricStatus::Normal);
        assert_eq!(MetricStatus::classify(12.0, &range), MetricStatus::High);
    }

    #[test]
    fn record_value_keeps_trend() {
        let mut metric = hemoglobin();
        let today = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        metric.record_value(12.0, today);
        assert_eq!(metric.status, MetricStatus::High);
        assert_eq!(metric.trend, TrendDirection::Stable);
        assert_eq!(metric.last_updated, today);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            NormalRange::new(11.0, 9.0),
            Err(ValidationError::InvalidRange { min: 11.0, max: 9.0 })
        );
    }

    #[test]
    fn inverted_range_is_rejected_when_deserializing() {
        assert!(serde_json::from_str::<NormalRange>(r#"{"min":11.0,"max":9.0}"#).is_err());
        let range: NormalRange = serde_json::from_str(r#"{"min":9.0,"max":11.0}"#).unwrap();
        assert_eq!(range, NormalRange::new(9.0, 11.0).unwrap());
    }

    #[test]
    fn metric_uses_camel_case_fields() {
        let json = serde_json::to_value(hemoglobin()).unwrap();
        assert_eq!(json["normalRange"]["min"], 9.0);
        assert_eq!(json["lastUpdated"], "2024-12-20");
        assert_eq!(json["status"], "normal");
    }
}
