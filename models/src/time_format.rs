// models/src/time_format.rs

//! `HH:MM` clock times, as the schedule and dose records carry them.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::{ValidationError, ValidationResult};

pub const HOUR_MINUTE: &str = "%H:%M";

/// Parses an `HH:MM` string into a time of day.
pub fn parse_hour_minute(value: &str) -> ValidationResult<NaiveTime> {
    NaiveTime::parse_from_str(value, HOUR_MINUTE)
        .map_err(|_| ValidationError::InvalidTimeFormat(value.to_string()))
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// 12-hour label with two-digit hour and minute, e.g. `07:15 AM`.
pub fn display_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(HOUR_MINUTE).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_hour_minute(&raw).map_err(serde::de::Error::custom)
}

/// The same format for optional fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => super::serialize(t, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_hour_minute(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_hour_minute() {
        let t = parse_hour_minute("07:15").unwrap();
        assert_eq!((t.hour(), t.minute()), (7, 15));
    }

    #[test]
    fn should_reject_malformed_time() {
        assert_eq!(
            parse_hour_minute("7 o'clock"),
            Err(ValidationError::InvalidTimeFormat("7 o'clock".to_string()))
        );
    }

    #[test]
    fn should_label_in_twelve_hour_form() {
        let t = NaiveTime::from_hms_opt(14, 5, 42).unwrap();
        assert_eq!(display_label(truncate_to_minute(t)), "02:05 PM");
    }
}
