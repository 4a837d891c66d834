// lib/src/store/countdown.rs
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use thalcare_models::Transfusion;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// First transfusion still scheduled, in list order.
pub fn next_scheduled(transfusions: &[Transfusion]) -> Option<&Transfusion> {
    transfusions.iter().find(|t| t.is_scheduled())
}

/// Whole days from `now` until midnight UTC of the first scheduled
/// transfusion's date, rounded up. Overdue or absent counts as 0.
pub fn days_until_next(transfusions: &[Transfusion], now: DateTime<Utc>) -> u32 {
    let Some(next) = next_scheduled(transfusions) else {
        return 0;
    };
    let target = next.date.and_time(NaiveTime::MIN).and_utc();
    let millis = (target - now).num_milliseconds();
    let days = millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) > 0);
    days.clamp(0, i64::from(u32::MAX)) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountdownUrgency {
    Urgent, // two days or fewer
    Soon,   // within five days
    OnTrack,
}

impl CountdownUrgency {
    pub fn for_days(days_left: u32) -> Self {
        match days_left {
            0..=2 => CountdownUrgency::Urgent,
            3..=5 => CountdownUrgency::Soon,
            _ => CountdownUrgency::OnTrack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use thalcare_models::{BloodBank, RecordId, TransfusionStatus};

    fn transfusion(id: &str, date: (i32, u32, u32), status: TransfusionStatus) -> Transfusion {
        Transfusion {
            id: RecordId::new(id).unwrap(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            blood_bank: BloodBank {
                id: RecordId::new("bb-1").unwrap(),
                name: "Red Cross Blood Bank".to_string(),
                address: "MG Road".to_string(),
                phone: "+91".to_string(),
                distance: None,
                available_units: None,
                is_verified: true,
            },
            units: 2,
            hemoglobin_before: 8.5,
            hemoglobin_after: None,
            notes: None,
            status,
            confirmed: Some(true),
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn partial_days_round_up() {
        let list = vec![transfusion("tf-1", (2024, 12, 28), TransfusionStatus::Scheduled)];
        assert_eq!(days_until_next(&list, at(2024, 12, 23, 10)), 5);
        assert_eq!(days_until_next(&list, at(2024, 12, 23, 0)), 5);
        assert_eq!(days_until_next(&list, at(2024, 12, 27, 23)), 1);
    }

    #[test]
    fn past_dates_floor_at_zero() {
        let list = vec![transfusion("tf-1", (2024, 12, 1), TransfusionStatus::Scheduled)];
        assert_eq!(days_until_next(&list, at(2024, 12, 23, 10)), 0);
    }

    #[test]
    fn nothing_scheduled_is_zero() {
        let list = vec![transfusion("tf-2", (2025, 1, 10), TransfusionStatus::Completed)];
        assert_eq!(days_until_next(&list, at(2024, 12, 23, 10)), 0);
    }

    #[test]
    fn first_scheduled_in_list_order_wins() {
        let list = vec![
            transfusion("tf-a", (2025, 1, 20), TransfusionStatus::Scheduled),
            transfusion("tf-b", (2024, 12, 25), TransfusionStatus::Scheduled),
        ];
        assert_eq!(next_scheduled(&list).map(|t| t.id.as_str()), Some("tf-a"));
        assert_eq!(days_until_next(&list, at(2025, 1, 10, 0)), 10);
    }

    #[test]
    fn urgency_bands() {
        assert_eq!(CountdownUrgency::for_days(0), CountdownUrgency::Urgent);
        assert_eq!(CountdownUrgency::for_days(2), CountdownUrgency::Urgent);
        assert_eq!(CountdownUrgency::for_days(5), CountdownUrgency::Soon);
        assert_eq!(CountdownUrgency::for_days(6), CountdownUrgency::OnTrack);
    }
}
