// models/src/medical/patient.rs
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use super::{Doctor, EmergencyContact};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    #[serde(rename = "Beta Thalassemia Major")]
    BetaThalassemiaMajor,
    #[serde(rename = "Beta Thalassemia Intermedia")]
    BetaThalassemiaIntermedia,
    #[serde(rename = "Alpha Thalassemia")]
    AlphaThalassemia,
    #[serde(rename = "Thalassemia Minor")]
    ThalassemiaMinor,
}

/// The patient's identity and clinical profile. Only ever replaced whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub diagnosis: Diagnosis,
    pub diagnosis_date: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub primary_doctor: Doctor,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

impl Patient {
    /// Age in whole years on the given date.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        let born = self.date_of_birth;
        let mut years = date.year() - born.year();
        if (date.month(), date.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }

    pub fn primary_emergency_contact(&self) -> Option<&EmergencyContact> {
        self.emergency_contacts.iter().find(|c| c.is_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(contacts: &str) -> Patient {
        let raw = format!(
            r#"{{
                "id": "TH-2024-001",
                "name": "Aarav Patel",
                "email": "aarav@example.com",
                "phone": "+91 98765 00000",
                "bloodType": "B+",
                "diagnosis": "Beta Thalassemia Major",
                "diagnosisDate": "2013-03-01",
                "dateOfBirth": "2012-06-20",
                "primaryDoctor": {{
                    "id": "doc-1",
                    "name": "Dr. Priya Sharma",
                    "specialty": "Hematologist",
                    "hospital": "Apollo Hospital",
                    "phone": "+91 98765 43210"
                }},
                "emergencyContacts": {}
            }}"#,
            contacts
        );
        serde_json::from_str(&raw).unwrap()
    }

    fn on(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn should_count_whole_years_around_birthday() {
        let p = patient("[]");
        assert_eq!(p.age_on(on(2024, 6, 19)), 11);
        assert_eq!(p.age_on(on(2024, 6, 20)), 12);
        assert_eq!(p.age_on(on(2024, 12, 23)), 12);
    }

    #[test]
    fn should_report_zero_before_birth() {
        let p = patient("[]");
        assert_eq!(p.age_on(on(2012, 6, 19)), 0);
        assert_eq!(p.age_on(on(2001, 1, 1)), 0);
    }

    #[test]
    fn should_find_primary_emergency_contact() {
        let p = patient(
            r#"[
                {"id": "ec-2", "name": "Meera Patel", "relationship": "Mother", "phone": "2", "isPrimary": false},
                {"id": "ec-1", "name": "Vikram Patel", "relationship": "Father", "phone": "1", "isPrimary": true}
            ]"#,
        );
        assert_eq!(p.primary_emergency_contact().map(|c| c.name.as_str()), Some("Vikram Patel"));
        assert!(patient("[]").primary_emergency_contact().is_none());
        assert_eq!(p.blood_type, BloodType::BPositive);
    }
}
