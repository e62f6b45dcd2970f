use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescribedMedicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

impl PrescribedMedicine {
    /// `"Name (dosage, frequency, duration)"`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {}, {})",
            self.name, self.dosage, self.frequency, self.duration
        )
    }
}

/// A read-only consultation record from `/patient/my-records`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescriptionRecord {
    pub id: String,
    pub appointment_id: String,
    pub created_at: String,
    #[serde(default)]
    pub complaint: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medicines: Vec<PrescribedMedicine>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Vec<String>,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<String>,
    #[serde(default)]
    pub vitals: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_nulls() {
        let record: PrescriptionRecord = serde_json::from_value(serde_json::json!({
            "id": "r1",
            "appointment_id": "a1",
            "created_at": "2024-05-01T10:00:00",
            "diagnosis": "Migraine",
            "medicines": [
                { "name": "Paracetamol", "dosage": "500mg", "frequency": "TDS", "duration": "5 days" }
            ],
            "tests": null,
        }))
        .unwrap();
        assert!(record.complaint.is_none());
        assert!(record.tests.is_empty());
        assert_eq!(
            record.medicines[0].summary(),
            "Paracetamol (500mg, TDS, 5 days)"
        );
    }
}
