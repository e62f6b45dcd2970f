//! # Appointments
//!
//! Booking requests, the appointment records behind "My Appointments", and
//! the rules that decide where a record is listed and which actions it
//! offers:
//!
//! - **Upcoming**: slot strictly in the future and still scheduled.
//! - **Past**: slot now or earlier, whatever the status.
//! - **Cancel** is offered for records that are not past and not cancelled.
//! - **Review** is offered for completed records.
//!
//! A cancelled future appointment is in neither list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::parse_timestamp;

/// Body of `POST /patient/book-appointment`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentRequest {
    pub doctor_id: String,
    /// The slot exactly as the doctor listing returned it.
    pub slot: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    #[serde(default)]
    pub patient_id: Option<String>,
    #[serde(default)]
    pub patient_name: Option<String>,
    pub slot: String,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub doctor_name: Option<String>,
}

impl Appointment {
    pub fn slot_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.slot)
    }

    /// An unparseable slot counts as past so it never offers cancellation.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.slot_time().map_or(true, |slot| slot <= now)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        !self.is_past(now) && self.status == AppointmentStatus::Scheduled
    }

    pub fn can_cancel(&self, now: DateTime<Utc>) -> bool {
        !self.is_past(now) && self.status != AppointmentStatus::Cancelled
    }

    pub fn can_review(&self) -> bool {
        self.status == AppointmentStatus::Completed
    }
}

/// Split into `(upcoming, past)`, preserving backend order.
pub fn partition_appointments(
    appointments: &[Appointment],
    now: DateTime<Utc>,
) -> (Vec<Appointment>, Vec<Appointment>) {
    let upcoming = appointments
        .iter()
        .filter(|a| a.is_upcoming(now))
        .cloned()
        .collect();
    let past = appointments
        .iter()
        .filter(|a| a.is_past(now))
        .cloned()
        .collect();
    (upcoming, past)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn appt(id: &str, slot: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: id.to_string(),
            doctor_id: "d1".to_string(),
            patient_id: None,
            patient_name: None,
            slot: slot.to_string(),
            status,
            doctor_name: Some("Dr. Rao".to_string()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_partition() {
        let list = vec![
            appt("future-scheduled", "2024-06-02T09:00:00Z", AppointmentStatus::Scheduled),
            appt("future-cancelled", "2024-06-02T10:00:00Z", AppointmentStatus::Cancelled),
            appt("past-completed", "2024-05-01T09:00:00Z", AppointmentStatus::Completed),
            appt("exactly-now", "2024-06-01T12:00:00Z", AppointmentStatus::Scheduled),
        ];
        let (upcoming, past) = partition_appointments(&list, now());
        let ids = |v: &[Appointment]| v.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&upcoming), vec!["future-scheduled"]);
        assert_eq!(ids(&past), vec!["past-completed", "exactly-now"]);
    }

    #[test]
    fn test_actions() {
        let future = appt("a", "2024-06-02T09:00:00", AppointmentStatus::Scheduled);
        assert!(future.can_cancel(now()));
        assert!(!future.can_review());

        let cancelled = appt("b", "2024-06-02T09:00:00", AppointmentStatus::Cancelled);
        assert!(!cancelled.can_cancel(now()));

        let done = appt("c", "2024-05-02T09:00:00", AppointmentStatus::Completed);
        assert!(!done.can_cancel(now()));
        assert!(done.can_review());

        let garbled = appt("d", "soon", AppointmentStatus::Scheduled);
        assert!(garbled.is_past(now()));
        assert!(!garbled.can_cancel(now()));
    }

    #[test]
    fn test_unknown_status() {
        let a: Appointment = serde_json::from_value(serde_json::json!({
            "id": "a",
            "doctor_id": "d",
            "patient_id": "p",
            "patient_name": "Alice",
            "slot": "2024-06-02T09:00:00",
            "status": "no_show",
        }))
        .unwrap();
        assert_eq!(a.status, AppointmentStatus::Unknown);
        assert!(a.doctor_name.is_none());
    }
}
