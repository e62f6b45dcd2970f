//! Wire models for the patient API, plus the small helpers the screens
//! share for reading them.

mod appointment;
mod auth;
mod catalog;
mod doctor;
mod record;
mod review;
mod user;

pub use appointment::{partition_appointments, Appointment, AppointmentRequest, AppointmentStatus};
pub use auth::{GoogleTokenRequest, LoginRequest, RegisterRequest, TokenResponse};
pub use catalog::{Article, Lab, Pharmacy};
pub use doctor::{filled_stars, Doctor};
pub use record::{PrescribedMedicine, PrescriptionRecord};
pub use review::{validate_rating, Review, ReviewRequest, MAX_RATING};
pub use user::{Identity, PatientProfile, PatientProfileUpdate, SEX_OPTIONS};

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default (used for nullable lists).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a backend timestamp in the viewer's local zone.
///
/// See [`parse_timestamp_in`].
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(value, &Local).map(|t| t.with_timezone(&Utc))
}

/// Parse a backend timestamp, reading offset-free values as wall-clock
/// time in `zone`.
///
/// Accepts RFC 3339 (offset kept), naive `YYYY-MM-DDTHH:MM:SS[.f]`, and
/// bare dates (midnight). A wall-clock time that falls in a DST gap is
/// moved forward an hour.
pub fn parse_timestamp_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(zone));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    zone.from_local_datetime(&naive)
        .earliest()
        .or_else(|| zone.from_local_datetime(&(naive + Duration::hours(1))).earliest())
}

/// Treat blank form input as an absent value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
