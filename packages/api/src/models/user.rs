//! # Patient identity and profile
//!
//! [`Identity`] is the read-only projection of the bearer token's claims
//! that the session store publishes. [`PatientProfile`] is the full record
//! behind `/patient/profile`; [`PatientProfileUpdate`] is the editable
//! subset the profile form sends back.

use serde::{Deserialize, Serialize};

use super::non_empty;

/// Who the current token says the user is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    /// The `sub` claim.
    pub email: String,
    pub user_id: Option<String>,
    pub full_name: Option<String>,
}

impl Identity {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }

    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        let name = self.display_name();
        name.split_whitespace().next().unwrap_or(name)
    }
}

/// Choices offered for [`PatientProfile::sex`].
pub const SEX_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Patient profile as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields the patient may change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PatientProfileUpdate {
    pub full_name: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<String>,
}

impl PatientProfileUpdate {
    /// Normalise form input: trim the name, send blanks as `null`.
    pub fn normalized(self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            phone_number: non_empty(self.phone_number),
            date_of_birth: non_empty(self.date_of_birth),
            sex: non_empty(self.sex),
        }
    }
}

/// Form state for `profile`. An unset sex takes the first choice, which is
/// what the form shows and what a save sends.
impl From<&PatientProfile> for PatientProfileUpdate {
    fn from(profile: &PatientProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            phone_number: profile.phone_number.clone(),
            date_of_birth: profile.date_of_birth.clone(),
            sex: non_empty(profile.sex.clone()).or_else(|| Some(SEX_OPTIONS[0].to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(full_name: Option<&str>) -> Identity {
        Identity {
            email: "alice@example.com".to_string(),
            user_id: None,
            full_name: full_name.map(str::to_string),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(identity(Some("Alice Smith")).display_name(), "Alice Smith");
        assert_eq!(identity(None).display_name(), "alice@example.com");
        assert_eq!(identity(Some("  ")).display_name(), "alice@example.com");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(identity(Some("Alice Smith")).first_name(), "Alice");
        assert_eq!(identity(None).first_name(), "alice@example.com");
    }

    #[test]
    fn test_profile_update_normalization() {
        let profile: PatientProfile = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "full_name": "  Alice Smith ",
            "email": "alice@example.com",
            "phone_number": "",
            "date_of_birth": null,
            "sex": "Female",
            "role": "patient",
            "created_at": "2024-01-01T00:00:00"
        }))
        .unwrap();

        let update = PatientProfileUpdate::from(&profile).normalized();
        assert_eq!(update.full_name, "Alice Smith");
        assert_eq!(update.phone_number, None);
        assert_eq!(update.date_of_birth, None);
        assert_eq!(update.sex.as_deref(), Some("Female"));

        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("email").is_none());
        assert!(body["phone_number"].is_null());
    }

    #[test]
    fn test_unset_sex_defaults_to_first_choice() {
        let profile: PatientProfile = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "full_name": "Bob",
            "email": "bob@example.com",
            "sex": null
        }))
        .unwrap();

        let update = PatientProfileUpdate::from(&profile);
        assert_eq!(update.sex.as_deref(), Some("Male"));
        let body = serde_json::to_value(update.normalized()).unwrap();
        assert_eq!(body["sex"], "Male");
    }
}
