//! # Client configuration (`opd-nexus.toml`)
//!
//! Defines the TOML file the patient client reads at startup
//! (filename: [`ClientConfig::filename`] = `"opd-nexus.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//!
//! [auth]
//! google_client_id = "1234.apps.googleusercontent.com"
//!
//! [search]
//! debounce_ms = 300
//! min_query_len = 2
//!
//! [storage]
//! token_key = "appToken"
//! theme_key = "theme"
//! ```
//!
//! All structs derive `Default` with production defaults, so a missing or
//! empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `opd-nexus.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Federated login settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// OAuth client id for the Google sign-in widget. `None` hides it.
    #[serde(default)]
    pub google_client_id: Option<String>,
}

/// Search input behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiescence delay before a search fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    /// Shortest query the pharmacy and lab searches send.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_min_query_len() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
        }
    }
}

/// Names of the persisted slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_token_key() -> String {
    "appToken".to_string()
}

fn default_theme_key() -> String {
    "theme".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "opd-nexus.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.storage.token_key, "appToken");
        assert!(config.auth.google_client_id.is_none());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://patient.example.org"

            [search]
            debounce_ms = 150
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://patient.example.org");
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.storage.theme_key, "theme");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("https://api.example.org");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
