//! Request and response bodies of the `/auth` routes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Credential produced by the Google sign-in widget, forwarded verbatim.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleTokenRequest {
    #[serde(rename = "idToken")]
    pub id_token: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
