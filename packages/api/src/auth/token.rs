//! Bearer token codec.
//!
//! Reads the claims segment of a JWT without checking its signature. The
//! backend verifies every request; the client only needs the identity to
//! decide what to render.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Identity;

/// Why a token could not be turned into an [`Identity`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has no claims segment")]
    Malformed,
    #[error("claims segment is not base64url: {0}")]
    Base64(String),
    #[error("claims segment is not JSON: {0}")]
    Json(String),
    #[error("token has no subject claim")]
    MissingSubject,
    #[error("token expired at {0}")]
    Expired(i64),
}

/// Claims this client reads from the token payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    /// Subject, the account email.
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Expiration (Unix timestamp).
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Parse the claims segment of `token`.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// Decode `token` into an identity as of `now` (Unix seconds).
pub fn identity_at(token: &str, now: i64) -> Result<Identity, TokenError> {
    let claims = decode_claims(token)?;
    if let Some(exp) = claims.exp {
        if exp <= now {
            return Err(TokenError::Expired(exp));
        }
    }
    let email = claims
        .sub
        .filter(|s| !s.is_empty())
        .ok_or(TokenError::MissingSubject)?;
    Ok(Identity {
        email,
        user_id: claims.user_id,
        full_name: claims.full_name,
    })
}

/// Decode `token` into an identity, treating every failure as "no session".
pub fn decode_identity(token: &str) -> Option<Identity> {
    match identity_at(token, chrono::Utc::now().timestamp()) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::debug!("Ignoring undecodable token: {}", e);
            None
        }
    }
}

/// Build an unsigned token carrying `claims`. Test-only helper.
#[cfg(test)]
pub(crate) fn unsigned_token(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_identity_claims() {
        let token = unsigned_token(json!({
            "sub": "alice@example.com",
            "user_id": "7c1d",
            "full_name": "Alice",
        }));
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.email, "alice@example.com");
        assert_eq!(identity.user_id.as_deref(), Some("7c1d"));
        assert_eq!(identity.full_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_signature_is_not_checked() {
        let token = unsigned_token(json!({ "sub": "bob@example.com" }));
        let forged = format!("{}tampered", token);
        assert!(decode_identity(&forged).is_some());
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE
            .encode(json!({ "sub": "a@b.c" }).to_string());
        let token = format!("h.{payload}.s");
        assert!(decode_identity(&token).is_some());
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(decode_claims("not-a-jwt"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("a..c"), Err(TokenError::Malformed));
        assert!(matches!(decode_claims("a.!!!.c"), Err(TokenError::Base64(_))));
        let not_json = URL_SAFE_NO_PAD.encode("hello");
        assert!(matches!(
            decode_claims(&format!("a.{not_json}.c")),
            Err(TokenError::Json(_))
        ));
        assert!(decode_identity("").is_none());
    }

    #[test]
    fn test_missing_subject_is_no_identity() {
        let token = unsigned_token(json!({ "full_name": "Nobody" }));
        assert_eq!(identity_at(&token, 0), Err(TokenError::MissingSubject));
        assert!(decode_identity(&token).is_none());
    }

    #[test]
    fn test_expiry() {
        let token = unsigned_token(json!({ "sub": "a@b.c", "exp": 1_000 }));
        assert!(identity_at(&token, 999).is_ok());
        assert_eq!(identity_at(&token, 1_000), Err(TokenError::Expired(1_000)));
        assert!(decode_identity(&token).is_none());
    }
}
