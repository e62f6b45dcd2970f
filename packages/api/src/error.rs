//! Errors surfaced by the API client.

use thiserror::Error;

/// Message used when a failed response carries no readable `detail`.
pub const GENERIC_API_ERROR: &str = "An API error occurred.";

/// Failure of a backend call.
///
/// `Display` is what views render inline, so [`ClientError::Api`] prints the
/// backend's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The backend answered 401 to an authenticated call. The session has
    /// already been cleared when this is returned.
    #[error("Session expired.")]
    SessionExpired,

    /// Any other non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body could not be decoded.
    #[error("Unexpected response from server: {0}")]
    InvalidBody(String),

    /// A 204 from an endpoint that must return a body.
    #[error("The server returned no content.")]
    EmptyBody,
}

impl ClientError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
    }

    /// HTTP status of an [`ClientError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidBody(e.to_string())
    }
}
