//! Authentication: token decoding, the session store, and the `/auth` calls
//! that establish a session.

mod session;
pub mod token;

pub use session::{Session, SessionStore, SESSION_TOKEN_KEY};
pub use token::{decode_identity, Claims, TokenError};

use crate::error::ClientError;
use crate::models::{GoogleTokenRequest, LoginRequest, RegisterRequest, TokenResponse};
use crate::transport::{ApiClient, HttpBackend};

impl<B: HttpBackend> ApiClient<B> {
    /// Exchange email and password for a token and establish the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self
            .public_post("/auth/login", &request, "Login failed.")
            .await?;
        tracing::info!("Logged in as {}", email);
        Ok(self.session().establish(response.access_token))
    }

    /// Create an account and establish the session it returns.
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ClientError> {
        let request = RegisterRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: TokenResponse = self
            .public_post("/auth/register", &request, "Registration failed.")
            .await?;
        tracing::info!("Registered {}", email);
        Ok(self.session().establish(response.access_token))
    }

    /// Forward a Google ID token credential to the backend.
    pub async fn google_login(&self, credential: &str) -> Result<Session, ClientError> {
        let request = GoogleTokenRequest {
            id_token: credential.to_string(),
        };
        let response: TokenResponse = self
            .public_post("/auth/google", &request, "Google login failed.")
            .await?;
        tracing::info!("Logged in with Google");
        Ok(self.session().establish(response.access_token))
    }

    /// Forget the session locally. The backend keeps no session state.
    pub fn logout(&self) {
        tracing::info!("Logged out");
        self.session().clear();
    }
}
