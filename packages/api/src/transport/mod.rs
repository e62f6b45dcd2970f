//! # Authenticated transport
//!
//! [`ApiClient`] is the one place outbound requests are built. Every call
//! reads the latest token from the [`SessionStore`], merges headers, sends
//! through an [`HttpBackend`], and translates the response:
//!
//! | Status | Authenticated call ([`ApiClient::call`]) | Public call ([`ApiClient::public_get`]/[`ApiClient::public_post`]) |
//! |--------|------------------|-------------|
//! | 401 | clear session, fire the expiry hook, [`ClientError::SessionExpired`] | [`ClientError::Api`] with `detail` or the caller's fallback |
//! | other non-2xx | [`ClientError::Api`] with `detail` or [`GENERIC_API_ERROR`] | same, with the caller's fallback |
//! | 204 | `Ok(None)` | `Ok(None)` |
//! | 2xx | parsed JSON body | parsed JSON body |
//!
//! There is no retry, queueing or dedup: concurrent calls are independent.

mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::ReqwestBackend;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::SessionStore;
use crate::error::{ClientError, GENERIC_API_ERROR};

pub const STATUS_NO_CONTENT: u16 = 204;
pub const STATUS_UNAUTHORIZED: u16 = 401;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async trait for sending requests over the wire.
pub trait HttpBackend {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ClientError>>;
}

/// Caller-supplied parts of an authenticated request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn method(method: Method) -> Self {
        Self {
            method: Some(method),
            ..Self::default()
        }
    }

    /// Builder method to add a header. Later values for the same name win.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Builder method to attach a JSON body.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// Hook fired after the session is cleared by a 401.
pub type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// Client for the patient REST backend.
pub struct ApiClient<B = ReqwestBackend> {
    base_url: Arc<str>,
    session: SessionStore,
    backend: Arc<B>,
    on_session_expired: Option<ExpiryHook>,
}

/// The client the app uses.
pub type PatientClient = ApiClient<ReqwestBackend>;

impl<B> Clone for ApiClient<B> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            session: self.session.clone(),
            backend: self.backend.clone(),
            on_session_expired: self.on_session_expired.clone(),
        }
    }
}

impl<B> fmt::Debug for ApiClient<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

impl<B> PartialEq for ApiClient<B> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.backend, &other.backend) && self.base_url == other.base_url
    }
}

impl PatientClient {
    /// Client talking to `base_url` over reqwest.
    pub fn new(base_url: &str, session: SessionStore) -> Self {
        Self::with_backend(base_url, session, ReqwestBackend::new())
    }
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn with_backend(base_url: &str, session: SessionStore, backend: B) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
            backend: Arc::new(backend),
            on_session_expired: None,
        }
    }

    /// Builder method to set what happens after a forced logout.
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send an authenticated request. `Ok(None)` means 204.
    pub async fn call(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ClientError> {
        let token = self.session.token();
        let method = options.method.unwrap_or(Method::Get);

        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        merge_headers(&mut headers, options.headers);
        if let Some(token) = token {
            merge_headers(
                &mut headers,
                vec![("Authorization".to_string(), format!("Bearer {token}"))],
            );
        }

        let request = HttpRequest {
            method,
            url: self.url(endpoint),
            headers,
            body: options.body,
        };
        tracing::debug!("{} {}", method, endpoint);
        let response = self.backend.execute(request).await?;

        if response.status == STATUS_UNAUTHORIZED {
            tracing::warn!("{} {} returned 401, clearing session", method, endpoint);
            self.session.clear();
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
            return Err(ClientError::SessionExpired);
        }
        read_response(response, GENERIC_API_ERROR)
    }

    /// [`call`](Self::call) and deserialize the body.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ClientError> {
        match self.call(endpoint, options).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// [`call_as`](Self::call_as) for endpoints that always return a body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        self.call_as(endpoint, options)
            .await?
            .ok_or(ClientError::EmptyBody)
    }

    /// Unauthenticated GET. Non-success maps to `detail` or `fallback`.
    pub async fn public_get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fallback: &str,
    ) -> Result<T, ClientError> {
        self.public_request(Method::Get, endpoint, None, fallback)
            .await
    }

    /// Unauthenticated JSON POST. Non-success maps to `detail` or `fallback`.
    pub async fn public_post<T: DeserializeOwned, P: Serialize>(
        &self,
        endpoint: &str,
        payload: &P,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let body = serde_json::to_string(payload)?;
        self.public_request(Method::Post, endpoint, Some(body), fallback)
            .await
    }

    async fn public_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        fallback: &str,
    ) -> Result<T, ClientError> {
        let request = HttpRequest {
            method,
            url: self.url(endpoint),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body,
        };
        tracing::debug!("{} {} (public)", method, endpoint);
        let response = self.backend.execute(request).await?;
        let value = read_response(response, fallback)?.ok_or(ClientError::EmptyBody)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Replace or append headers, matching names case-insensitively.
fn merge_headers(headers: &mut Vec<(String, String)>, extra: Vec<(String, String)>) {
    for (name, value) in extra {
        match headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(existing) => existing.1 = value,
            None => headers.push((name, value)),
        }
    }
}

fn read_response(response: HttpResponse, fallback: &str) -> Result<Option<Value>, ClientError> {
    if !response.is_success() {
        return Err(ClientError::Api {
            status: response.status,
            message: error_detail(&response.body).unwrap_or_else(|| fallback.to_string()),
        });
    }
    if response.status == STATUS_NO_CONTENT {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&response.body)?))
}

/// The human-readable `detail` string of an error body, if there is one.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
