use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::{HttpBackend, HttpRequest, HttpResponse};
use crate::error::ClientError;

/// Scripted backend: replays queued responses in order and records every request.
/// An exhausted script answers 204.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    script: Arc<Mutex<VecDeque<Result<HttpResponse, ClientError>>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(ClientError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.sent.lock().unwrap().last().cloned()
    }
}

impl HttpBackend for MockBackend {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.sent.lock().unwrap().push(request);
        self.script.lock().unwrap().pop_front().unwrap_or(Ok(HttpResponse {
            status: 204,
            body: String::new(),
        }))
    }
}
