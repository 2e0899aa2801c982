//! Recording transport for testing code built on [`crate::TwicasClient`].
//!
//! Responses are queued ahead of time and handed out in order; every request
//! the client sends is captured for later assertions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::TwicasError;
use crate::transport::{ApiRequest, RawResponse, Transport};

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<RawResponse>,
    requests: Vec<ApiRequest>,
}

/// Cloned handles share the same queue and request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request.
    pub fn push_response(&self, response: RawResponse) {
        self.lock().responses.push_back(response);
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(RawResponse::json(status, &body));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.lock().requests.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TwicasError> {
        let mut state = self.lock();
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            "mock transport received request"
        );
        state.requests.push(request);

        Ok(state.responses.pop_front().unwrap_or_else(|| {
            RawResponse::json(
                500,
                &json!({ "error": { "code": 500, "message": "no mock response queued" } }),
            )
        }))
    }
}
