//! Scripted transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use url::Url;

use super::{ApiClient, ApiError, ApiRequest, ApiResponse, Transport};

/// Base URL every test client is rooted at.
pub(crate) const BASE_URL: &str = "http://backend.test/api";

/// Transport that replays queued responses and records every request.
///
/// When the queue runs dry, requests fail with a network error.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body.
    pub(crate) fn respond_json(&self, status: u16, body: &serde_json::Value) {
        self.push(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a response with a raw text body.
    pub(crate) fn respond_text(&self, status: u16, body: &str) {
        self.push(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a transport failure.
    pub(crate) fn fail_network(&self, message: &str) {
        self.push(Err(ApiError::Network(message.to_string())));
    }

    /// Every request sent so far, in order.
    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Number of requests sent so far.
    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// The most recent request.
    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .expect("requests lock")
            .last()
            .cloned()
            .expect("at least one request")
    }

    fn push(&self, response: Result<ApiResponse, ApiError>) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(response);
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().expect("requests lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

/// A mock transport and a client that sends through it.
pub(crate) fn client() -> (Arc<MockTransport>, ApiClient<Arc<MockTransport>>) {
    let mock = Arc::new(MockTransport::new());
    let base = Url::parse(BASE_URL).expect("valid test URL");
    let api = ApiClient::new(Arc::clone(&mock), &base);
    (mock, api)
}
