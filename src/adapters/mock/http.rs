//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that returns scripted responses
//! or errors and records every request it receives.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{FilePart, Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for JSON POST requests)
    pub body: Option<String>,
    /// File part (for multipart POST requests)
    pub file: Option<FilePart>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail without a response
    Error(HttpError),
}

impl MockResponse {
    /// Shorthand for a JSON response with the given status.
    pub fn json(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }
}

type RouteKey = (String, String);

/// Mock HTTP client for testing.
///
/// Responses are keyed by method and exact URL. Several responses can be
/// queued for the same route; they are served in order and the last one
/// keeps being served once the queue is down to it.
///
/// # Example
///
/// ```ignore
/// use murmur::adapters::mock::{MockHttpClient, MockResponse};
/// use murmur::traits::{Headers, HttpClient};
///
/// let client = MockHttpClient::new();
/// client.set_response("GET", "http://api/posts", MockResponse::json(200, json!([])));
///
/// let response = client.get("http://api/posts", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<RouteKey, VecDeque<MockResponse>>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every queued response for a route with a single one.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(
            (method.to_string(), url.to_string()),
            VecDeque::from(vec![response]),
        );
    }

    /// Queue an additional response for a route.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Set a default response for routes without a configured one.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests recorded so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Recorded requests matching a method and URL.
    pub fn requests_to(&self, method: &str, url: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url == url)
            .cloned()
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, request: RecordedRequest) {
        self.requests.lock().unwrap().push(request);
    }

    fn next_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();
        if let Some(queue) = responses.get_mut(&(method.to_string(), url.to_string())) {
            let next = if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            };
            if next.is_some() {
                return next;
            }
        }

        self.default_response.lock().unwrap().clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.next_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: None,
            file: None,
        });
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: Some(body.to_string()),
            file: None,
        });
        self.respond("POST", url)
    }

    async fn post_multipart(
        &self,
        url: &str,
        part: FilePart,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request(RecordedRequest {
            method: "POST".to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: None,
            file: Some(part),
        });
        self.respond("POST", url)
    }
}
