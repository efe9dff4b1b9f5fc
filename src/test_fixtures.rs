//! Shared test fixtures.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Mock HTTP client that returns a configurable sequence of responses
/// and records every request it receives.
#[derive(Debug)]
pub struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    pub fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Answers every request with the given status and an empty body.
    pub fn with_status(status: u16) -> Self {
        Self::new(vec![Ok(response(status, b""))])
    }

    pub fn success() -> Self {
        Self::with_status(200)
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(vec![Err(error)])
    }

    pub fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.captured_requests()
            .pop()
            .expect("no request was captured")
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);

        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            // The last configured outcome repeats.
            match responses.first() {
                Some(Ok(resp)) => Ok(resp.clone()),
                Some(Err(HttpError::Timeout)) => Err(HttpError::Timeout),
                Some(Err(HttpError::InvalidUrl(msg))) => Err(HttpError::InvalidUrl(msg.clone())),
                Some(Err(HttpError::Connection(e))) => {
                    Err(HttpError::Connection(e.to_string().into()))
                }
                None => panic!("MockClient has no configured responses"),
            }
        }
    }
}

/// Builds a response with no headers.
pub fn response(status: u16, body: &[u8]) -> HttpResponse {
    HttpResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        http::HeaderMap::new(),
        body.to_vec(),
    )
}

impl HttpClient for Arc<MockClient> {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req).await
    }
}
