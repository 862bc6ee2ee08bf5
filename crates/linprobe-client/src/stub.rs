//! A scripted, recording [`Transport`] for tests.
//!
//! Responses are returned in the order they were queued; every request is
//! recorded so tests can assert on the exact outbound sequence.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::{Value, json};

use crate::error::{ClientError, Result};
use crate::transport::{GraphQLRequest, RawResponse, Transport};

#[derive(Debug, Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Result<RawResponse>>>,
    requests: RefCell<Vec<GraphQLRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response whose `data` is the given value.
    pub fn with_data(self, data: Value) -> Self {
        self.with_body(200, json!({ "data": data }).to_string())
    }

    /// Queues a response carrying the given GraphQL error messages.
    pub fn with_errors(self, messages: &[&str]) -> Self {
        let errors: Vec<Value> = messages.iter().map(|m| json!({ "message": m })).collect();
        self.with_body(400, json!({ "data": null, "errors": errors }).to_string())
    }

    /// Queues a raw response body.
    pub fn with_body(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queues a transport-level failure.
    pub fn with_network_error(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ClientError::network(message)));
        self
    }

    /// All requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.borrow().clone()
    }

    /// Operation names of all requests sent so far.
    pub fn operations(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.operation_name().unwrap_or("<anonymous>").to_string())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Number of queued responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.responses.borrow().len()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: &GraphQLRequest) -> Result<RawResponse> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network("stub transport: no response queued")))
    }
}
