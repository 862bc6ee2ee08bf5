//! The transport seam between the GraphQL client and the network.
//!
//! [`LinearClient`](crate::LinearClient) depends on the [`Transport`] trait
//! rather than on ureq directly so that tests can substitute a recording stub.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use ureq::Agent;

use crate::error::{ClientError, Result};

/// A single GraphQL request body: `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }

    /// Returns the operation name declared in the document, e.g. `GetTeam`
    /// for `query GetTeam($id: String!) { ... }`.
    pub fn operation_name(&self) -> Option<&str> {
        let mut words = self.query.split_whitespace();
        words.find(|w| matches!(*w, "query" | "mutation"))?;
        let name = words.next()?;
        let end = name
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(name.len());
        let name = &name[..end];
        (!name.is_empty()).then_some(name)
    }

    /// Returns a string variable by name.
    pub fn variable_str(&self, name: &str) -> Option<&str> {
        self.variables.get(name).and_then(Value::as_str)
    }
}

/// A complete HTTP response: status plus the fully buffered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one GraphQL request and returns the whole response body.
///
/// Implementations must not interpret the body; HTTP error statuses are
/// still returned as responses because the API puts GraphQL errors in them.
pub trait Transport {
    fn send(&self, request: &GraphQLRequest) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &GraphQLRequest) -> Result<RawResponse> {
        (**self).send(request)
    }
}

/// Blocking HTTPS transport backed by a ureq agent.
///
/// No timeouts are configured; a hung request blocks the caller.
pub struct HttpTransport {
    agent: Agent,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: Agent::new_with_config(config),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &GraphQLRequest) -> Result<RawResponse> {
        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("Authorization", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .send_json(request)
            .map_err(ClientError::network)?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(ClientError::network)?;
        debug!(status, bytes = body.len(), "response body received");

        Ok(RawResponse { status, body })
    }
}
