//! The GraphQL request helper.
//!
//! [`LinearClient::request`] sends one `{query, variables}` body through a
//! [`Transport`] and turns the response into either the `data` value or a
//! [`ClientError`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::transport::{GraphQLRequest, Transport};

/// Linear API client over an arbitrary transport.
pub struct LinearClient<T> {
    transport: T,
}

impl<T: Transport> LinearClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends a query and returns the response's `data` field.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if no response body was received.
    /// - [`ClientError::Parse`] if the body is not JSON.
    /// - [`ClientError::GraphQL`] if the body carries a non-empty `errors`
    ///   list; the first message is surfaced, the rest are logged.
    pub fn request(&self, query: &str, variables: Value) -> Result<Value> {
        let request = GraphQLRequest::new(query, variables);
        let operation = request.operation_name().unwrap_or("<anonymous>");
        debug!(operation, "sending GraphQL request");

        let response = self.transport.send(&request)?;
        debug!(operation, status = response.status, "GraphQL response");

        parse_response(&response.body)
    }

    /// Sends a query and decodes `data` into `D`.
    pub(crate) fn request_as<D: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> Result<D> {
        let data = self.request(query, variables)?;
        serde_json::from_value(data).map_err(|source| ClientError::Decode { operation, source })
    }
}

/// Interprets a GraphQL response body.
fn parse_response(body: &str) -> Result<Value> {
    let mut parsed: Value =
        serde_json::from_str(body).map_err(|source| ClientError::Parse { source })?;

    if let Some(errors) = parsed.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            for (index, error) in errors.iter().enumerate().skip(1) {
                warn!(index, error = %error, "additional GraphQL error");
            }
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error")
                .to_string();
            let all = Value::Array(errors.clone());
            debug!(errors = %all, "GraphQL errors");
            return Err(ClientError::GraphQL {
                message,
                count: errors.len(),
            });
        }
    }

    Ok(parsed
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null))
}
