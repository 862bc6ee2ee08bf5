//! Client error types.

/// Errors that can occur while talking to the Linear API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response body (DNS, TLS, connection reset...).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not valid JSON.
    #[error("failed to parse response body: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-empty `errors` list.
    #[error("{message}")]
    GraphQL {
        /// Message of the first reported error.
        message: String,
        /// Total number of errors in the response.
        count: usize,
    },

    /// `data` did not have the shape the operation expects.
    #[error("unexpected {operation} response: {source}")]
    Decode {
        /// Name of the GraphQL operation being decoded.
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A field the operation needs was `null` or absent.
    #[error("response is missing {field}")]
    MissingData {
        /// The GraphQL field that was expected.
        field: &'static str,
    },
}

/// Convenience alias used throughout the client crate.
pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    // -- Constructors --------------------------------------------------------

    /// Creates a [`ClientError::Network`] from any displayable transport error.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Creates a [`ClientError::GraphQL`] carrying a single message.
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::GraphQL {
            message: message.into(),
            count: 1,
        }
    }

    // -- Predicates ----------------------------------------------------------

    /// Returns `true` if the API itself rejected the request.
    pub fn is_graphql(&self) -> bool {
        matches!(self, Self::GraphQL { .. })
    }

    /// Returns `true` if the request did not get a response at all.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
