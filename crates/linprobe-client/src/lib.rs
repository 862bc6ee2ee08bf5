//! Minimal, blocking GraphQL client for the Linear API.
//!
//! Provides [`LinearClient`], the [`Transport`] seam with an HTTPS
//! implementation ([`HttpTransport`]), the typed operations the probe runs,
//! and the [`attempt`] fallback combinator.

pub mod client;
pub mod error;
pub mod fallback;
pub mod operations;
pub mod queries;
#[cfg(any(test, feature = "test-support"))]
pub mod stub;
pub mod transport;

// Re-exports for convenience.
pub use client::LinearClient;
pub use error::ClientError;
pub use fallback::attempt;
pub use transport::{GraphQLRequest, HttpTransport, RawResponse, Transport};
