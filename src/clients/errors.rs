//! HTTP-level error types.
//!
//! - [`TransportError`]: the request never produced a response
//! - [`HttpResponseError`]: a response arrived with a status other than 200
//!
//! Both are folded into [`GraphqlError`](crate::clients::graphql::GraphqlError)
//! by the GraphQL client.

use thiserror::Error;

/// Error returned when a request fails before a response is received.
///
/// Covers DNS failures, refused connections, TLS errors and malformed
/// responses.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error raised by the reqwest transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error raised by a custom [`Transport`](crate::clients::Transport).
    #[error("Transport error: {0}")]
    Other(String),
}

/// Error returned when the server answers with a non-200 status.
///
/// # Example
///
/// ```rust
/// use hero_graphql::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     body: r#"{"error":"Unauthorized"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 401: {"error":"Unauthorized"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}
