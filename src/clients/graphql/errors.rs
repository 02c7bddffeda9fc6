//! GraphQL-specific error types.
//!
//! Only transport- and HTTP-level failures are errors here. GraphQL-level
//! errors (the `errors` array of a 200 response) are part of the returned
//! body and are the caller's to interpret.

use crate::clients::{HttpResponseError, TransportError};
use thiserror::Error;

/// Error type for a single GraphQL exchange.
///
/// # Example
///
/// ```rust
/// use hero_graphql::clients::graphql::GraphqlError;
/// use hero_graphql::clients::HttpResponseError;
///
/// let error: GraphqlError = HttpResponseError {
///     code: 401,
///     body: "Unauthorized".to_string(),
/// }
/// .into();
/// assert!(error.to_string().contains("Unauthorized"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status other than 200.
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    /// A 200 response whose body was not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    /// The request could not be serialized.
    #[error("Request could not be serialized: {0}")]
    InvalidRequest(#[source] serde_json::Error),
}

impl GraphqlError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.code),
            Self::InvalidBody(_) => Some(200),
            Self::Transport(_) | Self::InvalidRequest(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_variant_wraps_response_error() {
        let error = GraphqlError::Http(HttpResponseError {
            code: 404,
            body: "Not Found".to_string(),
        });

        assert!(error.to_string().contains("Not Found"));
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_from_transport_error_conversion() {
        let error: GraphqlError = TransportError::Other("refused".to_string()).into();

        assert!(matches!(error, GraphqlError::Transport(_)));
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_body_reports_parse_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = GraphqlError::InvalidBody(parse_error);

        assert!(error.to_string().starts_with("Response body is not valid JSON"));
        assert_eq!(error.status(), Some(200));
    }
}
