//! HTTP transport for GraphQL requests.
//!
//! The [`Transport`] trait is the seam between the GraphQL client and the
//! network. [`ReqwestTransport`] is the production implementation; tests
//! plug in stubs.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;

/// The status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response from a status code and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a single HTTP POST and returns whatever came back.
///
/// Implementations must not interpret the status code; any response that
/// was received is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` with the given headers.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        (**self).post(url, headers, body).await
    }
}

/// [`Transport`] backed by a `reqwest::Client`.
///
/// No request timeout is configured; the reqwest defaults apply, and
/// connection reuse is whatever reqwest's pool does.
///
/// # Thread Safety
///
/// `ReqwestTransport` is `Send + Sync` and cheap to clone.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    /// Creates a transport with a rustls-backed reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen if TLS initialization fails.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: String,
    ) -> Result<TransportResponse, TransportError> {
        let mut req_builder = self.client.post(url);
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_reqwest_transport_posts_headers_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("X-Test", "yes"))
            .and(body_string("{\"query\":\"{ ok }\"}"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\":{}}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new();
        let mut headers = HashMap::new();
        headers.insert("X-Test".to_string(), "yes".to_string());

        let response = transport
            .post(
                &format!("{}/graphql", mock_server.uri()),
                &headers,
                "{\"query\":\"{ ok }\"}".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(response, TransportResponse::new(200, "{\"data\":{}}"));
    }

    #[tokio::test]
    async fn test_reqwest_transport_returns_non_200_as_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&mock_server)
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .post(&mock_server.uri(), &HashMap::new(), String::new())
            .await
            .unwrap();

        assert_eq!(response.status, 503);
        assert_eq!(response.body, "down");
    }

    #[tokio::test]
    async fn test_reqwest_transport_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let uri = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let transport = ReqwestTransport::new();
        let result = transport.post(&uri, &HashMap::new(), String::new()).await;

        assert!(matches!(result, Err(TransportError::Network(_))));
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}
