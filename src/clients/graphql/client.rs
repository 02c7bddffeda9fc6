//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type for sending queries and
//! mutations to a single GraphQL endpoint with a bearer token.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::graphql::{GraphqlError, GraphqlRequest};
use crate::clients::{HttpResponseError, ReqwestTransport, Transport};
use crate::config::ClientConfig;
use crate::credential::load_credential;
use crate::diagnostics::{Diagnostic, DiagnosticSink, OperationKind, TracingSink};
use crate::error::CredentialError;

/// GraphQL API client authenticated with a bearer token.
///
/// The token and the three request headers are fixed at construction; the
/// client holds no other state, so calls are independent of one another.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use hero_graphql::{ClientConfig, GraphqlClient, HERO_ENDPOINT};
///
/// let config = ClientConfig::builder()
///     .endpoint(HERO_ENDPOINT)
///     .credential_path("hero_api_key.pem")
///     .build()?;
///
/// let client = GraphqlClient::new(&config)?;
///
/// if let Some(body) = client.execute_query("query { project_matches { id } }", None).await {
///     println!("{body}");
/// }
/// ```
pub struct GraphqlClient {
    endpoint: String,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<_> = self.default_headers.keys().collect();
        header_names.sort();
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint)
            .field("headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl GraphqlClient {
    /// Creates a client that sends requests with reqwest and logs through
    /// `tracing`.
    ///
    /// The credential file is read once here. No network activity happens.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] if the credential file is missing,
    /// unreadable, or holds no token. No client is produced in that case.
    pub fn new(config: &ClientConfig) -> Result<Self, CredentialError> {
        Self::with_parts(config, ReqwestTransport::new(), TracingSink)
    }

    /// Creates a client with an explicit transport and diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] under the same conditions as [`new`](Self::new).
    pub fn with_parts(
        config: &ClientConfig,
        transport: impl Transport + 'static,
        diagnostics: impl DiagnosticSink + 'static,
    ) -> Result<Self, CredentialError> {
        let credential = load_credential(config.credential_path(), &diagnostics)?;

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), credential.bearer_header());

        Ok(Self {
            endpoint: config.endpoint().to_string(),
            default_headers,
            transport: Arc::new(transport),
            diagnostics: Arc::new(diagnostics),
        })
    }

    /// Returns the endpoint every request is sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a GraphQL query.
    ///
    /// Returns the parsed response body on HTTP 200, unexamined: a body with
    /// an `errors` array is still `Some`. Every failure is reported to the
    /// diagnostic sink and returned as `None`.
    pub async fn execute_query(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
    ) -> Option<Value> {
        let request = GraphqlRequest::new(query, variables);
        self.execute(OperationKind::Query, &request).await.ok()
    }

    /// Executes a GraphQL mutation.
    ///
    /// Behaves exactly like [`execute_query`](Self::execute_query); only the
    /// diagnostic label differs.
    pub async fn execute_mutation(
        &self,
        mutation: &str,
        variables: Option<Map<String, Value>>,
    ) -> Option<Value> {
        let request = GraphqlRequest::new(mutation, variables);
        self.execute(OperationKind::Mutation, &request).await.ok()
    }

    /// Sends a single request and returns the parsed body or a typed error.
    ///
    /// Diagnostics are emitted for the response status and for every
    /// failure before it is returned.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Transport`] if no response was received
    /// - [`GraphqlError::Http`] if the status was not 200
    /// - [`GraphqlError::InvalidBody`] if a 200 body was not JSON
    pub async fn execute(
        &self,
        operation: OperationKind,
        request: &GraphqlRequest,
    ) -> Result<Value, GraphqlError> {
        let body = serde_json::to_string(request).map_err(GraphqlError::InvalidRequest)?;

        let response = match self
            .transport
            .post(&self.endpoint, &self.default_headers, body)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                self.diagnostics.emit(&Diagnostic::TransportFailed {
                    operation,
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        self.diagnostics.emit(&Diagnostic::ResponseStatus {
            operation,
            status: response.status,
        });

        if response.status != 200 {
            self.diagnostics.emit(&Diagnostic::RequestFailed {
                operation,
                status: response.status,
                body: response.body.clone(),
            });
            return Err(HttpResponseError {
                code: response.status,
                body: response.body,
            }
            .into());
        }

        serde_json::from_str(&response.body).map_err(|e| {
            self.diagnostics.emit(&Diagnostic::TransportFailed {
                operation,
                message: format!("invalid JSON response body: {e}"),
            });
            GraphqlError::InvalidBody(e)
        })
    }
}
