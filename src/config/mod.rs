//! Configuration for the GraphQL client.
//!
//! [`ClientConfig`] names the endpoint to talk to and the file holding the
//! API key. It is built once through [`ClientConfigBuilder`] and never
//! changes afterwards.
//!
//! # Example
//!
//! ```rust
//! use hero_graphql::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .endpoint("https://login.hero-software.de/api/external/v7/graphql")
//!     .credential_path("hero_api_key.pem")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.credential_path().to_str(), Some("hero_api_key.pem"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// The HERO external API endpoint.
pub const HERO_ENDPOINT: &str = "https://login.hero-software.de/api/external/v7/graphql";

/// Configuration for a [`GraphqlClient`](crate::GraphqlClient).
///
/// The endpoint is taken as given; it is not parsed or validated.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    endpoint: String,
    credential_path: PathBuf,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the path of the credential file.
    #[must_use]
    pub fn credential_path(&self) -> &Path {
        &self.credential_path
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Both `endpoint` and `credential_path` are required.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<String>,
    credential_path: Option<PathBuf>,
}

impl ClientConfigBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GraphQL endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the path of the PEM-like credential file (required).
    #[must_use]
    pub fn credential_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credential_path = Some(path.into());
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `credential_path` are not set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let credential_path = self
            .credential_path
            .ok_or(ConfigError::MissingRequiredField {
                field: "credential_path",
            })?;

        Ok(ClientConfig {
            endpoint,
            credential_path,
        })
    }
}
