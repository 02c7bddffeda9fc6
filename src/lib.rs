//! # HERO GraphQL client
//!
//! A small client for the HERO external GraphQL API. It reads an API key
//! from a PEM-like file, sends it as a bearer token, and POSTs queries and
//! mutations to a single endpoint.
//!
//! ## Overview
//!
//! - [`ClientConfig`] and [`ClientConfigBuilder`]: endpoint and credential path
//! - [`Credential`]: the bearer token, loaded once at construction
//! - [`GraphqlClient`]: `execute_query` / `execute_mutation`
//! - [`diagnostics`]: injectable sink for status and failure messages
//! - [`response`]: helpers for reading `data` and `errors` from a response
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hero_graphql::{ClientConfig, GraphqlClient, HERO_ENDPOINT};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(HERO_ENDPOINT)
//!     .credential_path("hero_api_key.pem")
//!     .build()?;
//!
//! // Fails if the key file is missing or empty
//! let client = GraphqlClient::new(&config)?;
//!
//! match client.execute_query("query { project_matches { id } }", None).await {
//!     Some(body) => println!("{body}"),
//!     None => eprintln!("request failed"),
//! }
//! ```
//!
//! ## Failure Model
//!
//! Construction returns [`CredentialError`] when no token can be read.
//! After that, `execute_query` and `execute_mutation` never fail loudly:
//! a non-200 status or a transport error is reported to the diagnostic
//! sink and yields `None`. Use [`GraphqlClient::execute`] for the typed
//! [`GraphqlError`] instead.

pub mod clients;
pub mod config;
pub mod credential;
pub mod diagnostics;
pub mod error;
pub mod response;

pub use config::{ClientConfig, ClientConfigBuilder, HERO_ENDPOINT};
pub use credential::Credential;
pub use diagnostics::{Diagnostic, DiagnosticSink, OperationKind, TracingSink};
pub use error::{ConfigError, CredentialError, CredentialErrorKind};

pub use clients::{
    GraphqlClient, GraphqlError, GraphqlRequest, HttpResponseError, ReqwestTransport, Transport,
    TransportError, TransportResponse,
};
