//! HTTP client types for GraphQL communication.
//!
//! # Overview
//!
//! - [`Transport`]: the seam that sends a single HTTP POST
//! - [`ReqwestTransport`]: the reqwest-backed transport
//! - [`TransportResponse`]: status code and raw body
//! - [`TransportError`], [`HttpResponseError`]: request failures
//! - [`graphql::GraphqlClient`]: the GraphQL client built on top
//!
//! Requests are attempted exactly once. There is no retry and no request
//! timeout beyond the transport's defaults.

mod errors;
pub mod graphql;
mod transport;

pub use errors::{HttpResponseError, TransportError};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

pub use graphql::{GraphqlClient, GraphqlError, GraphqlRequest};
