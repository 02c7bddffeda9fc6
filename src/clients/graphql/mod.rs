//! GraphQL client for a single bearer-authenticated endpoint.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: sends queries and mutations
//! - [`GraphqlRequest`]: the `{"query", "variables"}` request body
//! - [`GraphqlError`]: transport- and HTTP-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use hero_graphql::{ClientConfig, GraphqlClient, HERO_ENDPOINT};
//! use serde_json::json;
//!
//! let config = ClientConfig::builder()
//!     .endpoint(HERO_ENDPOINT)
//!     .credential_path("hero_api_key.pem")
//!     .build()?;
//! let client = GraphqlClient::new(&config)?;
//!
//! let variables = json!({ "id": "42" }).as_object().cloned();
//! let response = client
//!     .execute_query("query P($id: ID!) { project(id: $id) { id } }", variables)
//!     .await;
//!
//! match response {
//!     Some(body) if body.get("errors").is_some() => println!("GraphQL errors: {}", body["errors"]),
//!     Some(body) => println!("Data: {}", body["data"]),
//!     None => println!("Request failed"),
//! }
//! ```
//!
//! # Response Handling
//!
//! A 200 response is returned as-is. GraphQL errors travel inside it in
//! the `errors` array and are not treated as failures; see
//! [`crate::response`] for helpers.

mod client;
mod errors;
mod request;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use request::GraphqlRequest;
