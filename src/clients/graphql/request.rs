//! The JSON body sent for every GraphQL operation.

use serde::Serialize;
use serde_json::{Map, Value};

/// A GraphQL document plus optional variables.
///
/// Serializes to `{"query": ..., "variables": {...}}`. An empty variables
/// map is dropped at construction, so `variables` is only ever sent when
/// it has entries.
///
/// # Example
///
/// ```rust
/// use hero_graphql::GraphqlRequest;
/// use serde_json::{json, Map};
///
/// let request = GraphqlRequest::new("query { ok }", Some(Map::new()));
/// assert_eq!(serde_json::to_value(&request).unwrap(), json!({ "query": "query { ok }" }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Map<String, Value>>,
}

impl GraphqlRequest {
    /// Creates a request for `document`.
    #[must_use]
    pub fn new(document: impl Into<String>, variables: Option<Map<String, Value>>) -> Self {
        Self {
            query: document.into(),
            variables: variables.filter(|vars| !vars.is_empty()),
        }
    }

    /// Returns the GraphQL document.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.query
    }

    /// Returns the variables, if any will be sent.
    #[must_use]
    pub const fn variables(&self) -> Option<&Map<String, Value>> {
        self.variables.as_ref()
    }
}
