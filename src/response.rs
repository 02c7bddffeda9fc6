//! Read-only helpers for inspecting a forwarded GraphQL body.
//!
//! The client never looks inside a 200 response. These helpers are for
//! callers that want to tell `data` from `errors` without indexing JSON by
//! hand.
//!
//! ```rust
//! use hero_graphql::response;
//! use serde_json::json;
//!
//! let body = json!({ "errors": [{ "message": "bad field" }] });
//! assert!(response::has_errors(&body));
//! assert!(response::data(&body).is_none());
//! ```

use serde_json::Value;

/// Returns the `data` member, if present and not `null`.
#[must_use]
pub fn data(body: &Value) -> Option<&Value> {
    body.get("data").filter(|data| !data.is_null())
}

/// Returns a named field under `data`, if present and not `null`.
#[must_use]
pub fn data_field<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    data(body)?.get(field).filter(|value| !value.is_null())
}

/// Returns the `errors` array, if present.
#[must_use]
pub fn errors(body: &Value) -> Option<&[Value]> {
    body.get("errors")?.as_array().map(Vec::as_slice)
}

/// Returns `true` if the body carries an `errors` member.
#[must_use]
pub fn has_errors(body: &Value) -> bool {
    body.get("errors").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_field_reads_nested_value() {
        let body = json!({ "data": { "project_matches": [{ "id": 1 }] } });

        assert_eq!(
            data_field(&body, "project_matches"),
            Some(&json!([{ "id": 1 }]))
        );
        assert!(data_field(&body, "create_contact").is_none());
        assert!(!has_errors(&body));
    }

    #[test]
    fn test_null_data_is_absent() {
        let body = json!({ "data": null, "errors": [{ "message": "denied" }] });

        assert!(data(&body).is_none());
        assert_eq!(errors(&body).map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_errors_that_are_not_an_array() {
        let body = json!({ "errors": "oops" });

        assert!(has_errors(&body));
        assert!(errors(&body).is_none());
    }
}
