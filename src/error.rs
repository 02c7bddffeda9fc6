//! Error types for client configuration and credential loading.
//!
//! Request-time failures live in [`crate::clients`]; this module only holds
//! the errors that can stop a client from being built.
//!
//! # Example
//!
//! ```rust
//! use hero_graphql::{ClientConfig, ConfigError};
//!
//! let result = ClientConfig::builder().credential_path("key.pem").build();
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::MissingRequiredField { field: "endpoint" })
//! ));
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Why a credential could not be produced.
#[derive(Debug, Error)]
pub enum CredentialErrorKind {
    /// The credential file does not exist.
    #[error("file not found")]
    NotFound,
    /// The credential file exists but could not be read.
    #[error("an error occurred while reading the file: {0}")]
    Unreadable(#[source] io::Error),
    /// The file was read but contained no token lines.
    #[error("no token found between the delimiter lines")]
    Empty,
}

/// The API key could not be read from the credential file.
///
/// A client is never produced when this error is returned.
#[derive(Debug, Error)]
#[error("Invalid credential '{}'", .path.display())]
pub struct CredentialError {
    /// The credential file that was read.
    pub path: PathBuf,
    /// The reason loading failed.
    #[source]
    pub kind: CredentialErrorKind,
}

impl CredentialError {
    pub(crate) fn new(path: impl Into<PathBuf>, kind: CredentialErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Returns `true` if the credential file did not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    fn error_chain(error: &dyn std::error::Error) -> Vec<String> {
        let mut chain = vec![error.to_string()];
        let mut source = error.source();
        while let Some(e) = source {
            chain.push(e.to_string());
            source = e.source();
        }
        chain
    }

    #[test]
    fn test_credential_not_found_message_includes_path() {
        let error = CredentialError::new("/tmp/missing.pem", CredentialErrorKind::NotFound);

        assert_eq!(error.to_string(), "Invalid credential '/tmp/missing.pem'");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_error_chain_reports_reason_once() {
        let error = CredentialError::new("/tmp/missing.pem", CredentialErrorKind::NotFound);
        let chain = error_chain(&error);

        assert_eq!(
            chain,
            vec![
                "Invalid credential '/tmp/missing.pem'".to_string(),
                "file not found".to_string(),
            ]
        );
    }

    #[test]
    fn test_credential_unreadable_wraps_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = CredentialError::new("key.pem", CredentialErrorKind::Unreadable(io_error));

        assert!(!error.is_not_found());
        let chain = error_chain(&error);
        assert_eq!(chain[0], "Invalid credential 'key.pem'");
        assert!(chain[1].starts_with("an error occurred while reading the file"));
        assert_eq!(chain.last().map(String::as_str), Some("denied"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = CredentialError::new("key.pem", CredentialErrorKind::Empty);
        let _: &dyn std::error::Error = &error;
        let _: &dyn std::error::Error = &ConfigError::MissingRequiredField { field: "endpoint" };
    }
}
