//! Bearer credential loading.
//!
//! The API key is stored in a PEM-like text file: the token body sits
//! between `-----BEGIN ...-----` and `-----END ...-----` lines and may be
//! wrapped over several lines. Loading strips the delimiters and blank lines
//! and joins what is left.
//!
//! # Example
//!
//! ```rust
//! use hero_graphql::credential::extract_token;
//!
//! let pem = "-----BEGIN KEY-----\n abc \ndef\n-----END KEY-----\n";
//! assert_eq!(extract_token(pem), "abcdef");
//! ```

use std::fmt;
use std::io;
use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{CredentialError, CredentialErrorKind};

const DELIMITER_PREFIX: &str = "-----";

/// An opaque, non-empty bearer token.
///
/// The `Debug` implementation masks the value so tokens never end up in
/// logs.
///
/// ```rust
/// use hero_graphql::Credential;
///
/// let credential = Credential::new("secret-token").unwrap();
/// assert_eq!(format!("{credential:?}"), "Credential(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, rejecting empty strings.
    ///
    /// Returns `None` if the token is empty.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            return None;
        }
        Some(Self(token))
    }

    /// Loads a credential from a PEM-like file, logging failures via `tracing`.
    ///
    /// # Errors
    ///
    /// See [`load_credential`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CredentialError> {
        load_credential(path.as_ref(), &TracingSink)
    }

    /// Returns the value for an `Authorization` header.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for Credential {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(*****)")
    }
}

/// Extracts the token body from PEM-like text.
///
/// Lines are trimmed; blank lines and lines starting with `-----` are
/// dropped; the rest are concatenated in order with no separator.
#[must_use]
pub fn extract_token(contents: &str) -> String {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(DELIMITER_PREFIX))
        .collect()
}

/// Reads the credential file at `path` and extracts its token.
///
/// Any failure is reported to `sink` before being returned.
///
/// # Errors
///
/// Returns a [`CredentialError`] whose kind is:
/// - [`CredentialErrorKind::NotFound`] if the file does not exist
/// - [`CredentialErrorKind::Unreadable`] for any other I/O failure
/// - [`CredentialErrorKind::Empty`] if no token lines remain
pub fn load_credential(
    path: &Path,
    sink: &dyn DiagnosticSink,
) -> Result<Credential, CredentialError> {
    let result = std::fs::read_to_string(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CredentialErrorKind::NotFound,
            _ => CredentialErrorKind::Unreadable(e),
        })
        .and_then(|contents| {
            Credential::new(extract_token(&contents)).ok_or(CredentialErrorKind::Empty)
        });

    result.map_err(|kind| {
        sink.emit(&Diagnostic::CredentialUnavailable {
            path: path.to_path_buf(),
            reason: kind.to_string(),
        });
        CredentialError::new(path, kind)
    })
}
