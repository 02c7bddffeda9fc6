//! Diagnostic events emitted by the client.
//!
//! Every request reports its outcome through a [`DiagnosticSink`]. The
//! default sink, [`TracingSink`], forwards events to `tracing`; tests and
//! host applications can install their own sink to capture them.

use std::fmt;
use std::path::PathBuf;

/// The kind of GraphQL operation being sent.
///
/// Queries and mutations travel identically over the wire; the kind only
/// labels diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("Query"),
            Self::Mutation => f.write_str("Mutation"),
        }
    }
}

/// A human-readable event describing what the client did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The credential file could not be turned into a token.
    CredentialUnavailable {
        /// The credential file path.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },
    /// A response was received.
    ResponseStatus {
        /// The operation that was sent.
        operation: OperationKind,
        /// The HTTP status code.
        status: u16,
    },
    /// The server answered with a status other than 200.
    RequestFailed {
        /// The operation that was sent.
        operation: OperationKind,
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },
    /// The request never produced a usable response.
    TransportFailed {
        /// The operation that was sent.
        operation: OperationKind,
        /// The transport error message.
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CredentialUnavailable { path, reason } => {
                write!(f, "Could not read credential from {}: {reason}", path.display())
            }
            Self::ResponseStatus { operation, status } => {
                write!(f, "Response status code ({operation}): {status}")
            }
            Self::RequestFailed {
                operation, body, ..
            } => {
                let label = operation.to_string().to_lowercase();
                write!(f, "Failed to execute {label}: {body}")
            }
            Self::TransportFailed { operation, message } => {
                let label = operation.to_string().to_lowercase();
                write!(f, "An error occurred while executing the {label}: {message}")
            }
        }
    }
}

/// Receives diagnostics from the client.
///
/// Implementations must be cheap and must not panic; they are called inline
/// on every request.
pub trait DiagnosticSink: Send + Sync {
    /// Records a single diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// The default sink, writing diagnostics through `tracing`.
///
/// Status lines are logged at `INFO`, failures at `WARN`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::ResponseStatus { operation, status } => {
                tracing::info!(%operation, status, "{}", diagnostic);
            }
            Diagnostic::RequestFailed {
                operation, status, ..
            } => {
                tracing::warn!(%operation, status, "{}", diagnostic);
            }
            Diagnostic::TransportFailed { operation, .. } => {
                tracing::warn!(%operation, "{}", diagnostic);
            }
            Diagnostic::CredentialUnavailable { .. } => {
                tracing::warn!("{}", diagnostic);
            }
        }
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<S> {
    fn emit(&self, diagnostic: &Diagnostic) {
        (**self).emit(diagnostic);
    }
}
