//! Error types for record parsing.

use thiserror::Error;

/// Result type alias for bibapa-bibtex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a BibTeX record.
///
/// Parsing is all-or-nothing: there is a single failure mode, raised when the
/// outer `@type{key, ...}` shape cannot be found. Missing or odd fields are
/// never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input does not match `@<type>{<key>, <body>}`.
    #[error("Malformed BibTeX source: {reason}")]
    MalformedSource { reason: String },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedSource {
            reason: reason.into(),
        }
    }
}
