//! Error types for Promptvault.

use thiserror::Error;

/// Failure reported by a version source.
///
/// The `Display` text is what API clients see, so it stays free of
/// prefixes that would change the message a source reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("{0}")]
    Unavailable(String),

    #[error("{message}")]
    Lookup { category: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl VersionError {
    pub fn lookup(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Lookup {
            category: category.into(),
            message: message.into(),
        }
    }
}
