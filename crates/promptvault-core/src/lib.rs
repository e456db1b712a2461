//! Prompt version lookup for Promptvault.

mod error;
mod source;

pub use error::VersionError;
pub use source::{StaticVersionSource, VersionSource};

/// Result type for Promptvault operations.
pub type Result<T> = std::result::Result<T, VersionError>;
