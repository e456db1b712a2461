//! Shared types for the Promptvault server.

mod api;
mod prompt;

pub use api::*;
pub use prompt::*;
