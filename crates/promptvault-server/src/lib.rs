//! Promptvault server library - HTTP API for prompt version lookup.
//!
//! Routes, configuration and application state live here, separate from
//! main.rs, so integration tests can drive the router directly.

pub mod config;
pub mod logging;
pub mod routes;
pub mod state;
