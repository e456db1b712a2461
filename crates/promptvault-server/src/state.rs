//! Shared application state.

use crate::config::Config;
use promptvault_core::{StaticVersionSource, VersionSource};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub versions: Arc<dyn VersionSource>,
    pub config: Config,
}

impl AppState {
    /// State serving the versions listed in the config file.
    pub fn new(config: Config) -> Self {
        let source = StaticVersionSource::new(config.versions.clone());
        Self::with_source(config, Arc::new(source))
    }

    /// State backed by any version source.
    pub fn with_source(config: Config, versions: Arc<dyn VersionSource>) -> Self {
        Self { versions, config }
    }
}
