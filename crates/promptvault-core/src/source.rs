//! Version sources.
//!
//! A [`VersionSource`] answers "which versions exist for this prompt
//! category". How versions are stored is up to the implementation; the HTTP
//! layer only sees the trait.

use crate::Result;
use async_trait::async_trait;
use promptvault_types::{PromptVersions, VersionRecord};
use std::collections::HashMap;
use tracing::debug;

/// Looks up the version history of a prompt category.
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Return every known version for `category`.
    async fn get_prompt_versions(&self, category: &str) -> Result<PromptVersions>;
}

/// Read-only, in-memory version source.
///
/// Unknown categories resolve to an empty list.
#[derive(Debug, Clone, Default)]
pub struct StaticVersionSource {
    categories: HashMap<String, Vec<VersionRecord>>,
}

impl StaticVersionSource {
    pub fn new(categories: HashMap<String, Vec<VersionRecord>>) -> Self {
        Self { categories }
    }

    /// Add or replace the versions of one category.
    pub fn with_category(
        mut self,
        category: impl Into<String>,
        versions: Vec<VersionRecord>,
    ) -> Self {
        self.categories.insert(category.into(), versions);
        self
    }
}

#[async_trait]
impl VersionSource for StaticVersionSource {
    async fn get_prompt_versions(&self, category: &str) -> Result<PromptVersions> {
        let versions = self.categories.get(category).cloned().unwrap_or_default();
        debug!(
            target: "promptvault::versions",
            "Resolved {} versions for category '{}'",
            versions.len(),
            category
        );
        Ok(PromptVersions::new(versions))
    }
}
