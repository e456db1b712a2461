//! Prompt version types.
//!
//! Version records are opaque to this workspace: whatever the version source
//! produces is handed to clients unchanged.

use serde::{Deserialize, Serialize};

/// A single historical version of a prompt.
///
/// The shape is owned by the version source, so it is kept as raw JSON.
pub type VersionRecord = serde_json::Value;

/// Result of a version lookup for one prompt category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptVersions {
    /// Versions in the order the source returned them.
    pub versions: Vec<VersionRecord>,
}

impl PromptVersions {
    pub fn new(versions: Vec<VersionRecord>) -> Self {
        Self { versions }
    }

    /// Number of versions in the lookup result.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Consume the lookup result, keeping only the version list.
    pub fn into_versions(self) -> Vec<VersionRecord> {
        self.versions
    }
}
