//! Configuration Types
//!
//! All configuration structures with sensible defaults. The project root was
//! a hard-coded constant in earlier iterations of this tool; it is now an
//! explicit value threaded into every component so tests can run against
//! synthetic roots.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory whose immediate children are treated as projects
    pub root: PathBuf,

    /// Skip component files larger than this (bytes)
    pub max_file_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_file_size: 1_048_576,
        }
    }
}

impl Config {
    /// Config rooted at the given directory, everything else defaulted.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate configuration values.
    /// Returns `DocsError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(crate::types::DocsError::Config(
                "root must not be empty".to_string(),
            ));
        }

        if self.max_file_size == 0 {
            return Err(crate::types::DocsError::Config(
                "max_file_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
