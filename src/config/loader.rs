//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Config file (reactdocs.toml in the working directory)
//! 3. Environment variables (REACTDOCS_* prefix, e.g. REACTDOCS_ROOT)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::Config;
use crate::types::{DocsError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain:
    /// defaults → config file → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let file_path = Self::config_file_path();
        if file_path.exists() {
            debug!("Loading config from: {}", file_path.display());
            figment = figment.merge(Toml::file(&file_path));
        }

        figment = figment.merge(Env::prefixed("REACTDOCS_"));

        let config: Config = figment
            .extract()
            .map_err(|e| DocsError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocsError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Path to the config file in the working directory
    pub fn config_file_path() -> PathBuf {
        PathBuf::from("reactdocs.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "root = \"/srv/projects\"").unwrap();
        writeln!(file, "max_file_size = 2048").unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/projects"));
        assert_eq!(config.max_file_size, 2048);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let config = ConfigLoader::load_from_file(Path::new("/nonexistent/reactdocs.toml")).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "max_file_size = 0").unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }
}
