//! Project Enumerator
//!
//! A project is an immediate, non-hidden child directory of the configured
//! root. Files at the root level and dot-directories (`.git`, `.cache`) are
//! not projects. A root that cannot be listed yields an empty list rather
//! than an error; the caller always gets a well-formed answer.

use std::fs;
use std::path::Path;
use tracing::warn;

use crate::constants::discovery::HIDDEN_PREFIX;

/// List project names under the root, in filesystem enumeration order.
pub fn list_projects(root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot list project root {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with(HIDDEN_PREFIX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_only_visible_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("app-one")).unwrap();
        fs::create_dir(root.join("app-two")).unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::create_dir(root.join(".cache")).unwrap();
        fs::write(root.join("README.md"), "root readme").unwrap();

        let projects: HashSet<String> = list_projects(root).into_iter().collect();
        let expected: HashSet<String> = ["app-one".to_string(), "app-two".to_string()]
            .into_iter()
            .collect();
        assert_eq!(projects, expected);
    }

    #[test]
    fn test_unreadable_root_yields_empty() {
        let projects = list_projects(Path::new("/nonexistent/root"));
        assert!(projects.is_empty());
    }

    #[test]
    fn test_empty_root_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_projects(dir.path()).is_empty());
    }
}
