//! Component File Scanner
//!
//! Walks a project subtree and collects every file whose name ends in a
//! recognized component extension. The walk uses an explicit worklist rather
//! than call recursion, so pathological nesting cannot exhaust the stack.
//!
//! Unlike project enumeration, nothing is filtered at this layer: hidden
//! directories are descended into like any other. A directory that cannot be
//! listed is logged and skipped; its readable siblings are unaffected and the
//! scan itself never fails.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::discovery::COMPONENT_EXTENSIONS;

pub struct ComponentScanner {
    root: PathBuf,
}

impl ComponentScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Collect component file paths under the root, depth-first.
    ///
    /// Order within a directory follows filesystem enumeration order and is
    /// not stable across filesystems; callers must not rely on more than set
    /// equality plus the relative order being fixed for one scan.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                        continue;
                    }
                };

                let path = entry.path();
                // file_type() does not follow symlinks, so a symlink back
                // into an ancestor cannot loop the walk.
                match entry.file_type() {
                    Ok(file_type) if file_type.is_dir() => pending.push(path),
                    Ok(_) => {
                        if is_component_file(&path) {
                            files.push(path);
                        }
                    }
                    Err(e) => {
                        warn!("Cannot stat {}: {}", path.display(), e);
                    }
                }
            }
        }

        files
    }
}

/// Whether the file name carries one of the recognized component suffixes
pub fn is_component_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| COMPONENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
        .unwrap_or(false)
}
