//! Global Constants
//!
//! Centralized constants for file discovery and the tool surface.

/// File discovery constants
pub mod discovery {
    /// File name suffixes recognized as React component sources
    pub const COMPONENT_EXTENSIONS: &[&str] = &[".tsx", ".jsx"];

    /// Prefix marking a directory entry as hidden
    pub const HIDDEN_PREFIX: char = '.';
}

/// Tool surface constants
pub mod tools {
    /// Synthetic file name used when analyzing raw source text
    pub const INLINE_FILE_NAME: &str = "inline.tsx";

    pub const ANALYZE_REACT: &str = "analyze-react";
    pub const ANALYZE_PROJECT: &str = "analyze-project";
    pub const LIST_PROJECTS: &str = "list-projects";
}
