//! Component Analyzer Module
//!
//! Extraction of component/prop structure from source text. The pipeline
//! depends only on the [`ComponentAnalyzer`] trait; the shipped
//! implementation parses TSX with tree-sitter, and tests substitute stubs.

pub mod file;
pub mod react;

pub use file::analyze_file;
pub use react::ReactAnalyzer;

use crate::types::{ComponentAnalysis, Result};

/// Extracts a structured component description from one file's source text.
pub trait ComponentAnalyzer {
    /// Analyze `source` as the contents of `file_name`.
    ///
    /// Returns `Err` when the source cannot be analyzed at all; callers are
    /// expected to absorb that failure per file.
    fn analyze(&self, file_name: &str, source: &str) -> Result<ComponentAnalysis>;
}
