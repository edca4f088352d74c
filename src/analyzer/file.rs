//! Per-File Analysis
//!
//! Reads one file and delegates to the analyzer. This is the isolation
//! boundary of the pipeline: any failure here (unreadable file, non-UTF-8
//! content, analyzer error) is logged and collapsed into `None`, so one bad
//! file never aborts a whole-project scan.

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::ComponentAnalyzer;
use crate::types::ComponentAnalysis;

/// Analyze the file at `path`, absorbing every failure into `None`.
pub fn analyze_file<A: ComponentAnalyzer + ?Sized>(
    analyzer: &A,
    path: &Path,
) -> Option<ComponentAnalysis> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            warn!("Cannot read {}: {}", path.display(), e);
            return None;
        }
    };

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown");

    match analyzer.analyze(file_name, &source) {
        Ok(analysis) => {
            debug!(
                "Analyzed {}: {} component(s)",
                path.display(),
                analysis.components.len()
            );
            Some(analysis)
        }
        Err(e) => {
            warn!("Analysis failed for {}: {}", path.display(), e);
            None
        }
    }
}
