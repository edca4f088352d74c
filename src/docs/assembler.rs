//! Documentation Assembler
//!
//! Orchestrates the full per-project pipeline: scan the project subtree,
//! analyze each component file, render each result, and concatenate the
//! sections into one document. Per-file failures are absorbed and rendered
//! inline; this function never fails.

use std::path::Path;
use tracing::{info, warn};

use crate::analyzer::{ComponentAnalyzer, analyze_file};
use crate::config::Config;
use crate::docs::render::render_analysis;
use crate::scanner::ComponentScanner;

/// Rendered in place of a section body when a file could not be analyzed
pub const ANALYSIS_ERROR: &str = "*Error analyzing file*";

pub struct DocsAssembler<'a, A: ComponentAnalyzer> {
    config: &'a Config,
    analyzer: &'a A,
}

impl<'a, A: ComponentAnalyzer> DocsAssembler<'a, A> {
    pub fn new(config: &'a Config, analyzer: &'a A) -> Self {
        Self { config, analyzer }
    }

    /// Generate the markdown document for one project.
    ///
    /// File sections appear in scanner order; that ordering is part of the
    /// contract, not an artifact.
    pub fn generate(&self, project_name: &str) -> String {
        let project_root = self.config.root().join(project_name);
        let files = ComponentScanner::new(&project_root).scan();

        if files.is_empty() {
            return format!("# {}\n\nNo React components found.", project_name);
        }

        info!(
            "Documenting {} component file(s) in {}",
            files.len(),
            project_name
        );

        let mut doc = format!("# {} Components\n", project_name);
        for file in &files {
            let relative = file
                .strip_prefix(self.config.root())
                .unwrap_or(file.as_path())
                .to_string_lossy();

            doc.push_str("\n---\n\n");
            doc.push_str(&format!("# File: {}\n\n", relative));

            let analysis = if self.oversized(file) {
                None
            } else {
                analyze_file(self.analyzer, file)
            };
            match analysis {
                Some(analysis) => doc.push_str(&render_analysis(Some(&analysis))),
                None => doc.push_str(ANALYSIS_ERROR),
            }
            doc.push('\n');
        }

        doc
    }

    /// Files over the configured limit get an inline error section instead
    /// of an analysis pass. A failed size probe falls through to the file
    /// analyzer, which absorbs its own read errors.
    fn oversized(&self, file: &Path) -> bool {
        match file.metadata() {
            Ok(metadata) if metadata.len() > self.config.max_file_size => {
                warn!(
                    "Not analyzing {}: {} bytes exceeds the {} byte limit",
                    file.display(),
                    metadata.len(),
                    self.config.max_file_size
                );
                true
            }
            _ => false,
        }
    }
}

/// Helper for callers that hold a config and path directly.
pub fn generate_docs<A: ComponentAnalyzer>(
    config: &Config,
    analyzer: &A,
    project_name: &str,
) -> String {
    DocsAssembler::new(config, analyzer).generate(project_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Component, ComponentAnalysis, DocsError, Result};
    use std::fs;

    /// Analyzer that fails for any file whose source contains "fail",
    /// otherwise returns one component named after the file.
    struct PatternAnalyzer;

    impl ComponentAnalyzer for PatternAnalyzer {
        fn analyze(&self, file_name: &str, source: &str) -> Result<ComponentAnalysis> {
            if source.contains("fail") {
                return Err(DocsError::parse(file_name, "marked as failing"));
            }
            if source.contains("empty") {
                return Ok(ComponentAnalysis::default());
            }
            let stem = file_name.split('.').next().unwrap_or(file_name);
            Ok(ComponentAnalysis {
                components: vec![Component::new(stem)],
            })
        }
    }

    #[test]
    fn test_empty_project_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("empty-app")).unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &PatternAnalyzer, "empty-app");
        assert_eq!(doc, "# empty-app\n\nNo React components found.");
    }

    #[test]
    fn test_missing_project_document() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &PatternAnalyzer, "nope");
        assert_eq!(doc, "# nope\n\nNo React components found.");
    }

    #[test]
    fn test_sections_per_file_with_inline_errors() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir(&app).unwrap();
        fs::write(app.join("A.tsx"), "// empty analysis").unwrap();
        fs::write(app.join("B.jsx"), "// fail").unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &PatternAnalyzer, "app");

        assert!(doc.starts_with("# app Components\n"));
        assert!(doc.contains("# File: app/A.tsx\n\n**No components found**"));
        assert!(doc.contains("# File: app/B.jsx\n\n*Error analyzing file*"));

        // Sections follow scanner order
        let a = doc.find("app/A.tsx").unwrap();
        let b = doc.find("app/B.jsx").unwrap();
        let files = ComponentScanner::new(&app).scan();
        let a_first = files[0].to_string_lossy().ends_with("A.tsx");
        assert_eq!(a < b, a_first);
    }

    #[test]
    fn test_headings_use_paths_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("app/src/ui");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Button.tsx"), "// component").unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &PatternAnalyzer, "app");
        assert!(doc.contains("# File: app/src/ui/Button.tsx"));
        assert!(doc.contains("## Button"));
    }

    #[test]
    fn test_oversized_file_gets_inline_error_section() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir(&app).unwrap();
        fs::write(app.join("Big.tsx"), "x".repeat(64)).unwrap();
        let config = Config {
            max_file_size: 16,
            ..Config::with_root(dir.path())
        };

        let doc = generate_docs(&config, &PatternAnalyzer, "app");

        // The file stays in the document with an error marker; it must not
        // silently vanish into the empty-project form.
        assert!(doc.starts_with("# app Components\n"));
        assert!(doc.contains("# File: app/Big.tsx\n\n*Error analyzing file*"));
        assert!(!doc.contains("No React components found."));
    }

    #[test]
    fn test_file_at_limit_is_analyzed() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir(&app).unwrap();
        fs::write(app.join("Edge.tsx"), "x".repeat(16)).unwrap();
        let config = Config {
            max_file_size: 16,
            ..Config::with_root(dir.path())
        };

        let doc = generate_docs(&config, &PatternAnalyzer, "app");
        assert!(doc.contains("## Edge"));
    }

    #[test]
    fn test_end_to_end_with_react_analyzer() {
        use crate::analyzer::ReactAnalyzer;

        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("web");
        fs::create_dir(&app).unwrap();
        fs::write(
            app.join("Button.tsx"),
            r#"
interface ButtonProps {
    label: string;
}

export function Button(props: ButtonProps) {
    return <button>{props.label}</button>;
}
"#,
        )
        .unwrap();
        fs::write(app.join("Broken.jsx"), "const = = <div>").unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &ReactAnalyzer::new(), "web");

        assert!(doc.starts_with("# web Components\n"));
        assert!(doc.contains("# File: web/Button.tsx"));
        assert!(doc.contains("## Button"));
        assert!(doc.contains("| label | `string` | ✗ |  |"));
        assert!(doc.contains("# File: web/Broken.jsx\n\n*Error analyzing file*"));
    }

    #[test]
    fn test_horizontal_rule_precedes_each_file() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        fs::create_dir(&app).unwrap();
        fs::write(app.join("One.tsx"), "// component").unwrap();
        fs::write(app.join("Two.tsx"), "// component").unwrap();
        let config = Config::with_root(dir.path());

        let doc = generate_docs(&config, &PatternAnalyzer, "app");
        assert_eq!(doc.matches("\n---\n").count(), 2);
    }
}
