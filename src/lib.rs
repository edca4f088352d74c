//! ReactDocs - React Component Documentation Generator
//!
//! Turns a tree of React component source files into structured markdown
//! documentation. Projects are the immediate subdirectories of a configured
//! root; each project's `.tsx`/`.jsx` files are analyzed with tree-sitter
//! and rendered into one document with a props table per component.
//!
//! ## Pipeline
//!
//! Scanner → per-file Analyzer → Renderer → Assembler. Failures local to one
//! file or directory are absorbed and surfaced inline in the document; a
//! whole-project request never fails.
//!
//! ## Quick Start
//!
//! ```ignore
//! use reactdocs::{Config, ReactAnalyzer, generate_docs};
//!
//! let config = Config::with_root("/srv/projects");
//! let analyzer = ReactAnalyzer::new();
//! let markdown = generate_docs(&config, &analyzer, "my-app");
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: TSX parsing and the analyzer trait seam
//! - [`scanner`]: project enumeration and component file discovery
//! - [`docs`]: markdown formatting, rendering, and assembly
//! - [`tools`]: name-based tool dispatch over the pipeline
//! - [`config`]: root path and tuning values

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod docs;
pub mod scanner;
pub mod tools;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::error::{DocsError, Result};

// Data Model
pub use types::{Component, ComponentAnalysis, PropDescriptor, PropType};

// =============================================================================
// Pipeline Re-exports
// =============================================================================

pub use analyzer::{ComponentAnalyzer, ReactAnalyzer, analyze_file};
pub use docs::{DocsAssembler, format_prop_type, generate_docs, render_analysis};
pub use scanner::{ComponentScanner, list_projects};
pub use tools::ToolDispatcher;
