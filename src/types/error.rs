//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (DocsError) for the entire application
//! - Failures local to one file or one directory are absorbed at the site
//!   that observed them and never reach this type; only request-level
//!   problems (unknown tool, bad arguments, broken configuration) propagate
//! - No panic/unwrap - all errors are recoverable

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Config error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Tool Surface Errors
    // -------------------------------------------------------------------------
    /// Unknown tool name. The one failure class that is surfaced to the
    /// caller as a hard protocol error instead of being absorbed.
    #[error("Method not found: {tool}")]
    MethodNotFound { tool: String },

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, DocsError>;

impl DocsError {
    /// Create a parse error with file context
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a method-not-found error for an unrecognized tool name
    pub fn method_not_found(tool: impl Into<String>) -> Self {
        Self::MethodNotFound { tool: tool.into() }
    }

    /// Check whether this error is a protocol-level failure that must be
    /// reported to the tool caller (as opposed to an internal condition)
    pub fn is_protocol_error(&self) -> bool {
        matches!(self, Self::MethodNotFound { .. } | Self::BadRequest(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_found_display() {
        let err = DocsError::method_not_found("analyze-vue");
        assert_eq!(err.to_string(), "Method not found: analyze-vue");
        assert!(err.is_protocol_error());
    }

    #[test]
    fn test_parse_error_display() {
        let err = DocsError::parse("src/App.tsx", "unexpected token");
        assert_eq!(
            err.to_string(),
            "Parse error in src/App.tsx: unexpected token"
        );
        assert!(!err.is_protocol_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DocsError = io.into();
        assert!(matches!(err, DocsError::Io(_)));
    }
}
