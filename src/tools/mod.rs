//! Tool Surface
//!
//! Name-based dispatch over the three documentation tools. Arguments and
//! results are JSON values; an unrecognized tool name is the one hard,
//! protocol-level error (`DocsError::MethodNotFound`). Transport framing is
//! the caller's concern.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::analyzer::ComponentAnalyzer;
use crate::config::Config;
use crate::constants::tools::{ANALYZE_PROJECT, ANALYZE_REACT, INLINE_FILE_NAME, LIST_PROJECTS};
use crate::docs::generate_docs;
use crate::scanner::list_projects;
use crate::types::{DocsError, Result};

#[derive(Debug, Deserialize)]
struct AnalyzeReactArgs {
    files: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeProjectArgs {
    project_name: String,
}

/// Dispatches tool invocations against one configuration and analyzer.
pub struct ToolDispatcher<'a, A: ComponentAnalyzer> {
    config: &'a Config,
    analyzer: &'a A,
}

impl<'a, A: ComponentAnalyzer> ToolDispatcher<'a, A> {
    pub fn new(config: &'a Config, analyzer: &'a A) -> Self {
        Self { config, analyzer }
    }

    /// Names this dispatcher recognizes
    pub fn tool_names() -> [&'static str; 3] {
        [ANALYZE_REACT, ANALYZE_PROJECT, LIST_PROJECTS]
    }

    /// Invoke a tool by name.
    pub fn call(&self, tool: &str, arguments: Value) -> Result<Value> {
        match tool {
            ANALYZE_REACT => self.analyze_react(arguments),
            ANALYZE_PROJECT => self.analyze_project(arguments),
            LIST_PROJECTS => self.list_projects(),
            _ => Err(DocsError::method_not_found(tool)),
        }
    }

    fn analyze_react(&self, arguments: Value) -> Result<Value> {
        let args: AnalyzeReactArgs = parse_args(arguments)?;
        if args.files.trim().is_empty() {
            return Err(DocsError::BadRequest(
                "'files' must contain source text".to_string(),
            ));
        }
        let analysis = self.analyzer.analyze(INLINE_FILE_NAME, &args.files)?;
        Ok(serde_json::to_value(analysis)?)
    }

    fn analyze_project(&self, arguments: Value) -> Result<Value> {
        let args: AnalyzeProjectArgs = parse_args(arguments)?;
        let markdown = generate_docs(self.config, self.analyzer, &args.project_name);
        Ok(Value::String(markdown))
    }

    fn list_projects(&self) -> Result<Value> {
        let projects = list_projects(self.config.root());
        Ok(json!({ "projects": projects }))
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(arguments: Value) -> Result<T> {
    serde_json::from_value(arguments)
        .map_err(|e| DocsError::BadRequest(format!("invalid arguments: {}", e)))
}
