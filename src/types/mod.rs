//! Core Domain Types
//!
//! Shared data model and the unified error type.

pub mod component;
pub mod error;

pub use component::{Component, ComponentAnalysis, PropDescriptor, PropType};
pub use error::{DocsError, Result};
