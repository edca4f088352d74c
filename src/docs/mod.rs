//! Documentation Generation Module
//!
//! Pure markdown rendering (type formatter, component renderer) and the
//! assembler that drives the per-project pipeline.

pub mod assembler;
pub mod format;
pub mod render;

pub use assembler::{ANALYSIS_ERROR, DocsAssembler, generate_docs};
pub use format::format_prop_type;
pub use render::{NO_COMPONENTS, NO_PROPS, render_analysis};
