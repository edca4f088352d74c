//! File Discovery Module
//!
//! Project enumeration at the root level and recursive component file
//! scanning within one project. Both absorb filesystem failures locally and
//! never fail their caller.

pub mod projects;
pub mod walk;

pub use projects::list_projects;
pub use walk::{ComponentScanner, is_component_file};
