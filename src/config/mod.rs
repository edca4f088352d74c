//! Configuration Module
//!
//! Root path and tuning values, merged from defaults, file, and environment.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::Config;
