//! CLI command implementations.

pub mod analyze;
pub mod common;
pub mod eval;
pub mod grid;
pub mod remap;
pub mod show_config;
