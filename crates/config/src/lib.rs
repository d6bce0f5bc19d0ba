//! Runtime configuration for argus
//!
//! Settings come from the process environment and are overridden by CLI
//! switches. Nothing is persisted.

pub mod config;

pub use config::*;
