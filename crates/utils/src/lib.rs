//! Shared utilities and pure functions for argus
//!
//! This crate provides tracing setup and the name conversions used when
//! mapping command-line options to parameter names.

pub mod naming;
pub mod tracing;

pub use naming::*;
