//! Core domain types, errors, and constants for the `argus` task runner.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias. Prompt
//!   cancellation is the distinguished `Error::Cancelled` variant.
//! - **`types`**: dynamic argument values, truthiness, and `ParamType`
//!   parsing and validation.
//! - **`constants`**: reserved parameter names, prompt formatting limits and
//!   environment variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{BoxError, Error, Result, ResultExt},
    types::*,
};
