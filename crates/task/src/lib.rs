//! Task definitions and interactive parameter resolution for argus
//!
//! A task declares positional and named parameters. Before the task body
//! runs, [`resolve`] fills in missing values by consulting suggestion hooks,
//! custom prompts and, as a last resort, a raw text prompt.

pub mod arguments;
pub mod argv;
pub mod builder;
pub mod context;
pub mod definition;
pub mod parameter;
pub mod registry;
pub mod resolver;
pub mod runner;

pub use arguments::*;
pub use argv::parse_task_args;
pub use builder::TaskBuilder;
pub use context::TaskContext;
pub use definition::*;
pub use parameter::*;
pub use registry::TaskRegistry;
pub use resolver::{raw_prompt_message, resolve};
pub use runner::{finalize_arguments, TaskRunner};
