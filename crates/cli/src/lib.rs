// Re-export command modules
pub mod commands;
pub mod tasks;

pub use commands::Commands;
pub use tasks::builtin_registry;
