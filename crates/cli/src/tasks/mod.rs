//! Built-in tasks

use argus_core::Result;
use argus_task::TaskRegistry;

pub mod bytes;
pub mod convert;

/// Registry with every task shipped in the binary
pub fn builtin_registry() -> Result<TaskRegistry> {
    let mut registry = TaskRegistry::new();
    registry.register(bytes::to_bytes_task()?)?;
    registry.register(bytes::from_bytes_task()?)?;
    registry.register(convert::convert_task()?)?;
    Ok(registry)
}
