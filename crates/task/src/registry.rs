use argus_core::{Error, Result};
use std::collections::BTreeMap;

use crate::definition::TaskDefinition;

/// Tasks known to the runner, keyed by name
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: BTreeMap<String, TaskDefinition>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task; names must be unique
    pub fn register(&mut self, task: TaskDefinition) -> Result<()> {
        if self.tasks.contains_key(task.name()) {
            return Err(Error::invalid_definition(
                task.name(),
                "a task with this name is already registered",
            ));
        }
        tracing::trace!(task = task.name(), "registered task");
        self.tasks.insert(task.name().to_string(), task);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TaskDefinition> {
        self.tasks.get(name)
    }

    /// All tasks sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &TaskDefinition> {
        self.tasks.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tasks.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
