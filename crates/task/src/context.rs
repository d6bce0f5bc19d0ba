use argus_config::Config;
use argus_core::{ArgValue, Result};
use argus_prompt::{PromptRenderer, PromptSpec};
use std::fmt;
use std::sync::Arc;

/// The environment handed to every hook and task action.
///
/// Cloning is cheap; the renderer and the configuration are shared.
#[derive(Clone)]
pub struct TaskContext {
    task_name: String,
    config: Arc<Config>,
    renderer: Arc<dyn PromptRenderer>,
}

impl TaskContext {
    pub fn new(
        task_name: impl Into<String>,
        config: Arc<Config>,
        renderer: Arc<dyn PromptRenderer>,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            config,
            renderer,
        }
    }

    /// Name of the task being invoked
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render a prompt through the shared renderer
    pub async fn prompt(&self, spec: PromptSpec) -> Result<ArgValue> {
        self.renderer.prompt(spec).await
    }
}

impl fmt::Debug for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskContext")
            .field("task_name", &self.task_name)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
