//! Runs a task end to end: parse, resolve, type-check, act

use argus_config::Config;
use argus_core::{is_truthy_opt, ArgValue, Arguments, Error, Result, NON_INTERACTIVE_PARAM};
use argus_prompt::PromptRenderer;
use std::sync::Arc;
use tracing::Instrument;

use crate::arguments::ProvidedArguments;
use crate::argv::parse_task_args;
use crate::context::TaskContext;
use crate::definition::TaskDefinition;
use crate::registry::TaskRegistry;
use crate::resolver::resolve;

pub struct TaskRunner {
    registry: Arc<TaskRegistry>,
    config: Arc<Config>,
    renderer: Arc<dyn PromptRenderer>,
}

impl TaskRunner {
    pub fn new(
        registry: Arc<TaskRegistry>,
        config: Arc<Config>,
        renderer: Arc<dyn PromptRenderer>,
    ) -> Self {
        Self {
            registry,
            config,
            renderer,
        }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Run `name` with the raw tokens that followed it on the command line.
    ///
    /// Returns the task's output. A cancelled prompt surfaces as
    /// [`Error::Cancelled`] before the task body runs.
    pub async fn run(&self, name: &str, argv: &[String]) -> Result<String> {
        let task = self
            .registry
            .get(name)
            .ok_or_else(|| Error::unknown_task(name))?;

        async {
            let provided = parse_task_args(task, argv)?;
            let context = TaskContext::new(
                task.name(),
                Arc::clone(&self.config),
                Arc::clone(&self.renderer),
            );

            let interactive = !(context.config().is_non_interactive()
                || is_truthy_opt(provided.get(NON_INTERACTIVE_PARAM)));
            let resolved = if interactive {
                let declarations = task.parameter_declarations();
                resolve(&provided, &declarations, &context)
                    .instrument(argus_utils::tracing::resolve_span(
                        task.name(),
                        declarations.len(),
                    ))
                    .await?
            } else {
                tracing::debug!("non-interactive run, skipping parameter collection");
                Arguments::new()
            };

            let args = finalize_arguments(task, &provided, resolved)?;
            tracing::debug!(args = ?args, "running task action");
            task.action().run(&context, &args).await
        }
        .instrument(argus_utils::tracing::task_span(task.name()))
        .await
    }
}

/// Merge provided and resolved values and bring them to their declared types.
///
/// The result holds one entry per declaration that has a value, in
/// declaration order. An empty answer for an optional parameter leaves it
/// unset; a required parameter without a value is an error.
pub fn finalize_arguments(
    task: &TaskDefinition,
    provided: &ProvidedArguments,
    resolved: Arguments,
) -> Result<Arguments> {
    let mut merged = provided.values().clone();
    merged.extend(resolved);

    let mut args = Arguments::new();
    for declaration in task.parameter_declarations() {
        let value = merged
            .shift_remove(&declaration.name)
            .filter(|v| !matches!(v, ArgValue::String(s) if s.is_empty()));

        match value {
            Some(value) => {
                let value = declaration.param_type.coerce(&declaration.name, value)?;
                args.insert(declaration.name.clone(), value);
            }
            None if !declaration.is_optional => {
                return Err(Error::missing_argument(&declaration.name));
            }
            None => {}
        }
    }
    Ok(args)
}
