//! Built task definitions
//!
//! A [`TaskDefinition`] is the immutable result of [`crate::TaskBuilder`]:
//! its parameter declarations, hooks and action no longer change.

use argus_core::{Arguments, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::context::TaskContext;
use crate::parameter::ParameterDeclaration;

/// The body of a task, run after its arguments are resolved
#[async_trait]
pub trait TaskAction: Send + Sync {
    /// Run the task and return the text to print
    async fn run(&self, context: &TaskContext, args: &Arguments) -> Result<String>;
}

struct ActionFn<F>(F);

#[async_trait]
impl<F> TaskAction for ActionFn<F>
where
    F: Fn(&TaskContext, &Arguments) -> Result<String> + Send + Sync,
{
    async fn run(&self, context: &TaskContext, args: &Arguments) -> Result<String> {
        (self.0)(context, args)
    }
}

/// Wrap a synchronous closure as a task action
pub fn action_fn<F>(f: F) -> Arc<dyn TaskAction>
where
    F: Fn(&TaskContext, &Arguments) -> Result<String> + Send + Sync + 'static,
{
    Arc::new(ActionFn(f))
}

/// Immutable, validated task definition ready for execution
#[derive(Clone)]
pub struct TaskDefinition {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) positional: Vec<ParameterDeclaration>,
    pub(crate) named: IndexMap<String, ParameterDeclaration>,
    pub(crate) action: Arc<dyn TaskAction>,
}

impl TaskDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Positional parameters in declared order
    pub fn positional_params(&self) -> &[ParameterDeclaration] {
        &self.positional
    }

    /// Look up a named (flag-style) parameter
    pub fn named_param(&self, name: &str) -> Option<&ParameterDeclaration> {
        self.named.get(name)
    }

    /// Look up any parameter by name
    pub fn param(&self, name: &str) -> Option<&ParameterDeclaration> {
        self.positional
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.named.get(name))
    }

    /// All declarations: positional in declared order, then named in
    /// declared order
    pub fn parameter_declarations(&self) -> Vec<&ParameterDeclaration> {
        self.positional.iter().chain(self.named.values()).collect()
    }

    pub fn action(&self) -> &dyn TaskAction {
        self.action.as_ref()
    }

    /// One-line usage string, e.g. `convert <amount> [--unit <string>]`
    pub fn usage(&self) -> String {
        let mut parts = vec![self.name.clone()];
        for p in &self.positional {
            if p.is_optional {
                parts.push(format!("[{}]", p.name));
            } else {
                parts.push(format!("<{}>", p.name));
            }
        }
        for p in self.named.values() {
            let option = format!("--{}", argus_utils::camel_to_kebab(&p.name));
            let shown = if p.is_flag {
                option
            } else {
                format!("{option} <{}>", p.param_type)
            };
            if p.is_optional {
                parts.push(format!("[{shown}]"));
            } else {
                parts.push(shown);
            }
        }
        parts.join(" ")
    }
}

impl fmt::Debug for TaskDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("positional", &self.positional)
            .field("named", &self.named)
            .finish_non_exhaustive()
    }
}
