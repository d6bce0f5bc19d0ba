//! Fluent construction of task definitions

use argus_core::{ArgValue, Error, ParamType, Result, NON_INTERACTIVE_PARAM};
use indexmap::IndexMap;
use std::sync::Arc;

use crate::definition::{TaskAction, TaskDefinition};
use crate::parameter::{CustomPrompt, ParameterDeclaration, Suggest};

/// Builds a [`TaskDefinition`].
///
/// Every task gets the reserved `nonInteractive` flag. Definition mistakes
/// are collected and reported together by [`build`](Self::build).
pub struct TaskBuilder {
    name: String,
    description: String,
    positional: Vec<ParameterDeclaration>,
    named: IndexMap<String, ParameterDeclaration>,
    action: Option<Arc<dyn TaskAction>>,
    problems: Vec<String>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut named = IndexMap::new();
        named.insert(
            NON_INTERACTIVE_PARAM.to_string(),
            ParameterDeclaration::new(NON_INTERACTIVE_PARAM, ParamType::Boolean)
                .flag()
                .with_description("Disable interactive prompts"),
        );
        Self {
            name: name.into(),
            description: description.into(),
            positional: Vec::new(),
            named,
            action: None,
            problems: Vec::new(),
        }
    }

    /// Add a required positional parameter
    #[must_use]
    pub fn add_positional_param(self, name: &str, description: &str, param_type: ParamType) -> Self {
        self.push(
            ParameterDeclaration::new(name, param_type)
                .positional()
                .with_description(description),
        )
    }

    /// Add an optional positional parameter
    #[must_use]
    pub fn add_optional_positional_param(
        self,
        name: &str,
        description: &str,
        default_value: Option<ArgValue>,
        param_type: ParamType,
    ) -> Self {
        self.push(
            ParameterDeclaration::new(name, param_type)
                .positional()
                .optional(default_value)
                .with_description(description),
        )
    }

    /// Add a required named parameter
    #[must_use]
    pub fn add_param(self, name: &str, description: &str, param_type: ParamType) -> Self {
        self.push(ParameterDeclaration::new(name, param_type).with_description(description))
    }

    /// Add an optional named parameter
    #[must_use]
    pub fn add_optional_param(
        self,
        name: &str,
        description: &str,
        default_value: Option<ArgValue>,
        param_type: ParamType,
    ) -> Self {
        self.push(
            ParameterDeclaration::new(name, param_type)
                .optional(default_value)
                .with_description(description),
        )
    }

    /// Add a boolean flag
    #[must_use]
    pub fn add_flag(self, name: &str, description: &str) -> Self {
        self.push(
            ParameterDeclaration::new(name, ParamType::Boolean)
                .flag()
                .with_description(description),
        )
    }

    /// Attach a suggestion hook to a declared parameter
    #[must_use]
    pub fn suggest(mut self, name: &str, hook: Arc<dyn Suggest>) -> Self {
        match self.declaration_mut(name) {
            Some(p) => p.suggest = Some(hook),
            None => self.problems.push(format!("suggest hook for unknown parameter '{name}'")),
        }
        self
    }

    /// Attach a custom prompt to a declared parameter
    #[must_use]
    pub fn prompt(mut self, name: &str, hook: Arc<dyn CustomPrompt>) -> Self {
        match self.declaration_mut(name) {
            Some(p) => p.prompt = Some(hook),
            None => self.problems.push(format!("prompt hook for unknown parameter '{name}'")),
        }
        self
    }

    /// Set the task body
    #[must_use]
    pub fn action(mut self, action: Arc<dyn TaskAction>) -> Self {
        self.action = Some(action);
        self
    }

    pub fn build(self) -> Result<TaskDefinition> {
        let mut problems = self.problems;
        if self.action.is_none() {
            problems.push("no action set".to_string());
        }

        match self.action {
            Some(action) if problems.is_empty() => Ok(TaskDefinition {
                name: self.name,
                description: self.description,
                positional: self.positional,
                named: self.named,
                action,
            }),
            _ => Err(Error::invalid_definition(self.name, problems.join("; "))),
        }
    }

    fn push(mut self, declaration: ParameterDeclaration) -> Self {
        let name = declaration.name.clone();
        if name.is_empty() {
            self.problems.push("parameter with empty name".to_string());
            return self;
        }
        if self.positional.iter().any(|p| p.name == name) || self.named.contains_key(&name) {
            self.problems.push(format!("duplicate parameter '{name}'"));
            return self;
        }

        if declaration.is_positional {
            let after_optional = self.positional.last().is_some_and(|p| p.is_optional);
            if after_optional && !declaration.is_optional {
                self.problems.push(format!(
                    "required positional '{name}' follows an optional one"
                ));
                return self;
            }
            self.positional.push(declaration);
        } else {
            self.named.insert(name, declaration);
        }
        self
    }

    fn declaration_mut(&mut self, name: &str) -> Option<&mut ParameterDeclaration> {
        self.positional
            .iter_mut()
            .find(|p| p.name == name)
            .or_else(|| self.named.get_mut(name))
    }
}
