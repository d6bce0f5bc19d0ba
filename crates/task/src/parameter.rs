//! Parameter declarations and the per-parameter hook contracts

use argus_core::{ArgValue, Arguments, ParamType, Result};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::context::TaskContext;

/// Input to a suggestion hook
pub struct SuggestRequest<'a> {
    pub context: &'a TaskContext,
    /// Provided arguments overlaid with everything resolved so far
    pub args: &'a Arguments,
}

impl SuggestRequest<'_> {
    /// Look up an argument resolved earlier in this run
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }
}

/// Input to a custom prompt hook
pub struct PromptRequest<'a> {
    pub context: &'a TaskContext,
    pub param_name: &'a str,
    pub param_default: Option<&'a ArgValue>,
    pub description: Option<&'a str>,
    /// Provided arguments overlaid with everything resolved so far
    pub args: &'a Arguments,
}

impl PromptRequest<'_> {
    /// Look up an argument resolved earlier in this run
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }
}

/// Computes a candidate value used to pre-fill the raw prompt.
///
/// `Ok(None)` means "no suggestion".
#[async_trait]
pub trait Suggest: Send + Sync {
    async fn suggest(&self, request: &SuggestRequest<'_>) -> Result<Option<ArgValue>>;
}

/// A parameter-specific interactive routine that replaces the raw prompt.
///
/// `Ok(None)` hands control back to the raw prompt.
#[async_trait]
pub trait CustomPrompt: Send + Sync {
    async fn prompt(&self, request: &PromptRequest<'_>) -> Result<Option<ArgValue>>;
}

struct SuggestFn<F>(F);

#[async_trait]
impl<F> Suggest for SuggestFn<F>
where
    F: Fn(&SuggestRequest<'_>) -> Result<Option<ArgValue>> + Send + Sync,
{
    async fn suggest(&self, request: &SuggestRequest<'_>) -> Result<Option<ArgValue>> {
        (self.0)(request)
    }
}

/// Wrap a synchronous closure as a suggestion hook
pub fn suggest_fn<F>(f: F) -> Arc<dyn Suggest>
where
    F: Fn(&SuggestRequest<'_>) -> Result<Option<ArgValue>> + Send + Sync + 'static,
{
    Arc::new(SuggestFn(f))
}

/// Declaration of one task input. Immutable once the task is built.
#[derive(Clone)]
pub struct ParameterDeclaration {
    pub name: String,
    pub description: Option<String>,
    pub default_value: Option<ArgValue>,
    pub param_type: ParamType,
    pub is_positional: bool,
    pub is_optional: bool,
    /// Boolean switch that takes no value on the command line
    pub is_flag: bool,
    pub suggest: Option<Arc<dyn Suggest>>,
    pub prompt: Option<Arc<dyn CustomPrompt>>,
}

impl ParameterDeclaration {
    /// A required named parameter of the given type
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            description: None,
            default_value: None,
            param_type,
            is_positional: false,
            is_optional: false,
            is_flag: false,
            suggest: None,
            prompt: None,
        }
    }

    #[must_use]
    pub fn positional(mut self) -> Self {
        self.is_positional = true;
        self
    }

    #[must_use]
    pub fn optional(mut self, default_value: Option<ArgValue>) -> Self {
        self.is_optional = true;
        self.default_value = default_value;
        self
    }

    #[must_use]
    pub fn flag(mut self) -> Self {
        self.is_flag = true;
        self.is_optional = true;
        self.param_type = ParamType::Boolean;
        self.default_value = Some(ArgValue::Bool(false));
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_suggest(mut self, hook: Arc<dyn Suggest>) -> Self {
        self.suggest = Some(hook);
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, hook: Arc<dyn CustomPrompt>) -> Self {
        self.prompt = Some(hook);
        self
    }

    pub fn has_suggest(&self) -> bool {
        self.suggest.is_some()
    }

    pub fn has_custom_prompt(&self) -> bool {
        self.prompt.is_some()
    }
}

impl fmt::Debug for ParameterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDeclaration")
            .field("name", &self.name)
            .field("param_type", &self.param_type)
            .field("default_value", &self.default_value)
            .field("is_positional", &self.is_positional)
            .field("is_optional", &self.is_optional)
            .field("is_flag", &self.is_flag)
            .field("has_suggest", &self.has_suggest())
            .field("has_custom_prompt", &self.has_custom_prompt())
            .finish()
    }
}
