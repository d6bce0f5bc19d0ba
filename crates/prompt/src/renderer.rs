use argus_core::{ArgValue, Result};
use async_trait::async_trait;

use crate::spec::PromptSpec;

/// Renders a prompt and returns the user's answer.
///
/// Input prompts answer with a string value, selections with the picked
/// choice's value, confirmations with a boolean. A user abort must surface
/// as [`argus_core::Error::Cancelled`].
#[async_trait]
pub trait PromptRenderer: Send + Sync {
    async fn prompt(&self, spec: PromptSpec) -> Result<ArgValue>;
}
