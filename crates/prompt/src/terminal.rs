//! Terminal prompts backed by `dialoguer`

use argus_core::{ArgValue, Error, Result};
use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io;

use crate::renderer::PromptRenderer;
use crate::spec::{Choice, PromptKind, PromptSpec};

/// Renders prompts on the controlling terminal.
///
/// dialoguer blocks on terminal reads, so every interaction runs on the
/// blocking thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptRenderer for TerminalRenderer {
    async fn prompt(&self, spec: PromptSpec) -> Result<ArgValue> {
        tracing::trace!(message = %spec.message, "rendering terminal prompt");
        tokio::task::spawn_blocking(move || render_blocking(spec))
            .await
            .map_err(|e| Error::prompt_with_source("prompt thread failed", e))?
    }
}

fn render_blocking(spec: PromptSpec) -> Result<ArgValue> {
    let theme = ColorfulTheme::default();
    let PromptSpec { message, kind } = spec;

    match kind {
        PromptKind::Input { initial_text } => {
            let input = Input::<String>::with_theme(&theme)
                .with_prompt(message)
                .allow_empty(true);
            let input = match initial_text {
                Some(text) => input.with_initial_text(text),
                None => input,
            };
            let text = input.interact_text().map_err(map_dialoguer_error)?;
            Ok(ArgValue::String(text))
        }
        PromptKind::Select { choices, default } => {
            let labels = labels(&choices);
            let picked = Select::with_theme(&theme)
                .with_prompt(message)
                .items(&labels)
                .default(default.unwrap_or(0))
                .interact_opt()
                .map_err(map_dialoguer_error)?;
            pick(choices, picked)
        }
    }
}

fn labels(choices: &[Choice]) -> Vec<String> {
    choices.iter().map(|c| c.label.clone()).collect()
}

fn pick(choices: Vec<Choice>, picked: Option<usize>) -> Result<ArgValue> {
    let index = picked.ok_or(Error::Cancelled)?;
    choices
        .into_iter()
        .nth(index)
        .map(|c| c.value)
        .ok_or_else(|| Error::prompt(format!("selection {index} out of range")))
}

fn map_dialoguer_error(err: dialoguer::Error) -> Error {
    let dialoguer::Error::IO(err) = err;
    match err.kind() {
        io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => Error::Cancelled,
        _ => Error::prompt_with_source("terminal interaction failed", err),
    }
}
