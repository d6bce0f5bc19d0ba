//! A renderer that answers from a script

use argus_core::{ArgValue, Error, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::renderer::PromptRenderer;
use crate::spec::{PromptKind, PromptSpec};

/// One queued answer
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedAnswer {
    /// Answer with this exact value
    Value(ArgValue),
    /// Accept whatever the prompt pre-fills: initial text or default choice
    AcceptInitial,
    /// Abort the prompt
    Cancel,
}

/// Answers prompts from a queue and records every spec it receives.
///
/// Running out of answers is a prompt error, so a test fails loudly when
/// the code asks more questions than expected.
#[derive(Debug, Default)]
pub struct ScriptedRenderer {
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    seen: Mutex<Vec<PromptSpec>>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given answers queued in order
    pub fn with_answers(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Queue a literal answer
    pub fn answer(&self, value: impl Into<ArgValue>) -> &Self {
        self.answers
            .lock()
            .push_back(ScriptedAnswer::Value(value.into()));
        self
    }

    /// Queue acceptance of the pre-filled answer
    pub fn accept_initial(&self) -> &Self {
        self.answers.lock().push_back(ScriptedAnswer::AcceptInitial);
        self
    }

    /// Queue a cancellation
    pub fn cancel(&self) -> &Self {
        self.answers.lock().push_back(ScriptedAnswer::Cancel);
        self
    }

    /// Every prompt shown so far, oldest first
    pub fn seen(&self) -> Vec<PromptSpec> {
        self.seen.lock().clone()
    }

    /// Number of prompts shown so far
    pub fn prompt_count(&self) -> usize {
        self.seen.lock().len()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.lock().len()
    }
}

#[async_trait]
impl PromptRenderer for ScriptedRenderer {
    async fn prompt(&self, spec: PromptSpec) -> Result<ArgValue> {
        self.seen.lock().push(spec.clone());

        let answer = self.answers.lock().pop_front().ok_or_else(|| {
            Error::prompt(format!("no scripted answer left for '{}'", spec.message))
        })?;

        match answer {
            ScriptedAnswer::Value(value) => Ok(value),
            ScriptedAnswer::Cancel => Err(Error::Cancelled),
            ScriptedAnswer::AcceptInitial => match spec.kind {
                PromptKind::Input { initial_text } => {
                    Ok(ArgValue::String(initial_text.unwrap_or_default()))
                }
                PromptKind::Select { choices, default } => choices
                    .into_iter()
                    .nth(default.unwrap_or(0))
                    .map(|c| c.value)
                    .ok_or_else(|| Error::prompt("no choice to accept")),
            },
        }
    }
}
