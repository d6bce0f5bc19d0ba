//! Prompt specifications

use argus_core::ArgValue;
use serde::{Deserialize, Serialize};

/// One entry of a selection list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the user
    pub label: String,
    /// Value returned when this entry is picked
    pub value: ArgValue,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A choice whose value is its label
    pub fn text(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: ArgValue::String(label.clone()),
            label,
        }
    }
}

/// The kind of interaction to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PromptKind {
    /// Single-line free text
    Input { initial_text: Option<String> },
    /// Pick one of a fixed list
    Select {
        choices: Vec<Choice>,
        default: Option<usize>,
    },
}

/// What to ask the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub message: String,
    #[serde(flatten)]
    pub kind: PromptKind,
}

impl PromptSpec {
    /// A text input prompt
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::Input { initial_text: None },
        }
    }

    /// A selection list
    pub fn select(message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::Select {
                choices,
                default: None,
            },
        }
    }

    /// Pre-fill an input prompt. Ignored for other kinds.
    #[must_use]
    pub fn with_initial_text(mut self, text: Option<String>) -> Self {
        if let PromptKind::Input { initial_text } = &mut self.kind {
            *initial_text = text;
        }
        self
    }

    /// Pre-select an entry of a selection list. Ignored for other kinds.
    #[must_use]
    pub fn with_default_choice(mut self, index: Option<usize>) -> Self {
        if let PromptKind::Select { default, .. } = &mut self.kind {
            *default = index;
        }
        self
    }

    /// The pre-filled text of an input prompt
    pub fn initial_text(&self) -> Option<&str> {
        match &self.kind {
            PromptKind::Input { initial_text } => initial_text.as_deref(),
            _ => None,
        }
    }
}
