//! Interactive prompt rendering for argus
//!
//! A [`PromptSpec`] describes what to ask; a [`PromptRenderer`] asks it and
//! returns the answer, or [`argus_core::Error::Cancelled`] when the user
//! aborts. The terminal renderer is backed by `dialoguer`; the scripted
//! renderer answers from a queue and records every prompt it was shown.

pub mod renderer;
pub mod scripted;
pub mod spec;
pub mod terminal;

pub use renderer::PromptRenderer;
pub use scripted::{ScriptedAnswer, ScriptedRenderer};
pub use spec::{Choice, PromptKind, PromptSpec};
pub use terminal::TerminalRenderer;
