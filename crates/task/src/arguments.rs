//! Caller-supplied arguments

use argus_core::{ArgValue, Arguments};
use std::collections::HashSet;

use crate::parameter::ParameterDeclaration;

/// Values handed to the resolver, together with which of them the user
/// actually typed.
///
/// The argument parser injects a declaration's default for every omitted
/// parameter. Such values are present in [`values`](Self::values) but not
/// recorded as parsed, which is how the resolver tells them apart from a user
/// who typed the default explicitly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvidedArguments {
    values: Arguments,
    parsed: HashSet<String>,
}

impl ProvidedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value that came from user input
    pub fn insert_parsed(&mut self, name: impl Into<String>, value: ArgValue) {
        let name = name.into();
        self.parsed.insert(name.clone());
        self.values.insert(name, value);
    }

    /// Record a value filled in from a declaration's default
    pub fn inject_default(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder form of [`insert_parsed`](Self::insert_parsed)
    #[must_use]
    pub fn with_parsed(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert_parsed(name, value.into());
        self
    }

    /// Builder form of [`inject_default`](Self::inject_default)
    #[must_use]
    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.inject_default(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Whether raw user input was present for `name`
    pub fn was_parsed(&self, name: &str) -> bool {
        self.parsed.contains(name)
    }

    /// Whether the value for `declaration` is the host's injected default
    /// rather than something the user typed
    pub fn is_injected_default(&self, declaration: &ParameterDeclaration) -> bool {
        !self.was_parsed(&declaration.name)
            && self.get(&declaration.name) == declaration.default_value.as_ref()
    }

    pub fn values(&self) -> &Arguments {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
