//! Centralized configuration management for argus
//!
//! The `Config` struct is the single source of truth for runtime settings.
//! It is immutable after construction and shared as `Arc<Config>`.

use argus_core::{
    Error, Result, ARGUS_LOG_VAR, ARGUS_NON_INTERACTIVE_VAR, DEFAULT_LOG_FILTER,
};
use std::collections::HashMap;

/// Immutable configuration shared by the runner, the prompt layer and tasks.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Runtime configuration settings
    pub runtime_settings: RuntimeSettings,
}

/// Runtime configuration settings that affect how argus operates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Skip interactive parameter resolution entirely
    pub non_interactive: bool,

    /// `tracing` filter directive
    pub log_filter: String,

    /// Verbosity level from repeated `-v` switches
    pub verbosity: u8,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            non_interactive: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            verbosity: 0,
        }
    }
}

impl Config {
    /// Create a new Config instance
    pub fn new(runtime_settings: RuntimeSettings) -> Self {
        Self { runtime_settings }
    }

    /// Load settings from the current process environment
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Load settings from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut settings = RuntimeSettings::default();

        if let Some(raw) = vars.get(ARGUS_NON_INTERACTIVE_VAR) {
            settings.non_interactive = parse_flag(ARGUS_NON_INTERACTIVE_VAR, raw)?;
        }
        if let Some(filter) = vars.get(ARGUS_LOG_VAR).filter(|f| !f.trim().is_empty()) {
            settings.log_filter = filter.trim().to_string();
        }

        Ok(Self::new(settings))
    }

    /// Apply CLI overrides on top of the loaded settings
    #[must_use]
    pub fn with_overrides(mut self, non_interactive: bool, verbosity: u8) -> Self {
        if non_interactive {
            self.runtime_settings.non_interactive = true;
        }
        if verbosity > 0 {
            self.runtime_settings.verbosity = verbosity;
            self.runtime_settings.log_filter = match verbosity {
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
            .to_string();
        }
        self
    }

    /// Whether interactive resolution is disabled
    pub fn is_non_interactive(&self) -> bool {
        self.runtime_settings.non_interactive
    }

    /// The effective log filter directive
    pub fn log_filter(&self) -> &str {
        &self.runtime_settings.log_filter
    }
}

fn parse_flag(variable: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{variable} must be a boolean, got '{other}'"
        ))),
    }
}
