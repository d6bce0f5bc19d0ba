/// Result type alias for argus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a collaborator (hook, action or renderer backend)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for argus operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The user aborted an interactive prompt
    #[error("prompt cancelled by user")]
    Cancelled,

    /// No task is registered under the requested name
    #[error("unknown task '{name}'")]
    UnknownTask { name: String },

    /// A command-line option does not match any declared parameter
    #[error("task '{task}' has no parameter '{parameter}'")]
    UnknownParameter { task: String, parameter: String },

    /// A positional argument has no parameter left to fill
    #[error("task '{task}' got unexpected argument '{argument}'")]
    UnexpectedArgument { task: String, argument: String },

    /// A required parameter has no value after resolution
    #[error("missing value for required parameter '{parameter}'")]
    MissingArgument { parameter: String },

    /// A value failed to parse or validate against its parameter type
    #[error("invalid value for '{parameter}': {message}")]
    InvalidArgument { parameter: String, message: String },

    /// A task definition is inconsistent
    #[error("invalid definition for task '{task}': {message}")]
    InvalidDefinition { task: String, message: String },

    /// A suggestion or custom prompt hook failed
    #[error("{hook} hook for '{parameter}' failed: {source}")]
    Hook {
        parameter: String,
        hook: &'static str,
        #[source]
        source: BoxError,
    },

    /// The prompt renderer failed for a reason other than cancellation
    #[error("prompt failed: {message}")]
    Prompt {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A task action failed
    #[error("task '{task}' failed: {message}")]
    Action { task: String, message: String },
}

impl Error {
    /// Whether this error is the user aborting a prompt
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Create an unknown task error
    #[must_use]
    pub fn unknown_task(name: impl Into<String>) -> Self {
        Error::UnknownTask { name: name.into() }
    }

    /// Create an unknown parameter error
    #[must_use]
    pub fn unknown_parameter(task: impl Into<String>, parameter: impl Into<String>) -> Self {
        Error::UnknownParameter {
            task: task.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an unexpected argument error
    #[must_use]
    pub fn unexpected_argument(task: impl Into<String>, argument: impl Into<String>) -> Self {
        Error::UnexpectedArgument {
            task: task.into(),
            argument: argument.into(),
        }
    }

    /// Create a missing argument error
    #[must_use]
    pub fn missing_argument(parameter: impl Into<String>) -> Self {
        Error::MissingArgument {
            parameter: parameter.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid definition error
    #[must_use]
    pub fn invalid_definition(task: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidDefinition {
            task: task.into(),
            message: message.into(),
        }
    }

    /// Wrap a hook failure with the parameter it was resolving
    #[must_use]
    pub fn hook(parameter: impl Into<String>, hook: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Hook {
            parameter: parameter.into(),
            hook,
            source: source.into(),
        }
    }

    /// Create a prompt error
    #[must_use]
    pub fn prompt(message: impl Into<String>) -> Self {
        Error::Prompt {
            message: message.into(),
            source: None,
        }
    }

    /// Create a prompt error with a source error
    #[must_use]
    pub fn prompt_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Prompt {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a task action error
    #[must_use]
    pub fn action(task: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Action {
            task: task.into(),
            message: message.into(),
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach the name of the task that produced the error
    fn task_context(self, task: &str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn task_context(self, task: &str) -> Result<T> {
        self.map_err(|e| Error::action(task, e.to_string()))
    }
}
