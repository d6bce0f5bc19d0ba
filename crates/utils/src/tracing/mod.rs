use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use argus_core::DEFAULT_LOG_FILTER;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, span, trace, warn, Level, Span};

/// Initialize the tracing system
///
/// `filter` is an `EnvFilter` directive such as `warn` or `argus::ui=debug`.
/// An unparsable directive falls back to the default filter. Output goes to
/// stderr so task results on stdout stay clean; ANSI colours are only used
/// when stderr is a terminal.
pub fn init(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_new(filter).or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Check if we're running in a TTY environment
pub fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering the resolution of one task's parameters
pub fn resolve_span(task_name: &str, parameters: usize) -> Span {
    span!(Level::DEBUG, "resolve", task_name = %task_name, parameters = %parameters)
}

/// Create a span for a whole task invocation
pub fn task_span(task_name: &str) -> Span {
    span!(Level::INFO, "task", task_name = %task_name)
}
