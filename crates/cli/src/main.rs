use argus::{builtin_registry, Commands};
use argus_config::Config;
use argus_prompt::TerminalRenderer;
use argus_task::TaskRunner;
use clap::Parser;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "Run tasks and get prompted for the arguments you left out", long_about = None)]
#[command(version)]
struct Cli {
    /// Never prompt; fail on missing required arguments instead
    #[arg(long, global = true)]
    non_interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = Config::from_env()?.with_overrides(cli.non_interactive, cli.verbose);
    argus_utils::tracing::init(config.log_filter()).map_err(|e| eyre::eyre!(e))?;
    tracing::debug!(settings = ?config.runtime_settings, "loaded runtime settings");

    let runner = TaskRunner::new(
        Arc::new(builtin_registry()?),
        Arc::new(config),
        Arc::new(TerminalRenderer::new()),
    );

    // Default behavior when no command is specified
    let command = cli.command.unwrap_or(Commands::List { long: false });

    match command.execute(&runner).await {
        // The user aborted a prompt; leave quietly
        Err(e) if e.is_cancelled() => Ok(()),
        result => Ok(result?),
    }
}
