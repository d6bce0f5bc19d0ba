use argus_core::Result;
use argus_task::TaskRunner;
use clap::Subcommand;

pub mod list;
pub mod run;

#[derive(Subcommand)]
pub enum Commands {
    /// List available tasks
    #[command(visible_alias = "ls")]
    List {
        /// Show usage lines alongside descriptions
        #[arg(short, long)]
        long: bool,
    },

    /// Run a task, prompting for any missing arguments
    #[command(visible_alias = "r")]
    Run {
        /// Task name
        task: String,

        /// Positional arguments and --options for the task
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Shorthand for `run <task> ...`
    #[command(external_subcommand)]
    External(Vec<String>),
}

impl Commands {
    pub async fn execute(self, runner: &TaskRunner) -> Result<()> {
        match self {
            Commands::List { long } => list::execute(runner, long),
            Commands::Run { task, args } => run::execute(runner, &task, &args).await,
            Commands::External(mut tokens) => {
                if tokens.is_empty() {
                    return list::execute(runner, false);
                }
                let task = tokens.remove(0);
                run::execute(runner, &task, &tokens).await
            }
        }
    }
}
