use argus_core::Result;
use argus_task::TaskRunner;

pub async fn execute(runner: &TaskRunner, task: &str, args: &[String]) -> Result<()> {
    tracing::info!(task = %task, "running task");
    let output = runner.run(task, args).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
