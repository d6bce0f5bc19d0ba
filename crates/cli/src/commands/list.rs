use argus_core::Result;
use argus_task::TaskRunner;

pub fn execute(runner: &TaskRunner, long: bool) -> Result<()> {
    let registry = runner.registry();
    if registry.is_empty() {
        println!("No tasks available");
        return Ok(());
    }

    let width = registry.names().iter().map(|n| n.len()).max().unwrap_or(0);
    println!("Available tasks:");
    for task in registry.iter() {
        println!("  {:width$}  {}", task.name(), task.description());
        if long {
            println!("  {:width$}  usage: {}", "", task.usage());
        }
    }
    Ok(())
}
