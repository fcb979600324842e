use log::info;
use std::error::Error;
use std::io::Read;
use std::sync::Arc;

use task_scheduler::storage::implementations::MemoryStore;
use task_scheduler::{PlannerOptions, Task, TaskService};

/// Reads a JSON array of tasks from the file named by the first argument,
/// or from stdin when no argument (or `-`) is given.
fn read_input() -> Result<String, Box<dyn Error + Send + Sync>> {
    let mut input = String::new();
    match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            input = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read '{}': {}", path, e))?;
        }
        _ => {
            std::io::stdin().read_to_string(&mut input)?;
        }
    }
    Ok(input)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    env_logger::init();

    let options = PlannerOptions::from_env();
    info!("Starting task scheduler (dangling dependencies: {})", options.dangling);

    let tasks: Vec<Task> = serde_json::from_str(&read_input()?)?;

    let service = TaskService::new(Arc::new(MemoryStore::new())).with_options(options);
    for task in tasks {
        service.add_task(task).await?;
    }

    match service.schedule().await {
        Ok(order) => {
            println!("{}", serde_json::to_string(&order)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
