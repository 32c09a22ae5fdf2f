use clap::Args;
use taskflow_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    task_ref,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Id (or unique id prefix) of the task to toggle
    task_id: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    let task = task_ref::resolve_task(core, &command.task_id)?;
    let toggled = core.toggle_task(task.id).await?;

    let state = if toggled.completed {
        "completed"
    } else {
        "incomplete"
    };

    LogBuilder::new(
        LogType::Info,
        format!("Task '{}' marked as {state}", toggled.title),
    )
    .print();

    Ok(())
}
