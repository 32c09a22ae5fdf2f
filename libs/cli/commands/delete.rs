use clap::Args;
use taskflow_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    task_ref,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Id (or unique id prefix) of the task to delete
    task_id: String,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    let task = task_ref::resolve_task(core, &command.task_id)?;
    let removed = core.delete_task(task.id).await?;

    LogBuilder::new(LogType::Success, format!("Task '{}' deleted", removed.title)).print();

    Ok(())
}
