use clap::Args;
use taskflow_core::{Core, EditSession};
use taskflow_storage_core::Priority;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    time,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Title of the task
    title: String,

    /// Longer free-form description
    #[clap(short, long)]
    description: Option<String>,

    /// Due date: YYYY-MM-DD, "today" or "tomorrow"
    #[clap(long)]
    due: Option<String>,

    /// Priority of the task (low, medium, high)
    #[clap(short, long)]
    priority: Option<Priority>,
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    let due_date = command.due.as_deref().map(time::parse_due_string).transpose()?;

    let mut session = EditSession::new();
    let draft = session.draft_mut();
    draft.title = command.title;
    draft.description = command.description;
    draft.due_date = due_date;
    draft.priority = command.priority.unwrap_or_default();

    let task = session.submit(core).await?;

    LogBuilder::new(LogType::Success, format!("Task '{}' added", task.title))
        .with_branch("Id", task.id.clone())
        .with_optional_branch("Due", task.due_date)
        .with_branch("Priority", task.priority)
        .print();

    Ok(())
}
