use clap::Args;
use chrono::NaiveDate;
use taskflow_core::{Core, EditSession};
use taskflow_storage_core::Priority;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    task_ref, time,
};

#[derive(Args, Debug)]
pub struct Command {
    /// Id (or unique id prefix) of the task to edit
    task_id: String,

    /// New title of the task
    #[clap(short, long)]
    title: Option<String>,

    /// New description, an empty string clears it
    #[clap(short, long)]
    description: Option<String>,

    /// New due date (YYYY-MM-DD, "today", "tomorrow"), an empty string clears it
    #[clap(long)]
    due: Option<String>,

    /// New priority of the task (low, medium, high)
    #[clap(short, long)]
    priority: Option<Priority>,
}

impl Command {
    /// None -> keep the current description
    /// Some(None) -> clear it
    /// Some(Some(x)) -> replace it
    fn parse_description_value(&self) -> Option<Option<String>> {
        self.description
            .clone()
            .map(|x| if x.is_empty() { None } else { Some(x) })
    }

    fn parse_due_value(&self) -> command_error::Result<Option<Option<NaiveDate>>> {
        match self.due.as_deref() {
            None => Ok(None),
            Some("") => Ok(Some(None)),
            Some(value) => Ok(Some(Some(time::parse_due_string(value)?))),
        }
    }
}

pub async fn handle(command: Command, core: &mut Core) -> command_error::Result<()> {
    let task = task_ref::resolve_task(core, &command.task_id)?;

    let mut session = EditSession::new();
    session.begin_edit(&task);

    let draft = session.draft_mut();
    if let Some(title) = command.title.clone() {
        draft.title = title;
    }
    if let Some(description) = command.parse_description_value() {
        draft.description = description;
    }
    if let Some(due_date) = command.parse_due_value()? {
        draft.due_date = due_date;
    }
    if let Some(priority) = command.priority {
        draft.priority = priority;
    }

    let updated = session.submit(core).await?;

    LogBuilder::new(LogType::Success, format!("Task '{}' updated", updated.title))
        .with_branch("Id", updated.id.clone())
        .with_optional_branch("Due", updated.due_date)
        .with_branch("Priority", updated.priority)
        .print();

    Ok(())
}
