use colored::Colorize;
use taskflow_core::{Core, PrefixMatch};
use taskflow_storage_core::Task;

use crate::utils::{command_error, exit_code::ExitCode};

/// Resolve a user-supplied id (or unique id prefix) against the loaded store.
pub fn resolve_task(core: &Core, reference: &str) -> command_error::Result<Task> {
    match core.store().search_prefix(reference) {
        PrefixMatch::Single(task) => Ok(task),
        PrefixMatch::Many(tasks) => {
            let mut error_message = format!(
                "The provided ID '{}' is ambiguous and matches multiple tasks:\n",
                reference.yellow()
            );

            for task in tasks {
                error_message.push_str(&format!(
                    "  - ID: {} | Title: '{}'\n",
                    task.id.bold(),
                    task.title.cyan()
                ));
            }

            error_message.push_str("\nPlease use a more specific ID to select a task.");

            Err(command_error::Error::ExitWithError(
                ExitCode::DataError,
                eyre::eyre!(error_message),
            ))
        }
        PrefixMatch::NotFound => Err(command_error::Error::ExitWithError(
            ExitCode::NoInput,
            eyre::eyre!("Task with id '{reference}' was not found."),
        )),
    }
}
