use clap::Subcommand;
use taskflow_core::Core;

use crate::utils::{command_error, exit_code::ExitCode};

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod status;
pub mod toggle;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configuration and storage files
    Init(init::Command),
    /// Add a new task
    Add(add::Command),
    /// List tasks, optionally restricted to a filter
    List(list::Command),
    /// Update an existing task
    Edit(edit::Command),
    /// Flip a task between completed and pending
    Toggle(toggle::Command),
    /// Remove a task
    Delete(delete::Command),
    /// Show a summary of task counts
    Status(status::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Status(status::Command::default())
    }
}

/// Load the core from the configuration file and hydrate its store
/// before a command touches it.
async fn open_core(config_path: &str) -> command_error::Result<Core> {
    let mut core = taskflow_core::load(config_path).map_err(|e| {
        command_error::Error::ExitWithError(
            ExitCode::ConfigError,
            e.wrap_err(format!(
                "Could not load configuration from '{config_path}'.\n\
                Run 'taskflow init' to create it."
            )),
        )
    })?;

    core.refresh().await?;
    Ok(core)
}

impl Command {
    pub async fn execute(self, config_path: &str) -> command_error::Result<()> {
        match self {
            Self::Init(o) => init::handle(o, config_path).await?,
            Self::Add(o) => add::handle(o, &mut open_core(config_path).await?).await?,
            Self::List(o) => list::handle(o, &open_core(config_path).await?).await?,
            Self::Edit(o) => edit::handle(o, &mut open_core(config_path).await?).await?,
            Self::Toggle(o) => toggle::handle(o, &mut open_core(config_path).await?).await?,
            Self::Delete(o) => delete::handle(o, &mut open_core(config_path).await?).await?,
            Self::Status(o) => status::handle(o, &open_core(config_path).await?).await?,
        };

        Ok(())
    }
}
