use clap::Args;
use std::path::Path;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
    exit_code::ExitCode,
};

const DEFAULT_CONFIG: &str = r#"[core]
# Tasks created from this machine are stamped with this name.
# owner = "alice"

[storage]
storage_type = "json-file"
"#;

#[derive(Args, Debug)]
pub struct Command {
    /// Overwrite an existing configuration file
    #[clap(long)]
    force: bool,
}

pub async fn handle(command: Command, config_path: &str) -> command_error::Result<()> {
    let path = Path::new(config_path);

    if path.exists() && !command.force {
        LogBuilder::new(
            LogType::Info,
            format!("Configuration already exists at '{config_path}'"),
        )
        .with_branch("Hint", "pass --force to overwrite it")
        .print();
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            command_error::Error::ExitWithError(
                ExitCode::ConfigError,
                eyre::eyre!("Could not create configuration directory: {e}"),
            )
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| {
        command_error::Error::ExitWithError(
            ExitCode::ConfigError,
            eyre::eyre!("Could not write configuration file: {e}"),
        )
    })?;

    let core = taskflow_core::load(config_path).map_err(|e| {
        command_error::Error::ExitWithError(ExitCode::ConfigError, e)
    })?;
    core.initialize().await.map_err(|e| {
        command_error::Error::ExitWithError(ExitCode::Unavailable, e)
    })?;

    LogBuilder::new(LogType::Success, "Taskflow initialized")
        .with_branch("Config", config_path.to_owned())
        .print();

    Ok(())
}
