use clap::Args;
use taskflow_core::Core;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug, Default)]
pub struct Command {
    /// Show json output
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let counts = core.store().counts();

    if command.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&counts).map_err(eyre::Report::new)?
        );
        return Ok(());
    }

    LogBuilder::new(LogType::Status, "Task dashboard")
        .with_branch("Total", counts.total)
        .with_branch("Pending", counts.pending)
        .with_branch("Completed", counts.completed)
        .print();

    Ok(())
}
