use clap::Args;
use colored::Colorize;
use prettytable::{format, row, Table};
use taskflow_core::{Core, Filter};
use taskflow_storage_core::Task;

use crate::utils::{command_error, time};

#[derive(Args, Debug)]
pub struct Command {
    /// Restrict the listing (all, active, completed)
    #[clap(short, long)]
    filter: Option<Filter>,

    /// Show json output
    #[clap(long)]
    json: bool,
}

pub async fn handle(command: Command, core: &Core) -> command_error::Result<()> {
    let filter = command.filter.unwrap_or(Filter::All);
    let tasks = core.store().filtered(filter);

    if command.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tasks).map_err(eyre::Report::new)?
        );
        return Ok(());
    }

    if tasks.is_empty() {
        match filter {
            Filter::All => println!("{}", "No tasks yet. Add one with 'taskflow add'.".yellow()),
            Filter::Active => println!("{}", "No pending tasks.".yellow()),
            Filter::Completed => println!("{}", "No completed tasks.".yellow()),
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.add_row(row!["", "ID", "TITLE", "DUE", "PRIORITY", "CREATED"]);

    for task in tasks.iter() {
        table.add_row(row![
            checkbox(task),
            short_id(&task.id).dimmed(),
            title_cell(task),
            task.due_date.map_or("-".to_owned(), |d| d.to_string()),
            task.priority,
            time::format_created(task.created_at).dimmed(),
        ]);
    }

    table.printstd();

    let counts = core.store().counts();
    println!(
        "{}",
        format!(
            "{} total, {} pending, {} completed",
            counts.total, counts.pending, counts.completed
        )
        .dimmed()
    );

    Ok(())
}

fn checkbox(task: &Task) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn title_cell(task: &Task) -> String {
    if task.completed {
        task.title.strikethrough().dimmed().to_string()
    } else {
        task.title.clone()
    }
}
