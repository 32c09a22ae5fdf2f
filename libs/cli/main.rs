use clap::Parser;
use colored::Colorize;
use directories_next::ProjectDirs;
use std::path::PathBuf;

mod commands;
mod tracing;
mod utils;

use utils::command_error;

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    long_about = Some("Organize your tasks efficiently and boost your productivity.")
)]
struct Args {
    /// Path of configuration file (default: "~/.config/taskflow/config.toml")
    #[arg(short, long)]
    config: Option<String>,

    /// Subcommand to execute, defaults to the dashboard
    #[command(subcommand)]
    command: Option<commands::Command>,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        let config_path = match &self.config {
            Some(x) => Ok(x.clone()),
            None => {
                if let Some(proj_dirs) = ProjectDirs::from("", "", "taskflow") {
                    let config_dir = proj_dirs.config_dir();
                    let config_path: PathBuf = config_dir.join("config.toml");

                    config_path
                        .to_str()
                        .map(|t| t.to_owned())
                        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
                } else {
                    Err(eyre::eyre!("Project directories could not be found."))
                }
            }
        }?;

        Ok(shellexpand::full(&config_path)?.into_owned())
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();
    let config_path = args.get_config_path()?;
    let command = args.command.unwrap_or_default();

    if let Err(error) = command.execute(&config_path).await {
        let command_error::Error::ExitWithError(code, report) = error;
        eprintln!("{} {report:#}", "✗".red().bold());
        code.exit()
    }

    Ok(())
}
