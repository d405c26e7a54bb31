mod commands;
mod logging;
mod prompt;
mod render;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use datebook_core::config::DatebookConfig;

#[derive(Parser)]
#[command(name = "datebook", version)]
#[command(about = "Keep recurring dates and export them as an .ics calendar")]
#[command(
    long_about = "Keep recurring dates and export them as an .ics calendar.\n\n\
    Run without a subcommand to write the calendar file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all event templates
    #[command(name = "get-template-s")]
    GetTemplates,

    /// Show every field of one event template
    #[command(name = "get-template")]
    GetTemplate,

    /// Add a date bound to an event template
    #[command(name = "add-date")]
    AddDate,

    /// Delete a date
    #[command(name = "del-date")]
    DelDate,

    /// List dates falling on a given day
    #[command(name = "get-date-s")]
    GetDatesByDate,

    /// List dates bound to a given event template
    #[command(name = "get-date--s")]
    GetDatesByTemplate,

    /// Bind a date to another event template
    #[command(name = "set-date")]
    SetDate,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Unrecognized commands are ignored without output
        Err(_) => return Ok(()),
    };

    let config = DatebookConfig::load()?;
    logging::init(&config.log_level)?;

    let data_path = config.data_path();

    match cli.command {
        None => commands::export::run(&data_path, &config.ics_path()),
        Some(Commands::GetTemplates) => commands::get_templates::run(&data_path),
        Some(Commands::GetTemplate) => commands::get_template::run(&data_path),
        Some(Commands::AddDate) => commands::add_date::run(&data_path),
        Some(Commands::DelDate) => commands::del_date::run(&data_path),
        Some(Commands::GetDatesByDate) => commands::get_dates_by_date::run(&data_path),
        Some(Commands::GetDatesByTemplate) => commands::get_dates_by_template::run(&data_path),
        Some(Commands::SetDate) => commands::set_date::run(&data_path),
    }
}
