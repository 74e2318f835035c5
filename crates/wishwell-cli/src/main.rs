//! Wishwell CLI - the birthday greeting from the command line
//!
//! Manage theme and sound preferences, export cues, and submit ideas.

mod cli;
mod commands;
mod error;

#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::common::{load_config, resolve_db_path};
use crate::commands::cue::run_cue;
use crate::commands::prefs::run_prefs;
use crate::commands::sound::run_sound;
use crate::commands::submit::run_submit;
use crate::commands::theme::run_theme;
use crate::commands::themes::run_themes;
use crate::commands::walk::run_walk;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "wishwell=info".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db_path = resolve_db_path(cli.db_path, |key| std::env::var(key).ok());

    // Only the commands that reach the idea store need the remote settings.
    match cli.command {
        Some(Commands::Walk) => run_walk(&db_path, &load_config()?).await?,
        Some(Commands::Themes { json }) => run_themes(json, &db_path).await?,
        Some(Commands::Theme { id }) => run_theme(&id, &db_path).await?,
        Some(Commands::Sound { state }) => run_sound(state, &db_path).await?,
        Some(Commands::Prefs { json }) => run_prefs(json, &db_path).await?,
        Some(Commands::Submit { idea }) => {
            run_submit(&idea, &db_path, &load_config()?).await?;
        }
        Some(Commands::Cue { kind, output }) => run_cue(kind, output.as_deref())?,
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
