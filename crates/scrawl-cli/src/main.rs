//! Scrawl CLI - Quick local notes from the terminal
//!
//! Notes and settings live in a local SQLite file; secret notes stay behind
//! the PIN unless `--pin` is given.

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::clear::run_clear;
use crate::commands::common::resolve_db_path;
use crate::commands::completions::run_completions;
use crate::commands::compose::run_compose;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, EditRequest};
use crate::commands::export::run_export;
use crate::commands::list::run_list;
use crate::commands::settings::run_settings;
use crate::commands::show::run_show;
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

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "scrawl=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell, output }) = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let db_path = resolve_db_path(cli.db_path)?;
    tracing::debug!("Using database at {}", db_path.display());

    match cli.command {
        Some(Commands::Add {
            title,
            secret,
            content,
        }) => run_add(title.as_deref(), &content, secret, &db_path)?,
        Some(Commands::List { limit, json }) => run_list(limit, json, &db_path)?,
        Some(Commands::Show { id, pin, json }) => run_show(&id, pin.as_deref(), json, &db_path)?,
        Some(Commands::Edit {
            id,
            title,
            content,
            secret,
            public,
            pin,
        }) => {
            let request = EditRequest {
                title: title.as_deref(),
                content: content.as_deref(),
                secret: secret_flag(secret, public),
                pin: pin.as_deref(),
            };
            run_edit(&id, &request, &db_path)?;
        }
        Some(Commands::Delete { id }) => run_delete(&id, &db_path)?,
        Some(Commands::Clear { yes }) => run_clear(yes, &db_path)?,
        Some(Commands::Compose { title, secret }) => {
            run_compose(title.as_deref(), secret, &db_path).await?;
        }
        Some(Commands::Settings { command }) => run_settings(command.as_ref(), &db_path)?,
        Some(Commands::Export {
            format,
            output,
            pin,
        }) => run_export(format, output.as_deref(), pin.as_deref(), &db_path)?,
        Some(Commands::Completions { .. }) => {}
        None => {
            // Quick capture mode: scrawl "my thought"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            } else {
                run_add(None, &cli.note, false, &db_path)?;
            }
        }
    }

    Ok(())
}

const fn secret_flag(secret: bool, public: bool) -> Option<bool> {
    if secret {
        Some(true)
    } else if public {
        Some(false)
    } else {
        None
    }
}
