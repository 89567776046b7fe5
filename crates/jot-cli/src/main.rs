//! jot CLI - manage a note collection from the terminal
//!
//! Every invocation loads the collection from its backend, applies one
//! operation, and exits; the backend (local JSON file or remote endpoint)
//! is selected per run.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use std::env;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use jot_core::{HttpStore, JsonFileStore, NoteStore, PersistenceBackend, StoreOptions};

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::copy::run_copy;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
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

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    let options = if cli.content_only {
        StoreOptions::content_only()
    } else {
        StoreOptions::default()
    };
    tracing::debug!(
        collection = %cli.collection,
        remote = cli.remote.is_some(),
        "resolved backend"
    );

    if let Some(url) = cli.remote.clone() {
        let backend = HttpStore::new(url)?;
        dispatch(cli, NoteStore::new(backend, options)).await
    } else {
        let data_dir = resolve_data_dir(cli.data_dir.clone());
        let backend = JsonFileStore::open(data_dir, &cli.collection);
        dispatch(cli, NoteStore::new(backend, options)).await
    }
}

async fn dispatch<B: PersistenceBackend>(
    cli: Cli,
    mut store: NoteStore<B>,
) -> Result<(), CliError> {
    store.load().await?;

    match cli.command {
        Some(Commands::Add { title, content }) => {
            run_add(&mut store, title.as_deref(), &content).await
        }
        Some(Commands::List {
            query,
            expand,
            inline,
            json,
        }) => run_list(&store, query.as_deref(), expand.as_deref(), inline, json),
        Some(Commands::Search { query, json }) => run_search(&store, &query, json),
        Some(Commands::Edit {
            note_ref,
            title,
            content,
        }) => run_edit(&mut store, &note_ref, title.as_deref(), content.as_deref()).await,
        Some(Commands::Delete { note_ref }) => run_delete(&mut store, &note_ref).await,
        Some(Commands::Copy { note_ref }) => run_copy(&store, &note_ref),
        None => {
            // Quick capture mode: jot "my note"
            if cli.note.is_empty() {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
                Ok(())
            } else {
                run_add(&mut store, None, &cli.note).await
            }
        }
    }
}

fn resolve_data_dir(cli_data_dir: Option<PathBuf>) -> PathBuf {
    cli_data_dir
        .or_else(|| env::var_os("JOT_DATA_DIR").map(PathBuf::from))
        .unwrap_or_else(default_data_dir)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jot")
}
