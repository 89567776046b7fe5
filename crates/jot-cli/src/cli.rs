use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "Manage a small note collection from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding local collection files
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Named collection to operate on (one JSON file per collection)
    #[arg(
        long,
        global = true,
        value_name = "NAME",
        default_value = jot_core::backend::DEFAULT_COLLECTION
    )]
    pub collection: String,

    /// Base URL of a remote jot-api endpoint instead of local storage
    #[arg(long, global = true, value_name = "URL")]
    pub remote: Option<String>,

    /// Title-less collection: notes carry content only
    #[arg(long, global = true)]
    pub content_only: bool,

    /// Quick capture: jot "my note here"
    #[arg(trailing_var_arg = true)]
    pub note: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title (required unless --content-only)
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,
        /// Note content (falls back to piped stdin, then $EDITOR)
        content: Vec<String>,
    },
    /// List notes, optionally live-filtered
    List {
        /// Filter by case-insensitive substring match
        #[arg(short, long, value_name = "QUERY")]
        query: Option<String>,
        /// Expand one entry (note ref; all others stay collapsed)
        #[arg(long, value_name = "REF")]
        expand: Option<String>,
        /// Render every entry's content inline
        #[arg(long)]
        inline: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search notes (non-empty query)
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit an existing note
    Edit {
        /// Note ref: id, unique id prefix, or #index
        note_ref: String,
        /// Replacement title (titled collections keep the old one if omitted)
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,
        /// Replacement content ($EDITOR seeded with the current content if omitted)
        #[arg(short, long, value_name = "CONTENT")]
        content: Option<String>,
    },
    /// Delete an existing note
    Delete {
        /// Note ref: id, unique id prefix, or #index
        note_ref: String,
    },
    /// Print a note's clipboard payload to stdout
    ///
    /// Pipe it to your clipboard tool: jot copy '#0' | pbcopy
    Copy {
        /// Note ref: id, unique id prefix, or #index
        note_ref: String,
    },
}
