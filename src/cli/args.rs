// src/cli/args.rs
use crate::domain::Background;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding notes.json and categories.json (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a note
    Add {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short = 'm', long, default_value = "")]
        content: String,

        /// Theme name (slate, ocean, forest, violet, crimson, amber) or 1-6
        #[arg(short, long)]
        background: Option<Background>,

        /// Image file to attach
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Video file to attach
        #[arg(long, value_name = "PATH")]
        video: Option<PathBuf>,

        /// Category to file the note under ("All" files it as Uncategorized)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an existing note; omitted fields keep their value
    Edit {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short = 'm', long)]
        content: Option<String>,

        #[arg(short, long)]
        background: Option<Background>,

        /// Replace the image
        #[arg(long, value_name = "PATH", conflicts_with = "no_image")]
        image: Option<PathBuf>,

        /// Replace the video
        #[arg(long, value_name = "PATH", conflicts_with = "no_video")]
        video: Option<PathBuf>,

        /// Remove the image
        #[arg(long)]
        no_image: bool,

        /// Remove the video
        #[arg(long)]
        no_video: bool,

        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a note
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// List notes, newest first
    List {
        /// Case-insensitive text to look for in title or content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        #[arg(short, long, default_value = "All")]
        category: String,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note in the browser
    View {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON instead of opening in browser
        #[arg(long)]
        json: bool,
    },

    /// Open the note board in the browser
    Board {
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        #[arg(short, long, default_value = "All")]
        category: String,
    },

    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum CategoryAction {
    /// List categories
    List,

    /// Add a category
    Add {
        #[arg(value_name = "NAME")]
        name: String,
    },
}
