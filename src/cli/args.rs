//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Terminal mind-map editor: build an outline tree and export it as Markdown
#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Export directory (overrides configuration)
    #[arg(short, long, global = true, value_hint = ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Subcommand; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Edit a mind map interactively
    Shell {
        /// Run commands from a file instead of stdin
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        script: Option<PathBuf>,
    },

    /// Print the export file name for a title at the current time
    Filename {
        /// Root title (empty: configured placeholder)
        title: Option<String>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
