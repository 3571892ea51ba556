//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Kombi asset combiner CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: kombi.toml)
    #[arg(short = 'C', long, default_value = "kombi.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Combine the declared assets and print the include tags
    #[command(visible_alias = "b")]
    Build {
        /// Write the include tags to a snippet file instead of stdout
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        tags_out: Option<PathBuf>,
    },

    /// Remove the manifest cache and the combined output directories
    #[command(visible_alias = "c")]
    Clean,
}
