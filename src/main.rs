//! Kombi - combines declared CSS/JS files into fingerprint-addressed bundles.

#![allow(dead_code)]

mod asset;
mod bundle;
mod cli;
mod config;
mod freshness;
mod html;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;

    match &cli.command {
        Commands::Build { tags_out } => cli::build::run(&config, tags_out.as_deref()),
        Commands::Clean => cli::clean::run(&config),
    }
}
