//! Sassrun - a launcher for the sass CLI.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RunnerConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = RunnerConfig::load(&cli)?;

    // Fire and forget: the compiler keeps the inherited streams, and its
    // exit status is not inspected or relayed.
    let _child = cli::compile::launch(&config, &cli.args)?;
    Ok(())
}
