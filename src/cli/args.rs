//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Sassrun sass launcher CLI
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sassrun.toml, searched upward)
    #[arg(short = 'C', long, default_value = "sassrun.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Suppress the launch log line
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra arguments forwarded verbatim to the compiler, after the
    /// generated entry arguments (e.g. `--watch --style=compressed`)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "SASS_ARGS")]
    pub args: Vec<String>,
}
