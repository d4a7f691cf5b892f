//! goto-file - Resolve a filename mentioned in text to a file in the project
//!
//! goto-file provides:
//! - Extraction of the first `name.ext` token from a line
//! - Prefix-ordered recursive search driven by an optional TOML config
//! - Fallback to the project root when the config is absent or unusable
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod resolve;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run(cli)
}
