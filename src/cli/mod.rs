// src/cli/mod.rs
use clap::Parser;
use thiserror::Error;

use crate::validation::Rejection;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords from configurable character classes", long_about = None)]
pub struct Args {
    /// Use JSON for output (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Rejected(_) => 2,
            _ => 1,
        }
    }
}
