// src/cli/commands.rs
use clap::Subcommand;

use crate::models::GenerationConfig;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length (4 to 16)
        #[arg(long, short, allow_hyphen_values = true)]
        length: String,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Include uppercase letters
        #[arg(long)]
        uppercase: bool,

        /// Include numbers
        #[arg(long)]
        digits: bool,

        /// Include symbols (!@#$%&_)
        #[arg(long)]
        symbols: bool,
    },

    /// Check a password length without generating
    Validate {
        /// Length to check
        #[arg(required = true, allow_hyphen_values = true)]
        length: String,
    },

    /// List the available character classes
    Classes,

    /// Open the interactive generator form
    Menu,

    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides PASSFORGE_API_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to bind (overrides PASSFORGE_API_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Toggle state of a `generate` invocation.
pub fn generation_config(no_lowercase: bool, uppercase: bool, digits: bool, symbols: bool) -> GenerationConfig {
    GenerationConfig::from_flags(!no_lowercase, uppercase, digits, symbols)
}
