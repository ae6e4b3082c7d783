//! Command-line interface for the LSPA provisioning tool.

mod commands;

use clap::{Parser, Subcommand};

pub use commands::{SeedOverrides, cmd_check, cmd_init, cmd_seed, cmd_verify};

/// lspa-admin - Account bootstrap tool for the LSPA platform
#[derive(Parser)]
#[command(name = "lspa-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the administrator account if it does not exist
    #[command(alias = "provision")]
    Seed {
        /// Override the configured administrator email
        #[arg(long)]
        email: Option<String>,

        /// Override the configured administrator username
        #[arg(long)]
        username: Option<String>,

        /// Override the configured administrator password
        #[arg(long)]
        password: Option<String>,

        /// Override the configured role (DIRECTEUR, ENSEIGNANT, SECRETAIRE)
        #[arg(long)]
        role: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify credentials and print the session identity
    #[command(alias = "v")]
    Verify {
        username: String,
        password: String,
    },

    /// Connect to the store and ping it
    Check,

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}
