//! CLI command definitions and dispatch for the `rdex` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod catalog;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Browse the creature catalog and run the rosterdex team service.
#[derive(Parser)]
#[command(name = "rdex", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and display the creature catalog.
    #[command(alias = "ls")]
    Catalog,

    /// Start the REST API server.
    Serve {
        /// Port to bind (overrides config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind (overrides config.toml).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
