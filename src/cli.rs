use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::api::server_config::{DEFAULT_HOST, DEFAULT_PORT};

/// Wallet risk dataset builder and lookup service
#[derive(Debug, Parser)]
#[command(name = "wallet_risk", version, about = "Wallet risk dataset builder and lookup service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Consolidate a raw feed bundle into a dataset snapshot
    Build {
        /// Concatenated feed objects
        #[arg(long)]
        input: PathBuf,
        /// Snapshot path; defaults to the configured dataset path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve the HTTP lookup API
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Verify one address and print the result as JSON
    Lookup { address: String },
    /// Print the dataset metadata as JSON
    Metadata,
}
