//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// t-short: the link un-longerer
#[derive(Parser, Debug)]
#[command(name = "tshort")]
#[command(version)]
#[command(about = "A URL shortener with deterministic, digest-derived short links", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Shorten a URL directly against the configured database
    Add {
        /// URL to shorten; `http://` is prefixed when no scheme is given
        url: String,
    },

    /// Print the URL behind a short identifier
    Get {
        /// Short identifier
        id: String,
    },

    /// Generate a sample configuration file
    ConfigGen {
        /// Output path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}
