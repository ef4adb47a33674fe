//! CLI interface module
//!
//! `add` and `get` talk to the configured database directly, so they work
//! whether or not a server is running.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::storage::{LinkStore, StorageFactory};
use commands::{add_link, generate_config, get_link};

/// 命令行写入记录时使用的来源地址
pub const CLI_ORIGIN: &str = "local";

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::TshortError> for CliError {
    fn from(err: crate::errors::TshortError) -> Self {
        use crate::errors::TshortError;
        match err {
            TshortError::Validation(_) | TshortError::NotFound(_) => {
                CliError::CommandError(err.format_simple())
            }
            _ => CliError::StorageError(err.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    if let Commands::ConfigGen { output } = cmd {
        return generate_config(output).await;
    }

    let storage = StorageFactory::create(&config.database)
        .await
        .map_err(|e| CliError::StorageError(e.format_simple()))?;
    let store: Arc<dyn LinkStore> = storage;

    match cmd {
        Commands::Add { url } => add_link(store, config.shortener.hash_len, &url).await,
        Commands::Get { id } => get_link(store, &id).await,
        Commands::ConfigGen { .. } => unreachable!("handled above"),
        Commands::Serve => Err(CliError::CommandError(
            "serve is not a CLI command".to_string(),
        )),
    }
}
