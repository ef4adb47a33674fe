//! `add` / `get` commands

use std::sync::Arc;

use colored::Colorize;

use crate::interfaces::cli::{CLI_ORIGIN, CliError};
use crate::services::{LinkService, RedirectResolver};
use crate::storage::LinkStore;
use crate::utils::normalize_url;

pub async fn add_link(
    store: Arc<dyn LinkStore>,
    base_len: usize,
    raw_url: &str,
) -> Result<(), CliError> {
    let url = normalize_url(raw_url)?;
    let service = LinkService::new(store, base_len)?;
    let id = service.assign(&url, CLI_ORIGIN).await?;

    println!(
        "{} Short link: {} -> {}",
        "✓".bold().green(),
        id.cyan(),
        url.blue().underline()
    );
    Ok(())
}

pub async fn get_link(store: Arc<dyn LinkStore>, id: &str) -> Result<(), CliError> {
    let resolver = RedirectResolver::new(store);
    let url = resolver.resolve(id).await?;

    println!(
        "{} {} -> {}",
        "→".bold().blue(),
        id.cyan(),
        url.blue().underline()
    );
    Ok(())
}
