use std::io::Write;

use anidex_core::config::{ENV_API_BASE, ENV_PAGE_LIMIT, ENV_TIMEOUT_SECS};
use anidex_core::{
    BrowseSession, CatalogProvider, ClientConfig, JikanProvider, PageLoad,
    SearchOutcome,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{Cli, Command};
use crate::render;

/// Value a command-line flag supplies for a config key, if any
fn flag_value(cli: &Cli, key: &str) -> Option<String> {
    match key {
        ENV_API_BASE => cli.api_base.clone(),
        ENV_PAGE_LIMIT => cli.limit.map(|limit| limit.to_string()),
        ENV_TIMEOUT_SECS => cli.timeout_secs.map(|secs| secs.to_string()),
        _ => None,
    }
}

/// Environment config with the command-line flags taking precedence
pub fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    Ok(ClientConfig::from_env_with(|key| flag_value(cli, key))?)
}

/// Like [`resolve_config`], with `base` standing in for the environment
pub fn resolve_config_from<F>(cli: &Cli, base: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(ClientConfig::from_layers(|key| flag_value(cli, key), base)?)
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let provider =
        JikanProvider::new(&config).context("failed to build HTTP client")?;
    info!(api_base = %provider.api_base(), "Using catalog provider");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&provider, &cli.command, &mut out).await
}

/// Run one command against `provider`, writing the listing to `out`.
pub async fn execute<P, W>(
    provider: &P,
    command: &Command,
    out: &mut W,
) -> Result<()>
where
    P: CatalogProvider + ?Sized,
    W: Write,
{
    let listing = command.listing();
    let mut session = BrowseSession::new();

    let load = session.load_page(provider, listing.page).await?;
    if load == PageLoad::Unavailable {
        warn!(
            page = listing.page,
            "Listing unavailable, showing an empty page"
        );
    }

    if let Command::Search { query, .. } = command {
        match session.search(provider, query).await {
            SearchOutcome::Failed { reason } => {
                warn!(%query, %reason, "Search failed");
            }
            outcome => info!(%query, ?outcome, "Search finished"),
        }
    }

    if let Some(field) = listing.sort {
        session.sort_by(field, listing.order);
    }

    let rendered = if listing.json {
        render::render_json(&session)?
    } else {
        render::render_text(&session)
    };
    writeln!(out, "{}", rendered.trim_end())
        .context("failed to write output")?;

    Ok(())
}
