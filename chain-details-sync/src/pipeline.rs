//! End-to-end sync: registry, chain descriptors, icons, merged output.
//!
//! Chains are processed strictly one at a time with a pause between them so
//! upstream hosts are not hammered. A chain that cannot be fetched is
//! skipped; only a registry failure or an output I/O failure aborts the run.

use anyhow::{Context, Result};
use chain_details::store::write_json;
use chain_details::{ChainDescriptor, ChainDetails, ChainIcon, ContractsRegistry};
use reqwest::Client;

use crate::config::Config;
use crate::{fetcher, icons};

/// Outcome of a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Chains fetched and merged in this run.
    pub processed: usize,
    /// Chains whose descriptor could not be fetched.
    pub skipped: usize,
    /// Chains in the merged output, including earlier runs.
    pub total: usize,
}

/// Build the HTTP client shared by every request of a run.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")
}

/// Fetch the registry and return it together with its qualifying chain IDs.
///
/// # Errors
///
/// See [`fetcher::fetch_registry`].
pub async fn qualifying(
    client: &Client,
    config: &Config,
) -> Result<(ContractsRegistry, Vec<String>)> {
    let registry = fetcher::fetch_registry(client, config).await?;
    let chain_ids = registry.qualifying_ids();
    tracing::info!(
        registry = registry.len(),
        qualifying = chain_ids.len(),
        "contracts registry loaded"
    );
    Ok((registry, chain_ids))
}

/// Fetch one chain and resolve its icon.
///
/// # Errors
///
/// See [`fetcher::fetch_chain_details`].
pub async fn build_chain(
    client: &Client,
    config: &Config,
    chain_id: &str,
) -> Result<ChainDescriptor> {
    let mut details = fetcher::fetch_chain_details(client, config, chain_id).await?;
    let names = details.icon_candidates();
    let icon = icons::resolve_icon(client, config, &names).await;
    details.icon = Some(ChainIcon::Resolved(icon));
    Ok(details)
}

/// Run the whole pipeline once.
///
/// Nothing is written unless the registry was fetched and the existing
/// chain details file (if any) parsed.
///
/// # Errors
///
/// Returns an error if the registry cannot be fetched, the existing output
/// cannot be loaded, or either output file cannot be written.
pub async fn run(client: &Client, config: &Config) -> Result<Summary> {
    let (registry, chain_ids) = qualifying(client, config).await?;

    let details_path = &config.output.chain_details_path;
    let mut details = ChainDetails::load(details_path)
        .with_context(|| format!("loading existing chain details {}", details_path.display()))?;

    let mut summary = Summary::default();
    for (i, chain_id) in chain_ids.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(config.timing.delay()).await;
        }

        tracing::info!(chain_id = %chain_id, "fetching chain details");
        match build_chain(client, config, chain_id).await {
            Ok(descriptor) => {
                details.insert(chain_id.as_str(), &descriptor)?;
                summary.processed += 1;
            }
            Err(e) => {
                summary.skipped += 1;
                tracing::warn!(chain_id = %chain_id, error = %e, "skipping chain");
            }
        }
    }

    details
        .save(details_path)
        .with_context(|| format!("saving chain details {}", details_path.display()))?;
    let contracts_path = &config.output.contracts_path;
    write_json(contracts_path, &registry)
        .with_context(|| format!("saving contracts registry {}", contracts_path.display()))?;

    summary.total = details.len();
    tracing::info!(
        processed = summary.processed,
        skipped = summary.skipped,
        total = summary.total,
        "sync finished"
    );
    Ok(summary)
}
