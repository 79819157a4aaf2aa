//! Contracts registry and chain descriptor retrieval.
//!
//! For each qualifying chain the fetcher:
//! 1. Downloads `eip155-<id>.json` from the chains directory.
//! 2. Probes every listed RPC and keeps only the live ones, in order.
//! 3. Flags the chain as mainnet unless it is a known testnet.

use anyhow::{Context, Result, bail};
use chain_details::{ChainDescriptor, ContractsRegistry};
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::liveness;

/// Join a base directory URL and a relative file path.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}

/// URL of the descriptor file for `chain_id`.
#[must_use]
pub fn chain_file_url(base: &str, chain_id: &str) -> String {
    join_url(base, &format!("eip155-{chain_id}.json"))
}

/// Download the contracts registry.
///
/// # Errors
///
/// Returns an error on transport failure, any status other than 200, a body
/// that is not a JSON object, or an empty object. The caller treats this as
/// fatal, so a truncated upstream never replaces the local copy.
pub async fn fetch_registry(client: &Client, config: &Config) -> Result<ContractsRegistry> {
    let url = &config.sources.contracts_url;
    let response = client
        .get(url)
        .timeout(config.timing.request_timeout())
        .send()
        .await
        .with_context(|| format!("requesting contracts registry {url}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        bail!("contracts registry {url} returned {status}");
    }

    let registry = response
        .json::<ContractsRegistry>()
        .await
        .with_context(|| format!("parsing contracts registry {url}"))?;
    if registry.is_empty() {
        bail!("contracts registry {url} is empty");
    }
    Ok(registry)
}

/// Download the raw descriptor for `chain_id`.
///
/// # Errors
///
/// Returns an error on transport failure, a non-200 status, or an
/// unparsable body.
pub async fn fetch_descriptor(
    client: &Client,
    config: &Config,
    chain_id: &str,
) -> Result<ChainDescriptor> {
    let url = chain_file_url(&config.sources.chains_url, chain_id);
    let response = client
        .get(&url)
        .timeout(config.timing.request_timeout())
        .send()
        .await
        .with_context(|| format!("requesting {url}"))?;

    let status = response.status();
    if status != StatusCode::OK {
        bail!("{url} returned {status}");
    }

    response
        .json::<ChainDescriptor>()
        .await
        .with_context(|| format!("parsing {url}"))
}

/// Download the descriptor for `chain_id`, drop dead RPCs and set the
/// `mainnet` flag.
///
/// A chain with no live RPC left is still returned, with an empty list.
///
/// # Errors
///
/// Propagates [`fetch_descriptor`] failures; the caller skips the chain.
pub async fn fetch_chain_details(
    client: &Client,
    config: &Config,
    chain_id: &str,
) -> Result<ChainDescriptor> {
    let mut details = fetch_descriptor(client, config, chain_id).await?;

    let candidates = std::mem::take(&mut details.rpc);
    let total = candidates.len();
    details.rpc = liveness::live_endpoints(client, config, candidates).await;

    if details.rpc.is_empty() {
        tracing::warn!(chain_id, total, "no live RPC endpoints found");
    } else {
        tracing::info!(chain_id, live = details.rpc.len(), total, "RPC endpoints checked");
    }

    details.mainnet = Some(config.testnets.is_mainnet(chain_id));
    Ok(details)
}
