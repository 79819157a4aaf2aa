//! RPC endpoint liveness probing.
//!
//! A probe is a single `eth_blockNumber` call. Only the HTTP status is
//! inspected: 200 means live. Every failure is swallowed and reported as
//! dead so one bad endpoint never aborts a run.

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::config::Config;

/// JSON-RPC body sent to each endpoint.
fn probe_body() -> Value {
    json!({
        "jsonrpc": "2.0",
        "method": "eth_blockNumber",
        "params": [],
        "id": 1,
    })
}

/// Whether `rpc` answers a liveness probe.
///
/// Trusted providers are assumed live without a request.
pub async fn is_live(client: &Client, config: &Config, rpc: &str) -> bool {
    if config.is_trusted(rpc) {
        tracing::debug!(rpc, "trusted provider, not probing");
        return true;
    }

    tracing::debug!(rpc, "probing RPC");
    let result = client
        .post(rpc)
        .timeout(config.timing.probe_timeout())
        .json(&probe_body())
        .send()
        .await;

    match result {
        Ok(response) if response.status() == StatusCode::OK => true,
        Ok(response) => {
            tracing::debug!(rpc, status = %response.status(), "RPC not live");
            false
        }
        Err(e) => {
            tracing::debug!(rpc, error = %e, "RPC probe failed");
            false
        }
    }
}

/// Keep the endpoints of `rpcs` that pass [`is_live`], in their original
/// order. Probes run one after another.
pub async fn live_endpoints(client: &Client, config: &Config, rpcs: Vec<String>) -> Vec<String> {
    let mut live = Vec::with_capacity(rpcs.len());
    for rpc in rpcs {
        if is_live(client, config, &rpc).await {
            live.push(rpc);
        }
    }
    live
}
