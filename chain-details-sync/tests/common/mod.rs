#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::path::Path;

use chain_details_sync::config::{Config, Output, Sources, Timing};
use reqwest::Client;

/// A config whose every upstream lives on the mock server at `uri` and whose
/// outputs land in `dir`.
pub fn mock_config(uri: &str, dir: &Path) -> Config {
    Config {
        sources: Sources {
            contracts_url: format!("{uri}/contracts.json"),
            chains_url: format!("{uri}/chains"),
            icons_url: format!("{uri}/icons"),
            crypto_icons_url: format!("{uri}/svg"),
            trust_wallet_icons_url: format!("{uri}/trust/"),
            default_icon_url: format!("{uri}/generic.svg"),
            ipfs_gateway: "https://ipfs.io/ipfs/".to_owned(),
        },
        output: Output {
            chain_details_path: dir.join("chainDetails.json"),
            contracts_path: dir.join("contracts.json"),
        },
        timing: Timing {
            request_timeout_secs: 5,
            probe_timeout_secs: 1,
            delay_ms: 0,
        },
        ..Config::default()
    }
}

/// A plain client; per-request timeouts come from the config.
pub fn client() -> Client {
    Client::new()
}
