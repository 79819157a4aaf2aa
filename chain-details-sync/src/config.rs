//! Runtime configuration loaded from `chain-details.toml`.
//!
//! Every field is optional. When no config file is present the built-in
//! defaults point at the public upstream sources and write into the current
//! directory.
//!
//! ```toml
//! trusted_providers = ["infura", "alchemy"]
//!
//! [timing]
//! delay_ms = 2000
//!
//! [output]
//! chain_details_path = "data/chainDetails.json"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chain_details::Testnets;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream locations.
    pub sources: Sources,
    /// Output file locations.
    pub output: Output,
    /// Timeouts and rate limiting.
    pub timing: Timing,
    /// Chain IDs always flagged `mainnet: false`.
    pub testnets: Testnets,
    /// RPC URLs containing any of these substrings (case-insensitive) are
    /// assumed live and never probed.
    pub trusted_providers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Sources::default(),
            output: Output::default(),
            timing: Timing::default(),
            testnets: Testnets::default(),
            trusted_providers: vec!["infura".to_owned()],
        }
    }
}

/// Upstream data sources.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Sources {
    /// Contracts registry document.
    pub contracts_url: String,
    /// Directory holding `eip155-<id>.json` chain descriptors.
    pub chains_url: String,
    /// Directory holding `<name>.json` icon descriptors.
    pub icons_url: String,
    /// Directory holding `<name>.svg` colored icons.
    pub crypto_icons_url: String,
    /// Directory holding `<name>/info/logo.png` logos.
    pub trust_wallet_icons_url: String,
    /// Icon used when no source has one.
    pub default_icon_url: String,
    /// Prefix that replaces `ipfs://` in icon URLs.
    pub ipfs_gateway: String,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            contracts_url:
                "https://raw.githubusercontent.com/ProphetFund/peanut-contracts/main/contracts.json"
                    .to_owned(),
            chains_url: "https://raw.githubusercontent.com/ethereum-lists/chains/master/_data/chains"
                .to_owned(),
            icons_url: "https://raw.githubusercontent.com/ethereum-lists/chains/master/_data/icons"
                .to_owned(),
            crypto_icons_url:
                "https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/svg/color"
                    .to_owned(),
            trust_wallet_icons_url: "https://raw.githubusercontent.com/trustwallet/assets/8ee07e9d791bec6c3ada3cfac73ddfdc4f4a40b7/blockchains".to_owned(),
            default_icon_url: "https://raw.githubusercontent.com/spothq/cryptocurrency-icons/master/svg/color/generic.svg".to_owned(),
            ipfs_gateway: "https://ipfs.io/ipfs/".to_owned(),
        }
    }
}

/// Output file locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Merged chain details.
    pub chain_details_path: PathBuf,
    /// Copy of the contracts registry.
    pub contracts_path: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            chain_details_path: PathBuf::from("chainDetails.json"),
            contracts_path: PathBuf::from("contracts.json"),
        }
    }
}

/// Timeouts and rate limiting.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Timeout for registry, descriptor and icon requests.
    pub request_timeout_secs: u64,
    /// Timeout for a single RPC liveness probe.
    pub probe_timeout_secs: u64,
    /// Pause between consecutive chains.
    pub delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            probe_timeout_secs: 5,
            delay_ms: 1_000,
        }
    }
}

impl Timing {
    /// Timeout for non-probe requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout for a liveness probe.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    /// Delay between chains.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Returns [`Config::default`] if the file does not exist,
    /// allowing the binary to work without any config.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Whether `rpc` belongs to a trusted provider.
    #[must_use]
    pub fn is_trusted(&self, rpc: &str) -> bool {
        let rpc = rpc.to_lowercase();
        self.trusted_providers
            .iter()
            .any(|provider| rpc.contains(&provider.to_lowercase()))
    }
}
