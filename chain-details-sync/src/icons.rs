//! Icon lookup across upstream icon repositories.
//!
//! Each candidate name is tried against every [`IconSource`] in priority
//! order; the first hit wins and nothing after it is requested. When every
//! name misses, the configured default icon is used.

use chain_details::IconRecord;
use chain_details::icon::rewrite_ipfs;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::config::{Config, Sources};
use crate::fetcher::join_url;

/// One entry of an ethereum-lists `_data/icons/<name>.json` file.
#[derive(Debug, Deserialize)]
struct IconEntry {
    url: String,
    format: String,
}

/// An upstream icon repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// ethereum-lists icon descriptors: `<name>.json`, a list whose first
    /// entry gives the URL and format.
    ChainIcons,
    /// cryptocurrency-icons colored SVGs: `<name>.svg`.
    CryptoIcons,
    /// Trust Wallet assets: `<name>/info/logo.png`.
    TrustWallet,
}

impl IconSource {
    /// All sources, highest priority first.
    pub const ALL: [Self; 3] = [Self::ChainIcons, Self::CryptoIcons, Self::TrustWallet];

    /// Short label used in logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChainIcons => "chain-icons",
            Self::CryptoIcons => "crypto-icons",
            Self::TrustWallet => "trust-wallet",
        }
    }

    /// Where this source keeps the icon for `name`.
    #[must_use]
    pub fn url(self, sources: &Sources, name: &str) -> String {
        match self {
            Self::ChainIcons => join_url(&sources.icons_url, &format!("{name}.json")),
            Self::CryptoIcons => join_url(&sources.crypto_icons_url, &format!("{name}.svg")),
            Self::TrustWallet => {
                join_url(&sources.trust_wallet_icons_url, &format!("{name}/info/logo.png"))
            }
        }
    }

    /// Look `name` up in this source.
    ///
    /// Returns `None` on any miss: transport error, non-200 status, or an
    /// icon descriptor that is empty or malformed.
    pub async fn probe(self, client: &Client, config: &Config, name: &str) -> Option<IconRecord> {
        let url = self.url(&config.sources, name);
        tracing::debug!(name, source = self.label(), %url, "trying icon source");

        let response = match client
            .get(&url)
            .timeout(config.timing.request_timeout())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(name, source = self.label(), error = %e, "icon request failed");
                return None;
            }
        };
        if response.status() != StatusCode::OK {
            return None;
        }

        match self {
            Self::ChainIcons => {
                // Only the first entry is used, so later ones are not validated.
                let entries = match response.json::<Vec<Value>>().await {
                    Ok(entries) => entries,
                    Err(e) => {
                        tracing::warn!(name, %url, error = %e, "malformed icon descriptor");
                        return None;
                    }
                };
                let Some(first) = entries.into_iter().next() else {
                    tracing::warn!(name, %url, "empty icon descriptor");
                    return None;
                };
                let first = match IconEntry::deserialize(first) {
                    Ok(first) => first,
                    Err(e) => {
                        tracing::warn!(name, %url, error = %e, "malformed icon descriptor");
                        return None;
                    }
                };
                Some(IconRecord::new(
                    rewrite_ipfs(&first.url, &config.sources.ipfs_gateway),
                    first.format,
                ))
            }
            Self::CryptoIcons => Some(IconRecord::svg(response.url().as_str())),
            Self::TrustWallet => Some(IconRecord::png(response.url().as_str())),
        }
    }
}

/// Resolve an icon for a chain known by `names`.
///
/// Never fails: falls back to the configured default icon as a PNG.
pub async fn resolve_icon(client: &Client, config: &Config, names: &[String]) -> IconRecord {
    for name in names {
        for source in IconSource::ALL {
            if let Some(icon) = source.probe(client, config, name).await {
                tracing::info!(
                    name = %name,
                    source = source.label(),
                    url = %icon.url,
                    "icon resolved"
                );
                return icon;
            }
        }
    }

    tracing::warn!(?names, "no icon found, using default");
    IconRecord::png(config.sources.default_icon_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_layouts() {
        let sources = Sources {
            icons_url: "https://a/icons".into(),
            crypto_icons_url: "https://b/svg/color".into(),
            trust_wallet_icons_url: "https://c/blockchains/".into(),
            ..Sources::default()
        };
        assert_eq!(
            IconSource::ChainIcons.url(&sources, "ethereum"),
            "https://a/icons/ethereum.json"
        );
        assert_eq!(
            IconSource::CryptoIcons.url(&sources, "eth"),
            "https://b/svg/color/eth.svg"
        );
        assert_eq!(
            IconSource::TrustWallet.url(&sources, "ethereum"),
            "https://c/blockchains/ethereum/info/logo.png"
        );
    }

    #[test]
    fn priority_order() {
        assert_eq!(
            IconSource::ALL.map(IconSource::label),
            ["chain-icons", "crypto-icons", "trust-wallet"]
        );
    }
}
