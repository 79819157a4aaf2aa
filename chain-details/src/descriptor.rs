//! Per-chain descriptors in the ethereum-lists `eip155-<id>.json` layout.
//!
//! Only the fields this crate reads or rewrites are typed. Everything else
//! (`nativeCurrency`, `explorers`, `faucets`, ...) is kept in
//! [`ChainDescriptor::extra`] and written back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::icon::IconRecord;

/// The `icon` field of a descriptor.
///
/// Upstream files carry a slug naming an icon file; once the icon has been
/// resolved the slug is replaced by an [`IconRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainIcon {
    /// A resolved icon.
    Resolved(IconRecord),
    /// An upstream icon slug, e.g. `"ethereum"`.
    Slug(String),
    /// Anything else; carried through as-is.
    Other(Value),
}

impl ChainIcon {
    /// The slug, if this icon has not been resolved yet.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Slug(slug) => Some(slug),
            _ => None,
        }
    }
}

/// Metadata for a single chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    /// Display name, e.g. `"Ethereum Mainnet"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Short name, e.g. `"eth"`.
    #[serde(rename = "shortName", default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Snake-case short name found in some older files.
    #[serde(rename = "short_name", default, skip_serializing_if = "Option::is_none")]
    pub legacy_short_name: Option<String>,
    /// Chain slug, e.g. `"ETH"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Icon slug before resolution, icon record after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ChainIcon>,
    /// RPC endpoint URLs.
    #[serde(default)]
    pub rpc: Vec<String>,
    /// `false` for known testnets. Absent until the descriptor is processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mainnet: Option<bool>,
    /// Every other upstream field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChainDescriptor {
    /// Names to look an icon up by, most specific first.
    ///
    /// The icon slug, both short names, the display name and the chain slug,
    /// followed by their lower-cased forms. Empty values and repeats are
    /// dropped.
    #[must_use]
    pub fn icon_candidates(&self) -> Vec<String> {
        let base: Vec<&str> = [
            self.icon.as_ref().and_then(ChainIcon::slug),
            self.legacy_short_name.as_deref(),
            self.short_name.as_deref(),
            self.name.as_deref(),
            self.chain.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect();

        let mut names: Vec<String> = Vec::with_capacity(base.len() * 2);
        let lowered = base.iter().map(|name| name.to_lowercase());
        for name in base.iter().map(|name| (*name).to_owned()).chain(lowered) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
