//! Resolved chain icons.

use serde::{Deserialize, Serialize};

/// Where to fetch a chain's icon and what kind of image it is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRecord {
    /// Absolute HTTP(S) URL of the image.
    pub url: String,
    /// Image format as declared by the source (`png`, `svg`, ...).
    pub format: String,
}

impl IconRecord {
    /// Create a record with an arbitrary format.
    pub fn new(url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: format.into(),
        }
    }

    /// An SVG icon.
    pub fn svg(url: impl Into<String>) -> Self {
        Self::new(url, "svg")
    }

    /// A PNG icon.
    pub fn png(url: impl Into<String>) -> Self {
        Self::new(url, "png")
    }
}

/// Rewrite `ipfs://` URIs onto an HTTP gateway such as `https://ipfs.io/ipfs/`.
#[must_use]
pub fn rewrite_ipfs(url: &str, gateway: &str) -> String {
    url.replace("ipfs://", gateway)
}
