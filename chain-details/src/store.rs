//! On-disk chain details and atomic JSON writes.
//!
//! The chain details file only ever grows: entries are added or overwritten
//! by chain ID, never removed.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::descriptor::ChainDescriptor;

/// Errors reading or writing JSON artifacts.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid chain details JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The value could not be encoded as JSON.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// A chain descriptor could not be encoded as JSON.
    #[error("failed to encode chain {chain_id}: {source}")]
    Entry {
        /// Chain the descriptor belongs to.
        chain_id: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing, creating the parent directory, or renaming into place failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Merged chain details keyed by stringified chain ID.
///
/// Entries are kept as raw JSON. Entries written by earlier runs are carried
/// through exactly as they were read, even when they no longer match the
/// [`ChainDescriptor`] layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainDetails(BTreeMap<String, Value>);

impl ChainDetails {
    /// Load chain details from `path`.
    ///
    /// Returns an empty set if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or is not a
    /// JSON object. A broken file is never silently replaced, since that
    /// would drop every entry merged by earlier runs.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_owned(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Persist to `path` atomically.
    ///
    /// # Errors
    ///
    /// See [`write_json`].
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        write_json(path, self)
    }

    /// Add or replace the entry for `chain_id`, returning the old raw entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be encoded as JSON.
    pub fn insert(
        &mut self,
        chain_id: impl Into<String>,
        descriptor: &ChainDescriptor,
    ) -> Result<Option<Value>, StoreError> {
        let chain_id = chain_id.into();
        let value = serde_json::to_value(descriptor).map_err(|source| StoreError::Entry {
            chain_id: chain_id.clone(),
            source,
        })?;
        Ok(self.0.insert(chain_id, value))
    }

    /// The entry for `chain_id` as a descriptor.
    ///
    /// `None` if the entry is missing or does not have the descriptor
    /// layout; see [`ChainDetails::get_raw`] for the latter.
    #[must_use]
    pub fn get(&self, chain_id: &str) -> Option<ChainDescriptor> {
        ChainDescriptor::deserialize(self.0.get(chain_id)?).ok()
    }

    /// The entry for `chain_id` exactly as stored.
    #[must_use]
    pub fn get_raw(&self, chain_id: &str) -> Option<&Value> {
        self.0.get(chain_id)
    }

    /// Stored chain IDs, in sorted order.
    pub fn chain_ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of stored chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Write `value` as pretty JSON to `path` atomically (temp file + rename).
///
/// # Errors
///
/// Returns an error if the value cannot be encoded, or the parent directory,
/// temp file or rename fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_owned(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut body = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
        path: path.to_owned(),
        source,
    })?;
    body.push(b'\n');

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    std::fs::write(&tmp, &body).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::descriptor::ChainIcon;
    use crate::icon::IconRecord;

    fn descriptor(name: &str) -> ChainDescriptor {
        ChainDescriptor {
            name: Some(name.into()),
            rpc: vec![format!("https://rpc.{name}.org")],
            mainnet: Some(true),
            icon: Some(ChainIcon::Resolved(IconRecord::png("https://x/default.png"))),
            ..ChainDescriptor::default()
        }
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let details = ChainDetails::load(&dir.path().join("chainDetails.json")).unwrap();
        assert!(details.is_empty(), "missing file should load empty");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chainDetails.json");

        let mut details = ChainDetails::default();
        details.insert("1", &descriptor("ethereum")).unwrap();
        details.insert("137", &descriptor("polygon")).unwrap();
        details.save(&path).unwrap();

        let loaded = ChainDetails::load(&path).unwrap();
        assert_eq!(loaded, details);
        assert_eq!(loaded.chain_ids().collect::<Vec<_>>(), vec!["1", "137"]);
        assert!(!path.with_extension("json.tmp").exists(), "temp file left behind");
    }

    #[test]
    fn insert_overwrites_and_keeps_others() {
        let mut details = ChainDetails::default();
        details.insert("1", &descriptor("old")).unwrap();
        details.insert("10", &descriptor("optimism")).unwrap();

        let previous = details.insert("1", &descriptor("new")).unwrap();
        assert_eq!(previous.map(|v| v["name"].clone()), Some(json!("old")));
        assert_eq!(details.len(), 2);
        assert_eq!(details.get("1").and_then(|d| d.name), Some("new".to_owned()));
        assert!(details.get("10").is_some(), "untouched entry was dropped");
    }

    #[test]
    fn saving_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainDetails.json");

        let mut details = ChainDetails::default();
        details.insert("5", &descriptor("goerli")).unwrap();
        details.save(&path).unwrap();
        let first = std::fs::read(&path).unwrap();

        ChainDetails::load(&path).unwrap().save(&path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainDetails.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ChainDetails::load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }), "expected a parse error, got {err:?}");
    }

    #[test]
    fn foreign_entries_survive_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chainDetails.json");
        let earlier = json!({
            "7": {"name": "Odd", "chain": 1},
            "8": {"name": "No RPC key"}
        });
        write_json(&path, &earlier).unwrap();

        let mut details = ChainDetails::load(&path).unwrap();
        assert_eq!(details.get("7"), None);
        assert_eq!(details.get_raw("7"), Some(&json!({"name": "Odd", "chain": 1})));

        details.insert("1", &descriptor("ethereum")).unwrap();
        details.save(&path).unwrap();

        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["7"], earlier["7"]);
        assert_eq!(value["8"], json!({"name": "No RPC key"}));
        assert_eq!(value["1"]["name"], json!("ethereum"));
    }

    #[test]
    fn write_json_accepts_raw_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contracts.json");
        write_json(&path, &json!({"1": {"v3": "0x1"}})).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, json!({"1": {"v3": "0x1"}}));
    }
}
