//! The contracts registry document.
//!
//! Maps a stringified chain ID to a record of deployment flags such as
//! `{"v3": "0x...", "v4": "0x...", "Bv4": "0x..."}`. Only the truthiness of
//! the flags matters here; the document itself is written back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Contracts registry keyed by stringified chain ID.
///
/// Stored as raw JSON so unknown fields survive a round trip. Key order is
/// the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractsRegistry(Map<String, Value>);

impl ContractsRegistry {
    /// Wrap an already parsed registry document.
    #[must_use]
    pub const fn new(entries: Map<String, Value>) -> Self {
        Self(entries)
    }

    /// Number of chain entries in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw record for `chain_id`, if present.
    #[must_use]
    pub fn get(&self, chain_id: &str) -> Option<&Value> {
        self.0.get(chain_id)
    }

    /// Chain IDs with a `v3` deployment, or with both `v4` and `Bv4`.
    ///
    /// Returned in document order.
    #[must_use]
    pub fn qualifying_ids(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, record)| qualifies(record))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

fn qualifies(record: &Value) -> bool {
    let flag = |key: &str| record.get(key).is_some_and(is_truthy);
    flag("v3") || (flag("v4") && flag("Bv4"))
}

/// JSON truthiness: `null`, `false`, zero and empty strings, arrays and
/// objects are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => is_nonzero(n),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[allow(clippy::float_cmp, reason = "exact zero is the only falsy number")]
fn is_nonzero(n: &Number) -> bool {
    n.as_f64().is_some_and(|f| f != 0.0)
}
