//! Combination counters (`combinations` collection).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marks a counter for a combination the fighter absorbed.
pub const ABSORBED_PREFIX: &str = "ABS";

/// One fighter's combination counters.
///
/// Keys are strike sequences joined by underscores, e.g.
/// `LeftJabHi_RightStraightHi_LeftHookHi`. Absorbed sequences carry an
/// `ABS__` prefix. Non-numeric values and bookkeeping fields are kept as
/// they arrive and ignored by the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinationRecord {
    #[serde(rename = "fighterCode", default)]
    pub fighter_code: String,
    #[serde(flatten)]
    pub counts: BTreeMap<String, Value>,
}

impl CombinationRecord {
    pub fn new(fighter_code: &str) -> Self {
        Self {
            fighter_code: fighter_code.to_string(),
            counts: BTreeMap::new(),
        }
    }

    /// Builder-style counter insert, mostly for fixtures.
    pub fn with(mut self, key: &str, count: f64) -> Self {
        self.counts.insert(key.to_string(), Value::from(count));
        self
    }

    /// Numeric counters only.
    pub fn numeric(&self) -> impl Iterator<Item = (&str, f64)> {
        self.counts
            .iter()
            .filter_map(|(k, v)| v.as_f64().map(|n| (k.as_str(), n)))
    }
}
