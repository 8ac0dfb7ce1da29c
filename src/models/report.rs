//! Persisted rating reports written by `derive`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MovementRating, OverallRating};

/// One fighter's computed ratings at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingReport {
    pub fighter_code: String,
    pub fighter_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_class: Option<String>,
    /// Whether a weight-class baseline was found for the comparison.
    pub baseline_found: bool,
    pub overall: OverallRating,
    pub movement: MovementRating,
    pub computed_at: DateTime<Utc>,
}
