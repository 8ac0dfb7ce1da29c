//! Combination analysis: which strike sequences a fighter throws and eats.
//!
//! Stored keys such as `LeftJabHi_LeftJabHi_RightStraightHi` are rendered
//! as "Double Left Jab To The Head to Right Straight To The Head", filtered
//! to counters seen more than once, and ranked by share of the side total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::accuracy;
use crate::models::{CombinationRecord, ABSORBED_PREFIX};

/// Entries kept in each ranked list.
pub const TOP_COMBOS: usize = 10;

/// Punch filter used by the "three punches or more" view.
pub const MIN_PUNCHES_FILTER: usize = 3;

const PUNCH_KEYWORDS: [&str; 6] = ["jab", "straight", "hook", "uppercut", "overhand", "cross"];

const STRIKE_NAMES: &[(&str, &str)] = &[
    ("LeftBodyKick", "Left Body Kick"),
    ("RightBodyKick", "Right Body Kick"),
    ("LeftHighKick", "Left High Kick"),
    ("RightHighKick", "Right High Kick"),
    ("LeftHookHi", "Left Hook To The Head"),
    ("RightHookHi", "Right Hook To The Head"),
    ("LeftHookLo", "Left Hook To The Body"),
    ("RightHookLo", "Right Hook To The Body"),
    ("LeftStraightHi", "Left Straight To The Head"),
    ("RightStraightHi", "Right Straight To The Head"),
    ("LeftStraightLo", "Left Straight To The Body"),
    ("RightStraightLo", "Right Straight To The Body"),
    ("LeftUppercutHi", "Left Uppercut To The Head"),
    ("RightUppercutHi", "Right Uppercut To The Head"),
    ("LeftUppercutLo", "Left Uppercut To The Body"),
    ("RightUppercutLo", "Right Uppercut To The Body"),
    ("LeftOverhand", "Left Overhand"),
    ("RightOverhand", "Right Overhand"),
    ("LeftSpinBackFist", "Left Spinning Backfist To The Head"),
    ("RightSpinBackFist", "Right Spinning Backfist To The Head"),
    ("LeftElbow", "Left Elbow"),
    ("RightElbow", "Right Elbow"),
    ("LeftKnee", "Left Knee"),
    ("RightKnee", "Right Knee"),
    ("LeftHeadKick", "Left Head Kick"),
    ("RightHeadKick", "Right Head Kick"),
    ("LeftLegKick", "Left Leg Kick"),
    ("RightLegKick", "Right Leg Kick"),
    ("LeftJabHi", "Left Jab To The Head"),
    ("RightJabHi", "Right Jab To The Head"),
    ("LeftJabLo", "Left Jab To The Body"),
    ("RightJabLo", "Right Jab To The Body"),
    ("LeftCross", "Left Cross"),
    ("RightCross", "Right Cross"),
    ("LeftJab", "Left Jab"),
    ("RightJab", "Right Jab"),
    ("LeftStraight", "Left Straight"),
    ("RightStraight", "Right Straight"),
    ("LeftHook", "Left Hook"),
    ("RightHook", "Right Hook"),
    ("LeftUppercut", "Left Uppercut"),
    ("RightUppercut", "Right Uppercut"),
];

fn strike_name(token: &str) -> &str {
    STRIKE_NAMES
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, name)| *name)
        .unwrap_or(token)
}

fn repeat_label(count: usize, strike: &str) -> String {
    match count {
        1 => strike.to_string(),
        2 => format!("Double {strike}"),
        3 => format!("Triple {strike}"),
        n => format!("{n}x {strike}"),
    }
}

/// Human-readable name for a stored combination key.
///
/// Unknown tokens pass through unchanged and consecutive repeats collapse
/// into "Double", "Triple" or "Nx".
pub fn readable_name(key: &str) -> String {
    let cleaned = key.replacen("ABS__", "", 1);
    let parts: Vec<&str> = cleaned
        .split('_')
        .map(strike_name)
        .filter(|p| !p.trim().is_empty())
        .collect();

    let mut grouped: Vec<String> = Vec::new();
    let mut i = 0;
    while i < parts.len() {
        let run = parts[i..].iter().take_while(|p| *p == &parts[i]).count();
        grouped.push(repeat_label(run, parts[i]));
        i += run;
    }

    grouped.join(" to ")
}

/// Case-insensitive count of punch keywords in a readable name.
pub fn punch_count(combo: &str) -> usize {
    let lower = combo.to_lowercase();
    PUNCH_KEYWORDS
        .iter()
        .map(|kw| lower.matches(kw).count())
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Thrown,
    Absorbed,
}

/// Which list a counter belongs to, if any.
fn classify(key: &str, count: f64) -> Option<Side> {
    if count <= 1.0 {
        return None;
    }
    let underscores = key.matches('_').count();
    if key.starts_with(ABSORBED_PREFIX) {
        (underscores > 2).then_some(Side::Absorbed)
    } else {
        (underscores >= 2).then_some(Side::Thrown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboShare {
    pub combo: String,
    pub count: f64,
    /// Share of the side total, in percent.
    pub percentage: f64,
}

/// Ranked combinations for one direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboSide {
    pub total: f64,
    pub distinct: usize,
    pub most_common: Option<String>,
    pub top: Vec<ComboShare>,
}

impl ComboSide {
    fn rank(counts: BTreeMap<String, f64>, min_punches: usize) -> Self {
        let kept: Vec<(String, f64)> = counts
            .into_iter()
            .filter(|(combo, _)| punch_count(combo) >= min_punches)
            .collect();
        let total: f64 = kept.iter().map(|(_, n)| n).sum();

        let mut ranked: Vec<ComboShare> = kept
            .into_iter()
            .map(|(combo, count)| ComboShare {
                percentage: accuracy(count, total),
                combo,
                count,
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.count
                .total_cmp(&a.count)
                .then_with(|| a.combo.cmp(&b.combo))
        });

        let distinct = ranked.len();
        ranked.truncate(TOP_COMBOS);

        Self {
            total,
            distinct,
            most_common: ranked.first().map(|c| c.combo.clone()),
            top: ranked,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComboAnalysis {
    pub fighter_code: String,
    pub min_punches: usize,
    pub thrown: ComboSide,
    pub absorbed: ComboSide,
}

/// Rank a fighter's thrown and absorbed combinations.
///
/// Only counters above 1 are considered. Keys that render to the same name
/// are summed. `min_punches` of 0 keeps everything.
pub fn analyze(record: &CombinationRecord, min_punches: usize) -> ComboAnalysis {
    let mut thrown: BTreeMap<String, f64> = BTreeMap::new();
    let mut absorbed: BTreeMap<String, f64> = BTreeMap::new();

    for (key, count) in record.numeric() {
        let bucket = match classify(key, count) {
            Some(Side::Thrown) => &mut thrown,
            Some(Side::Absorbed) => &mut absorbed,
            None => continue,
        };
        *bucket.entry(readable_name(key)).or_insert(0.0) += count;
    }

    ComboAnalysis {
        fighter_code: record.fighter_code.clone(),
        min_punches,
        thrown: ComboSide::rank(thrown, min_punches),
        absorbed: ComboSide::rank(absorbed, min_punches),
    }
}
