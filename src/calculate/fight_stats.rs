//! Single-fight view: pace against the class, strike mix, takedowns, round
//! splits, and how each corner's output compares with their career.

use serde::{Deserialize, Serialize};

use super::aggregate::{accuracy, or_one, rate};
use super::category::STEEPNESS;
use super::normalize::{ratio_or, tanh_rating};
use crate::config::ReferenceAverages;
use crate::models::{
    CornerStats, Fight, FighterRecord, FinishMethod, Rating, TotalStats,
    WeightClassBaseline,
};

/// Share above which a strike group counts towards variety.
const VARIETY_SHARE: f64 = 0.1;

/// Class standing strikes landed per minute. Clinch and ground strikes are
/// excluded; zero minutes count as one.
pub fn class_standing_pace(baseline: Option<&WeightClassBaseline>) -> f64 {
    let Some(class) = baseline else {
        return 0.0;
    };
    let standing = class.strikes.total_strikes_landed
        - class.clinch.total_clinch_strikes_made
        - class.ground.total_ground_strikes_made;
    standing / or_one(class.minutes)
}

/// Percent above (positive) or below the class pace; 0 without a pace.
pub fn pace_difference_pct(strikes_per_minute: f64, class_pace: f64) -> f64 {
    if class_pace > 0.0 {
        (strikes_per_minute - class_pace) / class_pace * 100.0
    } else {
        0.0
    }
}

/// Landed strikes grouped the way fight-to-career comparisons read them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrikeMix {
    pub head_kicks: f64,
    pub body_kicks: f64,
    pub leg_kicks: f64,
    pub hooks: f64,
    pub jabs: f64,
    /// Overhands, straights and crosses.
    pub power_strikes: f64,
    pub elbows: f64,
    pub spin_attacks: f64,
}

impl StrikeMix {
    pub fn from_corner(c: &CornerStats) -> Self {
        Self {
            head_kicks: c.head_kicks,
            body_kicks: c.body_kicks,
            leg_kicks: c.leg_kicks,
            hooks: c.hooks,
            jabs: c.jabs,
            power_strikes: c.overhands + c.straights + c.cross,
            elbows: c.elbows,
            spin_attacks: c.spin_back_fists,
        }
    }

    pub fn from_career(t: &TotalStats) -> Self {
        Self {
            head_kicks: t.total_high_kicks_made,
            body_kicks: t.total_body_kicks_made,
            leg_kicks: t.total_leg_kicks_made,
            hooks: t.total_hooks_made,
            jabs: t.total_jabs_made,
            power_strikes: t.total_overhands_made + t.total_straights_made + t.total_cross_make,
            elbows: t.total_elbows_made,
            spin_attacks: t.total_spin_back_fists_made,
        }
    }

    fn values(&self) -> [f64; 8] {
        [
            self.head_kicks,
            self.body_kicks,
            self.leg_kicks,
            self.hooks,
            self.jabs,
            self.power_strikes,
            self.elbows,
            self.spin_attacks,
        ]
    }

    pub fn total(&self) -> f64 {
        self.values().iter().sum()
    }

    /// Groups holding more than a tenth of the total.
    pub fn variety(&self) -> usize {
        let total = self.total();
        if total <= 0.0 {
            return 0;
        }
        self.values()
            .iter()
            .filter(|v| **v / total > VARIETY_SHARE)
            .count()
    }

    /// Percent of strikes aimed at the head.
    pub fn head_ratio(&self) -> f64 {
        accuracy(
            self.head_kicks + self.hooks + self.jabs + self.power_strikes,
            self.total(),
        )
    }

    /// Percent of strikes that are power shots.
    pub fn power_ratio(&self) -> f64 {
        accuracy(self.power_strikes + self.head_kicks + self.elbows, self.total())
    }

    /// Cosine similarity of the two per-minute profiles, in percent.
    pub fn similarity(&self, fight_minutes: f64, other: &StrikeMix, other_minutes: f64) -> f64 {
        let a: Vec<f64> = self.values().iter().map(|v| rate(*v, fight_minutes)).collect();
        let b: Vec<f64> = other
            .values()
            .iter()
            .map(|v| *v / or_one(other_minutes))
            .collect();

        let dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
        let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
        if mag_a > 0.0 && mag_b > 0.0 {
            dot / (mag_a * mag_b) * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    fn of(delta: f64, band: f64) -> Self {
        if delta > band {
            Trend::Positive
        } else if delta < -band {
            Trend::Negative
        } else {
            Trend::Neutral
        }
    }
}

/// One fight-versus-career comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInsight {
    pub label: String,
    pub value: f64,
    pub career: Option<f64>,
    pub delta: f64,
    pub trend: Trend,
}

impl PerformanceInsight {
    fn compare(label: &str, value: f64, career: f64, band: f64) -> Self {
        let delta = value - career;
        Self {
            label: label.to_string(),
            value,
            career: Some(career),
            delta,
            trend: Trend::of(delta, band),
        }
    }
}

/// Strike rate, pattern similarity, variety, head hunting and power ratio
/// for one corner against the fighter's career counters.
pub fn performance_insights(
    corner: &CornerStats,
    fight_minutes: f64,
    career: &FighterRecord,
) -> Vec<PerformanceInsight> {
    let fight = StrikeMix::from_corner(corner);
    let history = StrikeMix::from_career(&career.total());
    let career_minutes = career.minutes_tracked;

    let similarity = fight.similarity(fight_minutes, &history, career_minutes);
    let similarity_trend = if similarity > 75.0 {
        Trend::Positive
    } else if similarity < 50.0 {
        Trend::Negative
    } else {
        Trend::Neutral
    };

    vec![
        PerformanceInsight::compare(
            "Strike Rate",
            rate(fight.total(), fight_minutes),
            rate(history.total(), career_minutes),
            0.1,
        ),
        PerformanceInsight {
            label: "Pattern Similarity".to_string(),
            value: similarity,
            career: None,
            delta: 0.0,
            trend: similarity_trend,
        },
        PerformanceInsight::compare(
            "Strike Variety",
            fight.variety() as f64,
            history.variety() as f64,
            0.0,
        ),
        PerformanceInsight::compare("Head Hunting", fight.head_ratio(), history.head_ratio(), 5.0),
        PerformanceInsight::compare(
            "Power Strike Ratio",
            fight.power_ratio(),
            history.power_ratio(),
            5.0,
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeCount {
    pub name: String,
    pub landed: f64,
}

fn distribution(c: &CornerStats) -> Vec<StrikeCount> {
    [
        ("Jabs", c.jabs),
        ("Straights", c.straights),
        ("Hooks", c.hooks),
        ("Uppercuts", c.uppercuts),
        ("Overhands", c.overhands),
        ("Body Kicks", c.body_kicks),
        ("Head Kicks", c.head_kicks),
        ("Leg Kicks", c.leg_kicks),
    ]
    .into_iter()
    .map(|(name, landed)| StrikeCount {
        name: name.to_string(),
        landed,
    })
    .collect()
}

/// Striking pace and takedown success for a single fight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FightRatings {
    pub striking: Rating,
    pub takedowns: Rating,
}

impl FightRatings {
    fn of(
        strikes_per_minute: f64,
        class_pace: f64,
        corner: &CornerStats,
        reference: &ReferenceAverages,
    ) -> Self {
        let striking = if class_pace > 0.0 && strikes_per_minute > 0.0 {
            Rating::percent(tanh_rating(strikes_per_minute / class_pace, STEEPNESS))
        } else {
            Rating::NEUTRAL
        };

        let takedowns = if corner.takedown_attempts > 0.0 {
            let success = rate(corner.takedowns_landed, corner.takedown_attempts);
            let ratio = ratio_or(success, reference.takedown_success_rate, 1.0);
            Rating::percent(tanh_rating(ratio, STEEPNESS))
        } else {
            Rating::NEUTRAL
        };

        Self {
            striking,
            takedowns,
        }
    }
}

/// One corner of a fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerReport {
    pub fighter_code: String,
    pub fighter_name: Option<String>,
    pub won: bool,
    /// False when the fight carries no counters for this corner.
    pub stats_recorded: bool,
    pub strikes_landed: f64,
    pub strikes_per_minute: f64,
    pub class_difference_pct: f64,
    pub takedown_attempts: f64,
    pub takedowns_landed: f64,
    pub takedown_success_pct: f64,
    pub knockdowns: f64,
    pub stuns: f64,
    pub high_impact: f64,
    pub distribution: Vec<StrikeCount>,
    pub rounds: Vec<f64>,
    pub ratings: FightRatings,
    /// Empty when the fighter's career record is unknown.
    pub insights: Vec<PerformanceInsight>,
}

fn corner_report(
    fight: &Fight,
    code: &str,
    record: Option<&FighterRecord>,
    minutes: f64,
    class_pace: f64,
    reference: &ReferenceAverages,
) -> CornerReport {
    let recorded = fight.corner(code);
    let stats = recorded.cloned().unwrap_or_default();

    let strikes_landed = stats.strikes_landed(fight.actual_rounds);
    let strikes_per_minute = rate(strikes_landed, minutes);
    let rounds = (0..fight.actual_rounds as usize)
        .map(|i| stats.round_strikes_landed.get(i).copied().unwrap_or(0.0))
        .collect();

    CornerReport {
        fighter_code: code.to_string(),
        fighter_name: record.map(|r| r.display_name().to_string()),
        won: fight.is_winner(code),
        stats_recorded: recorded.is_some(),
        strikes_landed,
        strikes_per_minute,
        class_difference_pct: pace_difference_pct(strikes_per_minute, class_pace),
        takedown_attempts: stats.takedown_attempts,
        takedowns_landed: stats.takedowns_landed,
        takedown_success_pct: accuracy(stats.takedowns_landed, stats.takedown_attempts),
        knockdowns: stats.knockdowns,
        stuns: stats.stuns,
        high_impact: stats.high_impact,
        distribution: distribution(&stats),
        rounds,
        ratings: FightRatings::of(strikes_per_minute, class_pace, &stats, reference),
        insights: match record {
            Some(career) if recorded.is_some() => performance_insights(&stats, minutes, career),
            _ => Vec::new(),
        },
    }
}

/// Both corners of a fight set against the class pace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightReport {
    pub fight_code: String,
    pub event_code: String,
    pub weight_class: Option<String>,
    pub baseline_found: bool,
    pub method: Option<FinishMethod>,
    pub actual_rounds: u32,
    pub scheduled_rounds: u32,
    pub minutes: f64,
    pub class_strikes_per_minute: f64,
    pub fighter_a: CornerReport,
    pub fighter_b: CornerReport,
}

pub fn fight_report(
    fight: &Fight,
    fighter_a: Option<&FighterRecord>,
    fighter_b: Option<&FighterRecord>,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> FightReport {
    let minutes = fight.minutes();
    let class_pace = class_standing_pace(baseline);

    FightReport {
        fight_code: fight.fight_code.clone(),
        event_code: fight.event_code.clone(),
        weight_class: fight
            .weight_class
            .clone()
            .or_else(|| baseline.map(|b| b.name.clone())),
        baseline_found: baseline.is_some(),
        method: fight.method(),
        actual_rounds: fight.actual_rounds,
        scheduled_rounds: fight.scheduled_rounds,
        minutes,
        class_strikes_per_minute: class_pace,
        fighter_a: corner_report(fight, &fight.fighter_a, fighter_a, minutes, class_pace, reference),
        fighter_b: corner_report(fight, &fight.fighter_b, fighter_b, minutes, class_pace, reference),
    }
}
