//! Fighter career snapshot as stored in the `fighterData` collection.
//!
//! Field names follow the document schema exactly. Every nested section is
//! optional in the source data; readers go through the accessors on
//! [`FighterRecord`] (or the `StatSource` trait) which substitute an all-zero
//! section when one is missing.

use serde::{Deserialize, Serialize};

/// Strike kinds tracked in `total_stats` and `striking_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeKind {
    Jab,
    Straight,
    Cross,
    Hook,
    Uppercut,
    Overhand,
    BodyKick,
    HeadKick,
    LegKick,
    Elbow,
    SpinBackFist,
}

impl StrikeKind {
    pub const ALL: [StrikeKind; 11] = [
        StrikeKind::Jab,
        StrikeKind::Straight,
        StrikeKind::Cross,
        StrikeKind::Hook,
        StrikeKind::Uppercut,
        StrikeKind::Overhand,
        StrikeKind::BodyKick,
        StrikeKind::HeadKick,
        StrikeKind::LegKick,
        StrikeKind::Elbow,
        StrikeKind::SpinBackFist,
    ];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            StrikeKind::Jab => "Jab",
            StrikeKind::Straight => "Straight",
            StrikeKind::Cross => "Cross",
            StrikeKind::Hook => "Hook",
            StrikeKind::Uppercut => "Uppercut",
            StrikeKind::Overhand => "Overhand",
            StrikeKind::BodyKick => "Body Kick",
            StrikeKind::HeadKick => "Head Kick",
            StrikeKind::LegKick => "Leg Kick",
            StrikeKind::Elbow => "Elbow",
            StrikeKind::SpinBackFist => "Spin Back Fist",
        }
    }

    /// Punches, as opposed to kicks and elbows.
    pub fn is_punch(&self) -> bool {
        matches!(
            self,
            StrikeKind::Jab
                | StrikeKind::Straight
                | StrikeKind::Cross
                | StrikeKind::Hook
                | StrikeKind::Uppercut
                | StrikeKind::Overhand
        )
    }

    pub fn is_kick(&self) -> bool {
        matches!(
            self,
            StrikeKind::BodyKick | StrikeKind::HeadKick | StrikeKind::LegKick
        )
    }
}

impl std::fmt::Display for StrikeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Thrown/made/missed for one strike kind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrikeCounter {
    pub thrown: f64,
    pub made: f64,
    pub missed: f64,
}

/// Standing strike totals (`total_stats`).
///
/// Missed counts are optional: weight-class documents only carry thrown and
/// made, so a missing value falls back to `thrown - made`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TotalStats {
    pub total_jabs_thrown: f64,
    pub total_jabs_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_jabs_missed: Option<f64>,

    pub total_straights_thrown: f64,
    pub total_straights_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_straights_missed: Option<f64>,

    pub total_cross_attempts: f64,
    pub total_cross_make: f64,

    pub total_hooks_thrown: f64,
    pub total_hooks_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hooks_missed: Option<f64>,

    pub total_uppercuts_thrown: f64,
    pub total_uppercuts_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_uppercuts_missed: Option<f64>,

    pub total_overhands_thrown: f64,
    pub total_overhands_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_overhands_missed: Option<f64>,

    pub total_body_kicks_thrown: f64,
    pub total_body_kicks_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_body_kicks_missed: Option<f64>,

    pub total_high_kicks_thrown: f64,
    pub total_high_kicks_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_high_kicks_missed: Option<f64>,

    pub total_leg_kicks_thrown: f64,
    pub total_leg_kicks_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_leg_kicks_missed: Option<f64>,

    pub total_elbows_thrown: f64,
    pub total_elbows_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elbows_missed: Option<f64>,

    pub total_spin_back_fists_thrown: f64,
    pub total_spin_back_fists_made: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spin_back_fists_missed: Option<f64>,

    pub total_strikes_landed: f64,
    pub total_strikes_thrown: f64,
    pub total_punches_thrown: f64,
    pub total_kicks_thrown: f64,
    pub strikes_per_minute: f64,
}

impl TotalStats {
    /// Counter for a single strike kind.
    pub fn counter(&self, kind: StrikeKind) -> StrikeCounter {
        let (thrown, made, missed) = match kind {
            StrikeKind::Jab => (
                self.total_jabs_thrown,
                self.total_jabs_made,
                self.total_jabs_missed,
            ),
            StrikeKind::Straight => (
                self.total_straights_thrown,
                self.total_straights_made,
                self.total_straights_missed,
            ),
            StrikeKind::Cross => (self.total_cross_attempts, self.total_cross_make, None),
            StrikeKind::Hook => (
                self.total_hooks_thrown,
                self.total_hooks_made,
                self.total_hooks_missed,
            ),
            StrikeKind::Uppercut => (
                self.total_uppercuts_thrown,
                self.total_uppercuts_made,
                self.total_uppercuts_missed,
            ),
            StrikeKind::Overhand => (
                self.total_overhands_thrown,
                self.total_overhands_made,
                self.total_overhands_missed,
            ),
            StrikeKind::BodyKick => (
                self.total_body_kicks_thrown,
                self.total_body_kicks_made,
                self.total_body_kicks_missed,
            ),
            StrikeKind::HeadKick => (
                self.total_high_kicks_thrown,
                self.total_high_kicks_made,
                self.total_high_kicks_missed,
            ),
            StrikeKind::LegKick => (
                self.total_leg_kicks_thrown,
                self.total_leg_kicks_made,
                self.total_leg_kicks_missed,
            ),
            StrikeKind::Elbow => (
                self.total_elbows_thrown,
                self.total_elbows_made,
                self.total_elbows_missed,
            ),
            StrikeKind::SpinBackFist => (
                self.total_spin_back_fists_thrown,
                self.total_spin_back_fists_made,
                self.total_spin_back_fists_missed,
            ),
        };

        StrikeCounter {
            thrown,
            made,
            missed: missed.unwrap_or((thrown - made).max(0.0)),
        }
    }

    /// Sum of thrown across every strike kind.
    pub fn thrown_by_kind(&self) -> f64 {
        StrikeKind::ALL.iter().map(|k| self.counter(*k).thrown).sum()
    }

    /// Sum of misses across every strike kind.
    pub fn missed_by_kind(&self) -> f64 {
        StrikeKind::ALL.iter().map(|k| self.counter(*k).missed).sum()
    }

    /// Punches thrown, preferring the stored total.
    pub fn punches_thrown(&self) -> f64 {
        if self.total_punches_thrown > 0.0 {
            return self.total_punches_thrown;
        }
        StrikeKind::ALL
            .iter()
            .filter(|k| k.is_punch())
            .map(|k| self.counter(*k).thrown)
            .sum()
    }

    /// Kicks thrown, preferring the stored total.
    pub fn kicks_thrown(&self) -> f64 {
        if self.total_kicks_thrown > 0.0 {
            return self.total_kicks_thrown;
        }
        StrikeKind::ALL
            .iter()
            .filter(|k| k.is_kick())
            .map(|k| self.counter(*k).thrown)
            .sum()
    }
}

/// Strikes absorbed by type (`striking_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StrikesAbsorbed {
    pub body_kicks_absorbed: f64,
    pub crosses_absorbed: f64,
    pub head_kicks_absorbed: f64,
    pub hooks_absorbed: f64,
    pub jabs_absorbed: f64,
    pub leg_kicks_absorbed: f64,
    pub overhands_absorbed: f64,
    pub straights_absorbed: f64,
    pub uppercuts_absorbed: f64,
}

impl StrikesAbsorbed {
    /// Absorbed count for a kind. Elbows and spinning back fists are not tracked.
    pub fn absorbed(&self, kind: StrikeKind) -> f64 {
        match kind {
            StrikeKind::Jab => self.jabs_absorbed,
            StrikeKind::Straight => self.straights_absorbed,
            StrikeKind::Cross => self.crosses_absorbed,
            StrikeKind::Hook => self.hooks_absorbed,
            StrikeKind::Uppercut => self.uppercuts_absorbed,
            StrikeKind::Overhand => self.overhands_absorbed,
            StrikeKind::BodyKick => self.body_kicks_absorbed,
            StrikeKind::HeadKick => self.head_kicks_absorbed,
            StrikeKind::LegKick => self.leg_kicks_absorbed,
            StrikeKind::Elbow | StrikeKind::SpinBackFist => 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        StrikeKind::ALL.iter().map(|k| self.absorbed(*k)).sum()
    }
}

/// Ground strikes and top/bottom time (`ground_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GroundStats {
    pub total_ground_strikes_thrown: f64,
    pub total_ground_strikes_made: f64,
    pub on_top_ground: f64,
    pub on_bottom_ground: f64,
}

/// Clinch strikes and clinch control (`clinch_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClinchStats {
    pub total_clinch_strikes_thrown: f64,
    pub total_clinch_strikes_made: f64,
    pub in_clinch: f64,
    pub being_clinched: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubmissionStats {
    pub sub_attempts: f64,
}

/// Takedown techniques tracked per fighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TakedownTechnique {
    SingleLeg,
    DoubleLeg,
    BodyLock,
    Trip,
    AnklePick,
    Throw,
    Imanari,
}

impl TakedownTechnique {
    pub const ALL: [TakedownTechnique; 7] = [
        TakedownTechnique::SingleLeg,
        TakedownTechnique::DoubleLeg,
        TakedownTechnique::BodyLock,
        TakedownTechnique::Trip,
        TakedownTechnique::AnklePick,
        TakedownTechnique::Throw,
        TakedownTechnique::Imanari,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TakedownTechnique::SingleLeg => "Single Leg",
            TakedownTechnique::DoubleLeg => "Double Leg",
            TakedownTechnique::BodyLock => "Body Lock",
            TakedownTechnique::Trip => "Trip",
            TakedownTechnique::AnklePick => "Ankle Pick",
            TakedownTechnique::Throw => "Throw",
            TakedownTechnique::Imanari => "Imanari Roll",
        }
    }
}

/// Offensive and defensive takedown counters (`takedown_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TakedownStats {
    pub single_leg_takedown_attempts: f64,
    pub single_leg_takedown_success: f64,
    pub double_leg_takedown_attempts: f64,
    pub double_leg_takedown_success: f64,
    pub body_lock_takedown_attempts: f64,
    pub body_lock_takedown_success: f64,
    pub trip_takedown_attempts: f64,
    pub trip_takedown_success: f64,
    #[serde(rename = "AttemptedAnklePickTD")]
    pub attempted_ankle_pick_td: f64,
    #[serde(rename = "SuccessfulAnklePickTD")]
    pub successful_ankle_pick_td: f64,
    #[serde(rename = "AttemptedThrowTD")]
    pub attempted_throw_td: f64,
    #[serde(rename = "SuccessfulThrowTD")]
    pub successful_throw_td: f64,
    #[serde(rename = "AttemptedImanariTD")]
    pub attempted_imanari_td: f64,
    #[serde(rename = "SuccessfulImanariTD")]
    pub successful_imanari_td: f64,

    pub takedowns_landed: f64,
    pub takedowns_attempted: f64,

    pub times_single_legged: f64,
    pub single_leg_defends: f64,
    pub times_double_legged: f64,
    pub double_leg_defends: f64,
    pub times_body_locked: f64,
    pub body_lock_defends: f64,
    pub times_tripped: f64,
    pub trip_defends: f64,
}

impl TakedownStats {
    /// `(attempts, successes)` for one technique.
    pub fn technique(&self, technique: TakedownTechnique) -> (f64, f64) {
        match technique {
            TakedownTechnique::SingleLeg => (
                self.single_leg_takedown_attempts,
                self.single_leg_takedown_success,
            ),
            TakedownTechnique::DoubleLeg => (
                self.double_leg_takedown_attempts,
                self.double_leg_takedown_success,
            ),
            TakedownTechnique::BodyLock => (
                self.body_lock_takedown_attempts,
                self.body_lock_takedown_success,
            ),
            TakedownTechnique::Trip => (self.trip_takedown_attempts, self.trip_takedown_success),
            TakedownTechnique::AnklePick => {
                (self.attempted_ankle_pick_td, self.successful_ankle_pick_td)
            }
            TakedownTechnique::Throw => (self.attempted_throw_td, self.successful_throw_td),
            TakedownTechnique::Imanari => (self.attempted_imanari_td, self.successful_imanari_td),
        }
    }

    pub fn attempts(&self) -> f64 {
        TakedownTechnique::ALL
            .iter()
            .map(|t| self.technique(*t).0)
            .sum()
    }

    pub fn successes(&self) -> f64 {
        TakedownTechnique::ALL
            .iter()
            .map(|t| self.technique(*t).1)
            .sum()
    }

    /// Takedowns the opponent attempted against this side.
    pub fn times_attempted_against(&self) -> f64 {
        self.times_single_legged + self.times_double_legged + self.times_body_locked + self.times_tripped
    }

    pub fn defended(&self) -> f64 {
        self.single_leg_defends + self.double_leg_defends + self.body_lock_defends + self.trip_defends
    }
}

/// Fight results split by method (`fight_outcome_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FightOutcomeStats {
    #[serde(rename = "FighterKOWins")]
    pub ko_wins: f64,
    #[serde(rename = "FighterTKOWins")]
    pub tko_wins: f64,
    #[serde(rename = "FighterSUBWin")]
    pub sub_wins: f64,
    #[serde(rename = "FighterUDWins")]
    pub unanimous_decision_wins: f64,
    #[serde(rename = "FighterSplitDecWin")]
    pub split_decision_wins: f64,
    #[serde(rename = "FighterMajDecWin")]
    pub majority_decision_wins: f64,
    #[serde(rename = "FighterWins")]
    pub wins: f64,

    #[serde(rename = "FighterKOLoss")]
    pub ko_losses: f64,
    #[serde(rename = "FighterTKOLoss")]
    pub tko_losses: f64,
    #[serde(rename = "FighterSUBLoss")]
    pub sub_losses: f64,
    #[serde(rename = "FighterUDLoss")]
    pub unanimous_decision_losses: f64,
    #[serde(rename = "FighterSplitDecLoss")]
    pub split_decision_losses: f64,
    #[serde(rename = "FighterMajDecLoss")]
    pub majority_decision_losses: f64,
    #[serde(rename = "FighterLoss")]
    pub losses: f64,

    #[serde(rename = "FighterDraw")]
    pub draws: f64,
    #[serde(rename = "FighterNC")]
    pub no_contests: f64,
}

impl FightOutcomeStats {
    pub fn decision_wins(&self) -> f64 {
        self.unanimous_decision_wins + self.split_decision_wins + self.majority_decision_wins
    }

    pub fn decision_losses(&self) -> f64 {
        self.unanimous_decision_losses + self.split_decision_losses + self.majority_decision_losses
    }
}

/// Cage-position time/event counts. Top-level fields on both documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CagePosition {
    pub center_octagon: f64,
    pub pushed_back_to_cage: f64,
    pub pushing_against_cage: f64,
}

impl CagePosition {
    pub fn total(&self) -> f64 {
        self.center_octagon + self.pushed_back_to_cage + self.pushing_against_cage
    }
}

/// Opponent stance for matchup splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Orthodox,
    Southpaw,
    Switch,
}

impl Stance {
    pub const ALL: [Stance; 3] = [Stance::Orthodox, Stance::Southpaw, Stance::Switch];
}

/// Wins and losses against each opponent stance (`stance_matchup_stats`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StanceMatchupStats {
    pub wins_vs_orthodox: f64,
    pub losses_vs_orthodox: f64,
    pub wins_vs_southpaw: f64,
    pub losses_vs_southpaw: f64,
    pub wins_vs_switch: f64,
    pub losses_vs_switch: f64,
}

impl StanceMatchupStats {
    /// `(wins, losses)` against a stance.
    pub fn record_vs(&self, stance: Stance) -> (f64, f64) {
        match stance {
            Stance::Orthodox => (self.wins_vs_orthodox, self.losses_vs_orthodox),
            Stance::Southpaw => (self.wins_vs_southpaw, self.losses_vs_southpaw),
            Stance::Switch => (self.wins_vs_switch, self.losses_vs_switch),
        }
    }
}

/// One fighter's career aggregate snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterRecord {
    #[serde(rename = "fighterCode", default)]
    pub fighter_code: String,

    #[serde(rename = "fighterName", default)]
    pub fighter_name: String,

    /// Legacy display name kept by older documents.
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub legacy_name: Option<String>,

    #[serde(rename = "weightClass", default, skip_serializing_if = "Option::is_none")]
    pub weight_class: Option<String>,

    #[serde(rename = "FightsTracked", default)]
    pub fights_tracked: f64,

    #[serde(rename = "RoundsTracked", default)]
    pub rounds_tracked: f64,

    #[serde(rename = "MinutesTracked", default)]
    pub minutes_tracked: f64,

    #[serde(flatten)]
    pub cage: CagePosition,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_stats: Option<TotalStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striking_stats: Option<StrikesAbsorbed>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_stats: Option<GroundStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinch_stats: Option<ClinchStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_stats: Option<SubmissionStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub takedown_stats: Option<TakedownStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fight_outcome_stats: Option<FightOutcomeStats>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stance_matchup_stats: Option<StanceMatchupStats>,
}

impl FighterRecord {
    /// Create an empty record for a fighter code.
    pub fn new(fighter_code: impl Into<String>, fighter_name: impl Into<String>) -> Self {
        Self {
            fighter_code: fighter_code.into(),
            fighter_name: fighter_name.into(),
            ..Default::default()
        }
    }

    /// Name to show, falling back to the legacy field and then the code.
    pub fn display_name(&self) -> &str {
        if !self.fighter_name.is_empty() {
            return &self.fighter_name;
        }
        match self.legacy_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.fighter_code,
        }
    }

    /// No tracked fights and no stat sections at all.
    pub fn is_untracked(&self) -> bool {
        self.fights_tracked <= 0.0
            && self.total_stats.is_none()
            && self.striking_stats.is_none()
            && self.ground_stats.is_none()
            && self.clinch_stats.is_none()
            && self.submission_stats.is_none()
            && self.takedown_stats.is_none()
            && self.fight_outcome_stats.is_none()
    }

    pub fn total(&self) -> TotalStats {
        self.total_stats.unwrap_or_default()
    }

    pub fn absorbed(&self) -> StrikesAbsorbed {
        self.striking_stats.unwrap_or_default()
    }

    pub fn ground(&self) -> GroundStats {
        self.ground_stats.unwrap_or_default()
    }

    pub fn clinch(&self) -> ClinchStats {
        self.clinch_stats.unwrap_or_default()
    }

    pub fn submissions(&self) -> SubmissionStats {
        self.submission_stats.unwrap_or_default()
    }

    pub fn takedowns(&self) -> TakedownStats {
        self.takedown_stats.unwrap_or_default()
    }

    pub fn outcomes(&self) -> FightOutcomeStats {
        self.fight_outcome_stats.unwrap_or_default()
    }

    pub fn stances(&self) -> StanceMatchupStats {
        self.stance_matchup_stats.unwrap_or_default()
    }
}
