//! Rating engine.
//!
//! Turns a fighter's career counters and the matching weight-class
//! accumulator into bounded ratings:
//! - Six category ratings (striking, takedowns, defense, aggression,
//!   finishes, position)
//! - An overall rating with style, archetype, strengths and weaknesses
//! - Cage, clinch and ground movement sub-ratings
//! - Profile breakdown and opponent difficulty
//! - Single-fight reports and combination rankings
//!
//! Everything here is pure and synchronous. A missing baseline or section
//! yields neutral values, never an error.

pub mod aggregate;
pub mod baseline;
pub mod breakdown;
pub mod category;
pub mod combos;
pub mod difficulty;
pub mod fight_stats;
pub mod movement;
pub mod normalize;
pub mod overall;
pub mod rules;

use std::collections::HashMap;

use chrono::Utc;

use crate::config::ReferenceAverages;
use crate::models::{
    CategoryRatings, CombinationRecord, Fight, FighterRecord, MovementRating, OverallRating,
    RatingReport, WeightClassBaseline,
};

pub use baseline::BaselineRates;
pub use breakdown::FighterBreakdown;
pub use combos::ComboAnalysis;
pub use difficulty::{CombinedDifficulty, FightDifficulty, OpponentRating};
pub use fight_stats::FightReport;

/// Entry point bundling the reference constants every rating depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingEngine {
    reference: ReferenceAverages,
}

impl RatingEngine {
    pub fn new(reference: ReferenceAverages) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceAverages {
        &self.reference
    }

    pub fn baseline_rates(&self, baseline: Option<&WeightClassBaseline>) -> BaselineRates {
        BaselineRates::from_baseline(baseline)
    }

    pub fn categories(
        &self,
        fighter: &FighterRecord,
        baseline: Option<&WeightClassBaseline>,
    ) -> CategoryRatings {
        category::category_ratings(fighter, baseline, &self.reference)
    }

    pub fn overall(
        &self,
        fighter: &FighterRecord,
        baseline: Option<&WeightClassBaseline>,
    ) -> OverallRating {
        overall::overall_rating(fighter, baseline, &self.reference)
    }

    pub fn movement(
        &self,
        fighter: &FighterRecord,
        baseline: Option<&WeightClassBaseline>,
    ) -> MovementRating {
        movement::movement_rating(fighter, baseline, &self.reference)
    }

    pub fn breakdown(
        &self,
        fighter: &FighterRecord,
        baseline: Option<&WeightClassBaseline>,
    ) -> FighterBreakdown {
        breakdown::breakdown(fighter, baseline)
    }

    /// Opponent difficulty across `fights`.
    ///
    /// Opponents are rated against `baseline`, the subject fighter's class.
    /// Fights that do not involve `fighter_code` are ignored.
    pub fn difficulty(
        &self,
        fighter_code: &str,
        fights: &[Fight],
        opponents: &[FighterRecord],
        baseline: Option<&WeightClassBaseline>,
    ) -> CombinedDifficulty {
        let ratings: HashMap<&str, OpponentRating> = opponents
            .iter()
            .map(|opp| {
                let overall = self.overall(opp, baseline);
                (
                    opp.fighter_code.as_str(),
                    OpponentRating {
                        rating: overall.rating,
                        archetype: overall.archetype,
                    },
                )
            })
            .collect();

        let scored = fights
            .iter()
            .filter(|fight| fight.involves(fighter_code))
            .map(|fight| {
                let opponent = fight
                    .opponent_of(fighter_code)
                    .and_then(|code| ratings.get(code));
                difficulty::score_fight(fight, fighter_code, opponent)
            })
            .collect();

        difficulty::combine(scored)
    }

    /// Both corners of one fight against the class standing pace.
    pub fn fight_report(
        &self,
        fight: &Fight,
        fighter_a: Option<&FighterRecord>,
        fighter_b: Option<&FighterRecord>,
        baseline: Option<&WeightClassBaseline>,
    ) -> FightReport {
        fight_stats::fight_report(fight, fighter_a, fighter_b, baseline, &self.reference)
    }

    pub fn combos(&self, record: &CombinationRecord, min_punches: usize) -> ComboAnalysis {
        combos::analyze(record, min_punches)
    }

    /// Overall and movement ratings stamped with the current time.
    pub fn report(
        &self,
        fighter: &FighterRecord,
        baseline: Option<&WeightClassBaseline>,
    ) -> RatingReport {
        RatingReport {
            fighter_code: fighter.fighter_code.clone(),
            fighter_name: fighter.display_name().to_string(),
            weight_class: fighter.weight_class.clone(),
            baseline_found: baseline.is_some(),
            overall: self.overall(fighter, baseline),
            movement: self.movement(fighter, baseline),
            computed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FightOutcomeStats, Rating};

    fn fighter(code: &str, wins: f64, ko_wins: f64) -> FighterRecord {
        FighterRecord {
            fighter_code: code.to_string(),
            fighter_name: format!("Fighter {code}"),
            fights_tracked: wins + 2.0,
            fight_outcome_stats: Some(FightOutcomeStats {
                ko_wins,
                wins,
                losses: 2.0,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_uses_reference() {
        let reference = ReferenceAverages {
            aggression_min_fights: 1,
            ..Default::default()
        };
        let engine = RatingEngine::new(reference);
        assert_eq!(engine.reference().aggression_min_fights, 1);
    }

    #[test]
    fn test_report_without_baseline() {
        let engine = RatingEngine::default();
        let report = engine.report(&fighter("F1", 5.0, 2.0), None);

        assert_eq!(report.fighter_code, "F1");
        assert_eq!(report.fighter_name, "Fighter F1");
        assert!(!report.baseline_found);
        assert!((1..=99).contains(&report.overall.rating.value()));
    }

    #[test]
    fn test_difficulty_looks_up_opponents() {
        let engine = RatingEngine::default();
        let opponents = vec![fighter("B", 6.0, 4.0), fighter("C", 1.0, 0.0)];
        let fights = vec![
            Fight {
                fight_code: "FT1".to_string(),
                fighter_a: "A".to_string(),
                fighter_b: "B".to_string(),
                method_of_finish: "DEC".to_string(),
                actual_rounds: 4,
                ..Default::default()
            },
            Fight {
                fight_code: "FT2".to_string(),
                fighter_a: "C".to_string(),
                fighter_b: "A".to_string(),
                method_of_finish: "DEC".to_string(),
                actual_rounds: 5,
                ..Default::default()
            },
            Fight {
                fight_code: "FT3".to_string(),
                fighter_a: "X".to_string(),
                fighter_b: "Y".to_string(),
                ..Default::default()
            },
        ];

        let combined = engine.difficulty("A", &fights, &opponents, None);

        assert_eq!(combined.fights.len(), 2);
        assert_eq!(combined.wins, 1);
        assert_eq!(combined.losses, 1);

        // Decision in round 4 (win) or 5 (loss) leaves the base rating unscaled.
        let b_rating = engine.overall(&opponents[0], None).rating;
        assert_eq!(combined.fights[0].base_rating, Some(b_rating));
        assert_eq!(combined.fights[0].score, Rating::percent(b_rating.as_f64()).value());
    }

    #[test]
    fn test_fight_report_names_corners() {
        let engine = RatingEngine::default();
        let fight = Fight {
            fight_code: "FT1".to_string(),
            fighter_a: "A".to_string(),
            fighter_b: "B".to_string(),
            method_of_finish: "SUB".to_string(),
            actual_rounds: 1,
            final_round_time: Some("3:00".to_string()),
            ..Default::default()
        };
        let a = fighter("A", 3.0, 1.0);
        let b = fighter("B", 2.0, 0.0);

        let report = engine.fight_report(&fight, Some(&a), Some(&b), None);
        assert_eq!(report.fighter_a.fighter_name.as_deref(), Some("Fighter A"));
        assert_eq!(report.fighter_b.fighter_name.as_deref(), Some("Fighter B"));
        assert!((report.minutes - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_difficulty_unknown_opponent() {
        let engine = RatingEngine::default();
        let fights = vec![Fight {
            fight_code: "FT1".to_string(),
            fighter_a: "A".to_string(),
            fighter_b: "NOBODY".to_string(),
            method_of_finish: "KO".to_string(),
            actual_rounds: 1,
            ..Default::default()
        }];

        let combined = engine.difficulty("A", &fights, &[], None);
        assert_eq!(combined.total_fights, 0);
        assert_eq!(combined.fights[0].score, 0);
    }
}
