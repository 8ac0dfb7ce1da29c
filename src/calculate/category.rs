//! The six category ratings.
//!
//! Each function compares a fighter to their weight class and returns a
//! bounded score. A missing baseline or an empty section never errors; it
//! yields the neutral rating or a raw-value fallback instead.

use super::aggregate::{self, or_one, positions, rate, StatSource};
use super::normalize::{ratio_or, scale_tanh, tanh_rating};
use crate::config::ReferenceAverages;
use crate::models::{AggressionRating, CategoryRatings, FighterRecord, Rating, WeightClassBaseline};

const STRIKING_ACCURACY_WEIGHT: f64 = 0.7;
const STRIKING_VOLUME_WEIGHT: f64 = 0.3;
const TAKEDOWN_SUCCESS_WEIGHT: f64 = 0.7;
const TAKEDOWN_FREQUENCY_WEIGHT: f64 = 0.3;

/// Curve steepness for striking, takedowns and finishes.
pub const STEEPNESS: f64 = 2.0;
pub const DEFENSE_STEEPNESS: f64 = 1.5;

/// Lowest absorbed-per-minute divisor for the defense ratio.
const ABSORBED_FLOOR: f64 = 0.01;

/// Striking: accuracy and landed volume relative to the class.
///
/// Without class accuracy or volume the raw accuracy is used.
pub fn striking_rating(fighter: &FighterRecord, baseline: Option<&WeightClassBaseline>) -> Rating {
    let accuracy = aggregate::striking_accuracy(fighter);
    let volume = aggregate::strikes_per_minute(fighter).landed();

    let (class_accuracy, class_volume) = baseline
        .map(|b| {
            (
                aggregate::striking_accuracy(b),
                aggregate::strikes_per_minute(b).landed(),
            )
        })
        .unwrap_or((0.0, 0.0));

    if class_accuracy == 0.0 || class_volume == 0.0 {
        return Rating::percent(accuracy);
    }

    let combined = (accuracy / class_accuracy) * STRIKING_ACCURACY_WEIGHT
        + (volume / class_volume) * STRIKING_VOLUME_WEIGHT;
    Rating::percent(tanh_rating(combined, STEEPNESS))
}

/// Takedowns: success rate against the league reference and attempt
/// frequency against the class.
pub fn takedown_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> Rating {
    let Some(class) = baseline else {
        return Rating::NEUTRAL;
    };
    if fighter.takedown_stats.is_none() {
        return Rating::NEUTRAL;
    }

    let attempts = aggregate::takedown_attempts(fighter);
    let class_attempts = aggregate::takedown_attempts(class);
    if attempts == 0.0 && class_attempts == 0.0 {
        return Rating::NEUTRAL;
    }

    let success_rate = rate(aggregate::takedown_successes(fighter), attempts);
    let success_ratio = ratio_or(success_rate, reference.takedown_success_rate, 1.0);

    let per_fight = attempts / or_one(fighter.fights_tracked);
    let class_per_fight = class_attempts / or_one(class.fights);

    if class_per_fight == 0.0 {
        return Rating::percent(tanh_rating(success_ratio, STEEPNESS));
    }

    let combined = success_ratio * TAKEDOWN_SUCCESS_WEIGHT
        + (per_fight / class_per_fight) * TAKEDOWN_FREQUENCY_WEIGHT;
    Rating::percent(tanh_rating(combined, STEEPNESS))
}

/// Defense: strikes absorbed per minute, fewer is better.
pub fn defense_rating(fighter: &FighterRecord, baseline: Option<&WeightClassBaseline>) -> Rating {
    let Some(class) = baseline else {
        return Rating::NEUTRAL;
    };
    if fighter.striking_stats.is_none() {
        return Rating::NEUTRAL;
    }

    let fighter_apm = aggregate::absorbed_per_minute(fighter);
    let class_apm = aggregate::absorbed_per_minute(class);

    if class_apm == 0.0 {
        return Rating::percent(100.0 - fighter_apm * 10.0);
    }

    let ratio = class_apm / fighter_apm.max(ABSORBED_FLOOR);
    Rating::percent(tanh_rating(ratio, DEFENSE_STEEPNESS))
}

/// Finishes: finish percentage relative to the class.
pub fn finish_rating(fighter: &FighterRecord, baseline: Option<&WeightClassBaseline>) -> Rating {
    let fighter_pct = aggregate::finish_percentage(fighter);
    let class_pct = baseline.map(aggregate::finish_percentage).unwrap_or(0.0);

    if class_pct == 0.0 {
        return Rating::percent(fighter_pct);
    }

    Rating::percent(tanh_rating(fighter_pct / class_pct, STEEPNESS))
}

/// Position: share of positional events spent in control.
///
/// Below an even split the score runs linearly 1..50, above it 50..100.
pub fn position_rating(fighter: &FighterRecord) -> Rating {
    let p = positions(fighter);
    let total = p.total();
    if total == 0.0 {
        return Rating::NEUTRAL;
    }

    let ratio = p.controlling() / total;
    let score = if ratio <= 0.5 {
        1.0 + 49.0 * (ratio / 0.5)
    } else {
        50.0 + 50.0 * ((ratio - 0.5) / 0.5)
    };
    Rating::percent(score)
}

/// Aggression: output, takedown, submission and positional pressure ratios
/// against the class. Thin records are not scored.
pub fn aggression_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> AggressionRating {
    if fighter.fights_tracked < f64::from(reference.aggression_min_fights) {
        return AggressionRating::InsufficientData;
    }

    let Some(class) = baseline else {
        return AggressionRating::Rated(Rating::graded(scale_tanh(1.0)));
    };

    let strike_ratio = ratio_or(
        aggregate::strike_output_per_minute(fighter),
        aggregate::strike_output_per_minute(class),
        1.0,
    );

    let takedown_ratio = ratio_or(
        rate(aggregate::takedown_attempts(fighter), fighter.fights_tracked),
        rate(aggregate::takedown_attempts(class), class.fights),
        1.0,
    );

    let submission_ratio = ratio_or(
        rate(fighter.submission_attempts(), fighter.rounds_tracked),
        rate(class.submission_attempts(), class.rounds),
        1.0,
    );

    let positional_ratio = if positions(fighter).total() == 0.0 {
        1.0
    } else {
        let class_dominance = aggregate::positional_dominance_pct(class);
        let comparison = if class_dominance > 0.0 {
            class_dominance
        } else {
            reference.positional_dominance
        };
        ratio_or(aggregate::positional_dominance_pct(fighter), comparison, 1.0)
    };

    let composite = (strike_ratio + takedown_ratio + submission_ratio + positional_ratio) / 4.0;
    AggressionRating::Rated(Rating::graded(scale_tanh(composite)))
}

/// All six category ratings for a fighter.
///
/// An untracked record rates neutral in every category.
pub fn category_ratings(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> CategoryRatings {
    if fighter.is_untracked() {
        return CategoryRatings::neutral();
    }

    CategoryRatings {
        striking: striking_rating(fighter, baseline),
        takedowns: takedown_rating(fighter, baseline, reference),
        defense: defense_rating(fighter, baseline),
        aggression: aggression_rating(fighter, baseline, reference),
        finishes: finish_rating(fighter, baseline),
        position: position_rating(fighter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CagePosition, ClassOutcomeTotals, ClinchStats, FightOutcomeStats, GroundStats,
        StrikesAbsorbed, SubmissionStats, TakedownStats, TotalStats,
    };

    fn class() -> WeightClassBaseline {
        WeightClassBaseline {
            name: "Lightweight".to_string(),
            minutes: 1000.0,
            fights: 100.0,
            rounds: 250.0,
            sub_attempts: 50.0,
            outcomes: ClassOutcomeTotals {
                kowins: 15.0,
                tkowins: 15.0,
                subwin: 10.0,
                decwin: 60.0,
                ..Default::default()
            },
            strikes: TotalStats {
                total_jabs_thrown: 4000.0,
                total_jabs_made: 2000.0,
                total_jabs_missed: Some(2000.0),
                total_strikes_landed: 2000.0,
                total_strikes_thrown: 4000.0,
                total_punches_thrown: 4000.0,
                ..Default::default()
            },
            absorbed: StrikesAbsorbed {
                jabs_absorbed: 2000.0,
                ..Default::default()
            },
            takedowns: TakedownStats {
                single_leg_takedown_attempts: 200.0,
                single_leg_takedown_success: 76.0,
                ..Default::default()
            },
            cage: CagePosition {
                center_octagon: 500.0,
                pushing_against_cage: 250.0,
                pushed_back_to_cage: 250.0,
            },
            ..Default::default()
        }
    }

    fn fighter() -> FighterRecord {
        FighterRecord {
            fighter_code: "F1".to_string(),
            fights_tracked: 6.0,
            rounds_tracked: 15.0,
            minutes_tracked: 60.0,
            total_stats: Some(TotalStats {
                total_jabs_thrown: 240.0,
                total_jabs_made: 120.0,
                total_jabs_missed: Some(120.0),
                total_strikes_landed: 120.0,
                total_strikes_thrown: 240.0,
                total_punches_thrown: 240.0,
                ..Default::default()
            }),
            striking_stats: Some(StrikesAbsorbed {
                jabs_absorbed: 120.0,
                ..Default::default()
            }),
            takedown_stats: Some(TakedownStats {
                single_leg_takedown_attempts: 12.0,
                single_leg_takedown_success: 4.56,
                ..Default::default()
            }),
            submission_stats: Some(SubmissionStats { sub_attempts: 3.0 }),
            fight_outcome_stats: Some(FightOutcomeStats {
                ko_wins: 1.0,
                tko_wins: 1.0,
                wins: 5.0,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_parity_fighter_is_average() {
        let reference = ReferenceAverages::default();
        let f = fighter();
        let c = class();

        // Same accuracy and volume as the class
        assert_eq!(striking_rating(&f, Some(&c)).value(), 50);
        // Same success rate as the reference, same attempts per fight as class
        assert_eq!(takedown_rating(&f, Some(&c), &reference).value(), 50);
        // Same absorbed per minute
        assert_eq!(defense_rating(&f, Some(&c)).value(), 50);
    }

    #[test]
    fn test_striking_without_baseline_uses_raw_accuracy() {
        let f = fighter();
        assert_eq!(striking_rating(&f, None).value(), 50);

        let empty = WeightClassBaseline::new("Empty");
        assert_eq!(striking_rating(&f, Some(&empty)).value(), 50);
    }

    #[test]
    fn test_striking_example_near_top() {
        let f = FighterRecord {
            minutes_tracked: 10.0,
            total_stats: Some(TotalStats {
                total_strikes_landed: 50.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let c = WeightClassBaseline {
            minutes: 100.0,
            strikes: TotalStats {
                total_strikes_landed: 100.0,
                total_jabs_thrown: 200.0,
                total_jabs_made: 100.0,
                total_jabs_missed: Some(100.0),
                ..Default::default()
            },
            ..Default::default()
        };

        // accuracy ratio 2.0, volume ratio 5.0
        let rating = striking_rating(&f, Some(&c)).value();
        assert!(rating > 95);
        assert!(rating <= 100);
    }

    #[test]
    fn test_striking_monotonic_in_made() {
        let c = class();
        let mut f = fighter();
        let mut last = 0;
        for made in [20.0, 60.0, 120.0, 180.0, 240.0] {
            if let Some(t) = f.total_stats.as_mut() {
                t.total_jabs_made = made;
                t.total_strikes_landed = made;
                t.total_jabs_missed = Some(240.0 - made);
            }
            let rating = striking_rating(&f, Some(&c)).value();
            assert!(rating >= last);
            last = rating;
        }
    }

    #[test]
    fn test_takedowns_neutral_cases() {
        let reference = ReferenceAverages::default();
        let mut f = fighter();
        assert_eq!(takedown_rating(&f, None, &reference), Rating::NEUTRAL);

        f.takedown_stats = None;
        assert_eq!(takedown_rating(&f, Some(&class()), &reference), Rating::NEUTRAL);

        f.takedown_stats = Some(TakedownStats::default());
        let empty = WeightClassBaseline::new("Empty");
        assert_eq!(takedown_rating(&f, Some(&empty), &reference), Rating::NEUTRAL);
    }

    #[test]
    fn test_takedowns_success_only_without_class_attempts() {
        let reference = ReferenceAverages::default();
        let f = fighter();
        let empty = WeightClassBaseline::new("Empty");
        // success rate 0.38 equals the reference
        assert_eq!(takedown_rating(&f, Some(&empty), &reference).value(), 50);
    }

    #[test]
    fn test_defense_zero_class_rate() {
        let f = fighter();
        let empty = WeightClassBaseline::new("Empty");
        // 120 absorbed over 60 minutes = 2/min
        assert_eq!(defense_rating(&f, Some(&empty)).value(), 80);
    }

    #[test]
    fn test_defense_absorbing_less_is_better() {
        let c = class();
        let mut f = fighter();
        if let Some(s) = f.striking_stats.as_mut() {
            s.jabs_absorbed = 30.0;
        }
        assert!(defense_rating(&f, Some(&c)).value() > 90);

        if let Some(s) = f.striking_stats.as_mut() {
            s.jabs_absorbed = 0.0;
        }
        assert_eq!(defense_rating(&f, Some(&c)).value(), 100);
    }

    #[test]
    fn test_finish_rating() {
        let f = fighter();
        // 40% vs 40%
        assert_eq!(finish_rating(&f, Some(&class())).value(), 50);
        // raw 40% without baseline
        assert_eq!(finish_rating(&f, None).value(), 40);
    }

    #[test]
    fn test_position_rating_bands() {
        let mut f = FighterRecord::default();
        assert_eq!(position_rating(&f), Rating::NEUTRAL);

        f.cage = CagePosition {
            center_octagon: 3.0,
            pushing_against_cage: 0.0,
            pushed_back_to_cage: 1.0,
        };
        // 0.75 control
        assert_eq!(position_rating(&f).value(), 75);

        f.cage.center_octagon = 1.0;
        f.cage.pushed_back_to_cage = 3.0;
        // 0.25 control
        assert_eq!(position_rating(&f).value(), 26);

        f.cage.center_octagon = 0.0;
        f.clinch_stats = Some(ClinchStats {
            being_clinched: 4.0,
            ..Default::default()
        });
        f.ground_stats = Some(GroundStats {
            on_bottom_ground: 1.0,
            ..Default::default()
        });
        assert_eq!(position_rating(&f).value(), 1);
    }

    #[test]
    fn test_aggression_insufficient_data() {
        let reference = ReferenceAverages::default();
        let mut f = fighter();
        f.fights_tracked = 4.0;
        assert!(aggression_rating(&f, Some(&class()), &reference).is_insufficient());
    }

    #[test]
    fn test_aggression_parity_is_fifty() {
        let reference = ReferenceAverages::default();
        let mut f = fighter();
        // 240 thrown / 60 min = 4/min; class 4000 / 1000 = 4/min
        // takedowns 12 / 6 = 2; class 200 / 100 = 2
        // subs 3 / 15 = 0.2; class 50 / 250 = 0.2
        f.cage = CagePosition {
            center_octagon: 2.0,
            pushing_against_cage: 1.0,
            pushed_back_to_cage: 1.0,
        };
        let rating = aggression_rating(&f, Some(&class()), &reference);
        assert_eq!(rating, AggressionRating::Rated(Rating::graded(50.0)));
    }

    #[test]
    fn test_aggression_without_baseline_is_neutral() {
        let reference = ReferenceAverages::default();
        let rating = aggression_rating(&fighter(), None, &reference);
        assert_eq!(rating, AggressionRating::Rated(Rating::NEUTRAL));
    }

    #[test]
    fn test_empty_record_yields_defaults() {
        let reference = ReferenceAverages::default();
        let f = FighterRecord::default();
        let c = class();
        let ratings = category_ratings(&f, Some(&c), &reference);

        assert_eq!(ratings, CategoryRatings::neutral());
        assert_eq!(ratings.striking, Rating::NEUTRAL);
        assert_eq!(ratings.finishes, Rating::NEUTRAL);
        assert!(ratings.aggression.is_insufficient());
    }

    #[test]
    fn test_zero_strikes_with_sections_hits_curve_floor() {
        let reference = ReferenceAverages::default();
        let f = FighterRecord {
            fights_tracked: 6.0,
            minutes_tracked: 60.0,
            total_stats: Some(TotalStats::default()),
            ..Default::default()
        };
        let ratings = category_ratings(&f, Some(&class()), &reference);

        // zero ratio against a populated class: 50 - 50*tanh(2)
        assert_eq!(ratings.striking.value(), 2);
    }

    #[test]
    fn test_ratings_are_idempotent() {
        let reference = ReferenceAverages::default();
        let f = fighter();
        let c = class();
        assert_eq!(
            category_ratings(&f, Some(&c), &reference),
            category_ratings(&f, Some(&c), &reference)
        );
    }
}
