//! Weight-class comparison rates.

use serde::{Deserialize, Serialize};

use super::aggregate::{self, accuracy, rate, StatSource};
use crate::models::{StrikeKind, WeightClassBaseline};

/// Fixed-shape set of class-wide rates. Every field is 0 for a missing class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineRates {
    pub striking_accuracy: f64,
    pub strikes_landed_per_minute: f64,
    pub takedown_success: f64,
    pub takedown_defense: f64,
    pub takedown_attempts_per_fight: f64,
    pub submission_success: f64,
    pub ko_tko_rate: f64,
    pub positional_dominance: f64,
    pub finish_percentage: f64,
    pub absorbed_per_minute: f64,
    pub accuracy: StrikeAccuracyRates,
    pub defense: StrikeDefenseRates,
}

/// Class accuracy per strike kind (percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikeAccuracyRates {
    pub body_kick: f64,
    pub head_kick: f64,
    pub leg_kick: f64,
    pub jab: f64,
    pub hook: f64,
    pub elbow: f64,
    pub uppercut: f64,
}

/// Class strikes absorbed per minute per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StrikeDefenseRates {
    pub body_kick: f64,
    pub head_kick: f64,
    pub leg_kick: f64,
    pub jab: f64,
    pub hook: f64,
    pub straight: f64,
    pub uppercut: f64,
}

impl BaselineRates {
    /// Rates for a weight class, or all zeros when there is none.
    pub fn from_baseline(baseline: Option<&WeightClassBaseline>) -> Self {
        match baseline {
            Some(b) => Self::from_source(b),
            None => Self::default(),
        }
    }

    /// Rates for any counter source.
    pub fn from_source<S: StatSource>(src: &S) -> Self {
        let strikes = src.strikes();
        let absorbed = src.absorbed();
        let minutes = src.minutes();

        let kind_accuracy = |kind: StrikeKind| {
            let c = strikes.counter(kind);
            accuracy(c.made, c.thrown)
        };
        let kind_absorbed = |kind: StrikeKind| rate(absorbed.absorbed(kind), minutes);

        Self {
            striking_accuracy: aggregate::striking_accuracy(src),
            strikes_landed_per_minute: aggregate::strikes_per_minute(src).landed(),
            takedown_success: aggregate::takedown_success_pct(src),
            takedown_defense: aggregate::takedown_defense_pct(src),
            takedown_attempts_per_fight: rate(aggregate::takedown_attempts(src), src.fights()),
            submission_success: aggregate::submission_success_pct(src),
            ko_tko_rate: aggregate::ko_tko_percentage(src),
            positional_dominance: aggregate::positional_dominance_pct(src),
            finish_percentage: aggregate::finish_percentage(src),
            absorbed_per_minute: rate(aggregate::absorbed_total(src), minutes),
            accuracy: StrikeAccuracyRates {
                body_kick: kind_accuracy(StrikeKind::BodyKick),
                head_kick: kind_accuracy(StrikeKind::HeadKick),
                leg_kick: kind_accuracy(StrikeKind::LegKick),
                jab: kind_accuracy(StrikeKind::Jab),
                hook: kind_accuracy(StrikeKind::Hook),
                elbow: kind_accuracy(StrikeKind::Elbow),
                uppercut: kind_accuracy(StrikeKind::Uppercut),
            },
            defense: StrikeDefenseRates {
                body_kick: kind_absorbed(StrikeKind::BodyKick),
                head_kick: kind_absorbed(StrikeKind::HeadKick),
                leg_kick: kind_absorbed(StrikeKind::LegKick),
                jab: kind_absorbed(StrikeKind::Jab),
                hook: kind_absorbed(StrikeKind::Hook),
                straight: kind_absorbed(StrikeKind::Straight),
                uppercut: kind_absorbed(StrikeKind::Uppercut),
            },
        }
    }
}
