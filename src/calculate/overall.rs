//! Overall rating: style classification, weighting, bonuses and labels.

use super::aggregate::{self, accuracy, rate, StatSource};
use super::category;
use super::rules::{all_matches, first_match, Rule};
use crate::config::ReferenceAverages;
use crate::models::{
    CategoryRatings, FighterRecord, FighterStyle, OverallRating, Rating, WeightClassBaseline,
};

/// Score substituted for an unscored aggression rating.
const UNSCORED_AGGRESSION: f64 = 50.0;

/// Counters taken straight from the record, used by style, archetype,
/// strength and weakness rules.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AuxiliaryStats {
    pub total_fights: f64,
    pub win_rate: f64,
    pub striking_accuracy: f64,
    pub takedown_accuracy: f64,
    pub finish_rate: f64,
    pub dominance_ratio: f64,
    pub aggression_ratio: f64,
    pub ko_wins: f64,
    pub tko_wins: f64,
    pub sub_wins: f64,
    pub decision_wins: f64,
    pub total_finishes: f64,
    pub total_strikes_landed: f64,
    pub takedowns_landed: f64,
}

impl AuxiliaryStats {
    pub fn from_record(fighter: &FighterRecord, baseline: Option<&WeightClassBaseline>) -> Self {
        let outcomes = StatSource::outcomes(fighter);
        let takedowns = fighter.takedowns();

        let landed = aggregate::strikes_landed(fighter);
        let thrown = aggregate::standing_thrown(fighter);

        let (takedowns_landed, takedowns_attempted) = if takedowns.takedowns_attempted > 0.0 {
            (takedowns.takedowns_landed, takedowns.takedowns_attempted)
        } else {
            (takedowns.successes(), takedowns.attempts())
        };

        let cage = fighter.cage;
        let ground = fighter.ground();
        let dominant = cage.center_octagon + ground.on_top_ground;
        let defensive = cage.pushed_back_to_cage + ground.on_bottom_ground;
        let dominance_ratio = if dominant + defensive > 0.0 {
            dominant / (dominant + defensive)
        } else {
            0.5
        };

        // Landed per tracked minute on both sides
        let fighter_pace = aggregate::strikes_per_minute(fighter).landed();
        let class_pace = baseline
            .map(|b| aggregate::strikes_per_minute(b).landed())
            .unwrap_or(0.0);
        let aggression_ratio = if class_pace > 0.0 {
            fighter_pace / class_pace
        } else {
            1.0
        };

        Self {
            total_fights: fighter.fights_tracked,
            win_rate: rate(outcomes.wins, fighter.fights_tracked) * 100.0,
            striking_accuracy: accuracy(landed, thrown),
            takedown_accuracy: accuracy(takedowns_landed, takedowns_attempted),
            finish_rate: accuracy(outcomes.finishes(), outcomes.wins),
            dominance_ratio,
            aggression_ratio,
            ko_wins: outcomes.ko_wins,
            tko_wins: outcomes.tko_wins,
            sub_wins: outcomes.sub_wins,
            decision_wins: outcomes.decision_wins,
            total_finishes: outcomes.finishes(),
            total_strikes_landed: landed,
            takedowns_landed,
        }
    }

    fn knockout_wins(&self) -> f64 {
        self.ko_wins + self.tko_wins
    }
}

/// Inputs to the style table.
#[derive(Debug, Clone, Copy)]
pub struct StyleInputs {
    pub striking: f64,
    pub takedowns: f64,
    pub position: f64,
    pub finishes: f64,
    pub knockout_wins: f64,
    pub submission_wins: f64,
}

impl StyleInputs {
    fn striking_dominant(&self) -> bool {
        self.striking >= 65.0
    }

    fn grappling_dominant(&self) -> bool {
        self.takedowns >= 70.0 || self.position >= 75.0
    }

    fn finishing_dominant(&self) -> bool {
        self.finishes >= 60.0
    }

    fn knockouts_lead(&self) -> bool {
        self.knockout_wins > self.submission_wins
    }

    fn submissions_lead(&self) -> bool {
        self.submission_wins > self.knockout_wins
    }
}

pub static STYLE_RULES: &[Rule<StyleInputs, FighterStyle>] = &[
    Rule {
        name: "clear grappler",
        when: |s| s.takedowns >= 80.0 && s.position >= 80.0,
        then: FighterStyle::Grappler,
    },
    Rule {
        name: "clear striker",
        when: |s| s.striking >= 80.0 && s.takedowns <= 50.0,
        then: FighterStyle::Striker,
    },
    Rule {
        name: "clear knockout artist",
        when: |s| s.finishes >= 75.0 && s.knockouts_lead(),
        then: FighterStyle::KnockoutArtist,
    },
    Rule {
        name: "clear submission specialist",
        when: |s| s.finishes >= 75.0 && s.submissions_lead(),
        then: FighterStyle::SubmissionSpecialist,
    },
    Rule {
        name: "grappling dominant",
        when: |s| s.grappling_dominant() && !s.striking_dominant(),
        then: FighterStyle::Grappler,
    },
    Rule {
        name: "striking dominant",
        when: |s| s.striking_dominant() && !s.grappling_dominant(),
        then: FighterStyle::Striker,
    },
    Rule {
        name: "knockout finisher",
        when: |s| s.finishing_dominant() && s.knockouts_lead(),
        then: FighterStyle::KnockoutArtist,
    },
    Rule {
        name: "submission finisher",
        when: |s| s.finishing_dominant() && s.submissions_lead(),
        then: FighterStyle::SubmissionSpecialist,
    },
    Rule {
        name: "dominant everywhere",
        when: |s| s.striking_dominant() && s.grappling_dominant(),
        then: FighterStyle::Mixed,
    },
];

/// Classify a style; falls through to `Balanced`.
pub fn classify_style(inputs: &StyleInputs) -> FighterStyle {
    first_match(STYLE_RULES, inputs)
        .map(|rule| rule.then)
        .unwrap_or(FighterStyle::Balanced)
}

/// Per-category weights for one style. Each vector sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleWeights {
    pub striking: f64,
    pub defense: f64,
    pub takedowns: f64,
    pub aggression: f64,
    pub finishes: f64,
    pub position: f64,
}

impl StyleWeights {
    pub fn for_style(style: FighterStyle) -> Self {
        let (striking, defense, takedowns, aggression, finishes, position) = match style {
            FighterStyle::Striker => (0.40, 0.25, 0.05, 0.15, 0.10, 0.05),
            FighterStyle::Grappler => (0.10, 0.20, 0.35, 0.05, 0.15, 0.15),
            FighterStyle::KnockoutArtist => (0.35, 0.10, 0.05, 0.25, 0.20, 0.05),
            FighterStyle::SubmissionSpecialist => (0.05, 0.20, 0.30, 0.05, 0.30, 0.10),
            FighterStyle::Mixed => (0.25, 0.20, 0.20, 0.15, 0.12, 0.08),
            FighterStyle::Balanced => (0.25, 0.20, 0.18, 0.15, 0.12, 0.10),
        };
        Self {
            striking,
            defense,
            takedowns,
            aggression,
            finishes,
            position,
        }
    }

    pub fn total(&self) -> f64 {
        self.striking + self.defense + self.takedowns + self.aggression + self.finishes + self.position
    }
}

/// Weighted sum of the six categories.
pub fn weighted_rating(categories: &CategoryRatings, weights: &StyleWeights) -> f64 {
    categories.striking.as_f64() * weights.striking
        + categories.defense.as_f64() * weights.defense
        + categories.takedowns.as_f64() * weights.takedowns
        + categories.aggression.value_or(UNSCORED_AGGRESSION) * weights.aggression
        + categories.finishes.as_f64() * weights.finishes
        + categories.position.as_f64() * weights.position
}

/// Category scores as plain numbers for the bonus table.
#[derive(Debug, Clone, Copy)]
pub struct BonusInputs {
    pub striking: f64,
    pub takedowns: f64,
    pub defense: f64,
    pub finishes: f64,
    pub position: f64,
    pub aggression: Option<f64>,
}

impl From<&CategoryRatings> for BonusInputs {
    fn from(c: &CategoryRatings) -> Self {
        Self {
            striking: c.striking.as_f64(),
            takedowns: c.takedowns.as_f64(),
            defense: c.defense.as_f64(),
            finishes: c.finishes.as_f64(),
            position: c.position.as_f64(),
            aggression: c.aggression.rating().map(Rating::as_f64),
        }
    }
}

type BonusRule = Rule<BonusInputs, u8>;

static STRIKER_BONUSES: &[BonusRule] = &[
    Rule {
        name: "striking 75",
        when: |c| c.striking >= 75.0,
        then: 8,
    },
    Rule {
        name: "striking 80",
        when: |c| c.striking >= 80.0,
        then: 5,
    },
    Rule {
        name: "defense 70",
        when: |c| c.defense >= 70.0,
        then: 3,
    },
];

static GRAPPLER_BONUSES: &[BonusRule] = &[
    Rule {
        name: "takedowns 75",
        when: |c| c.takedowns >= 75.0,
        then: 8,
    },
    Rule {
        name: "position 75",
        when: |c| c.position >= 75.0,
        then: 8,
    },
    Rule {
        name: "takedowns and position 80",
        when: |c| c.takedowns >= 80.0 && c.position >= 80.0,
        then: 5,
    },
    Rule {
        name: "defense 70",
        when: |c| c.defense >= 70.0,
        then: 3,
    },
];

static KNOCKOUT_BONUSES: &[BonusRule] = &[
    Rule {
        name: "finishes 75",
        when: |c| c.finishes >= 75.0,
        then: 8,
    },
    Rule {
        name: "striking 70",
        when: |c| c.striking >= 70.0,
        then: 5,
    },
    Rule {
        name: "aggression 70",
        when: |c| c.aggression.is_some_and(|a| a >= 70.0),
        then: 3,
    },
];

static SUBMISSION_BONUSES: &[BonusRule] = &[
    Rule {
        name: "finishes 75",
        when: |c| c.finishes >= 75.0,
        then: 8,
    },
    Rule {
        name: "takedowns 70",
        when: |c| c.takedowns >= 70.0,
        then: 5,
    },
    Rule {
        name: "position 70",
        when: |c| c.position >= 70.0,
        then: 3,
    },
];

static MIXED_BONUSES: &[BonusRule] = &[
    Rule {
        name: "striking and takedowns 70",
        when: |c| c.striking >= 70.0 && c.takedowns >= 70.0,
        then: 8,
    },
    Rule {
        name: "defense 70",
        when: |c| c.defense >= 70.0,
        then: 5,
    },
];

fn bonus_rules(style: FighterStyle) -> &'static [BonusRule] {
    match style {
        FighterStyle::Striker => STRIKER_BONUSES,
        FighterStyle::Grappler => GRAPPLER_BONUSES,
        FighterStyle::KnockoutArtist => KNOCKOUT_BONUSES,
        FighterStyle::SubmissionSpecialist => SUBMISSION_BONUSES,
        FighterStyle::Mixed => MIXED_BONUSES,
        FighterStyle::Balanced => &[],
    }
}

/// Sum of every matching bonus for the style.
pub fn specialist_bonus(style: FighterStyle, categories: &CategoryRatings) -> u8 {
    let inputs = BonusInputs::from(categories);
    all_matches(bonus_rules(style), &inputs)
        .map(|rule| rule.then)
        .sum()
}

/// Inputs to the archetype table.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeInputs {
    pub rating: f64,
    pub style: FighterStyle,
    pub win_rate: f64,
    pub decision_wins: f64,
    pub total_finishes: f64,
    pub aggression_ratio: f64,
    pub dominance_ratio: f64,
}

// Bands are checked top-down; each band ends in a catch-all, so lower bands
// only see ratings below the previous threshold.
pub static ARCHETYPE_RULES: &[Rule<ArchetypeInputs, &str>] = &[
    Rule {
        name: "elite striker",
        when: |a| a.rating >= 85.0 && a.style == FighterStyle::Striker,
        then: "Elite Striker",
    },
    Rule {
        name: "elite grappler",
        when: |a| a.rating >= 85.0 && a.style == FighterStyle::Grappler,
        then: "Elite Grappler",
    },
    Rule {
        name: "elite knockout artist",
        when: |a| a.rating >= 85.0 && a.style == FighterStyle::KnockoutArtist,
        then: "Elite Knockout Artist",
    },
    Rule {
        name: "elite submission specialist",
        when: |a| a.rating >= 85.0 && a.style == FighterStyle::SubmissionSpecialist,
        then: "Elite Submission Specialist",
    },
    Rule {
        name: "elite",
        when: |a| a.rating >= 85.0,
        then: "Elite Mixed Martial Artist",
    },
    Rule {
        name: "high striker",
        when: |a| a.rating >= 75.0 && a.style == FighterStyle::Striker,
        then: "Striking Specialist",
    },
    Rule {
        name: "high grappler",
        when: |a| a.rating >= 75.0 && a.style == FighterStyle::Grappler,
        then: "Grappling Specialist",
    },
    Rule {
        name: "high knockout artist",
        when: |a| a.rating >= 75.0 && a.style == FighterStyle::KnockoutArtist,
        then: "Knockout Artist",
    },
    Rule {
        name: "high submission specialist",
        when: |a| a.rating >= 75.0 && a.style == FighterStyle::SubmissionSpecialist,
        then: "Submission Specialist",
    },
    Rule {
        name: "decision machine",
        when: |a| a.rating >= 75.0 && a.win_rate >= 75.0 && a.decision_wins > a.total_finishes,
        then: "Decision Machine",
    },
    Rule {
        name: "high",
        when: |a| a.rating >= 75.0,
        then: "Well-Rounded Fighter",
    },
    Rule {
        name: "mid striker",
        when: |a| a.rating >= 60.0 && a.style == FighterStyle::Striker,
        then: "Striker",
    },
    Rule {
        name: "mid grappler",
        when: |a| a.rating >= 60.0 && a.style == FighterStyle::Grappler,
        then: "Grappler",
    },
    Rule {
        name: "mid knockout artist",
        when: |a| a.rating >= 60.0 && a.style == FighterStyle::KnockoutArtist,
        then: "Power Puncher",
    },
    Rule {
        name: "mid submission specialist",
        when: |a| a.rating >= 60.0 && a.style == FighterStyle::SubmissionSpecialist,
        then: "Submission Artist",
    },
    Rule {
        name: "mid aggressive",
        when: |a| a.rating >= 60.0 && a.aggression_ratio >= 1.2,
        then: "Aggressive Fighter",
    },
    Rule {
        name: "mid positional",
        when: |a| a.rating >= 60.0 && a.dominance_ratio >= 0.6,
        then: "Positional Fighter",
    },
    Rule {
        name: "mid",
        when: |a| a.rating >= 60.0,
        then: "Balanced Fighter",
    },
    Rule {
        name: "low striker",
        when: |a| a.style == FighterStyle::Striker,
        then: "One-Dimensional Striker",
    },
    Rule {
        name: "low grappler",
        when: |a| a.style == FighterStyle::Grappler,
        then: "One-Dimensional Grappler",
    },
    Rule {
        name: "low knockout artist",
        when: |a| a.style == FighterStyle::KnockoutArtist,
        then: "Power Puncher",
    },
    Rule {
        name: "low submission specialist",
        when: |a| a.style == FighterStyle::SubmissionSpecialist,
        then: "Submission Artist",
    },
    Rule {
        name: "low aggressive",
        when: |a| a.aggression_ratio >= 1.1,
        then: "Aggressive but Limited",
    },
    Rule {
        name: "low defensive",
        when: |a| a.dominance_ratio <= 0.3,
        then: "Defensive Fighter",
    },
];

pub fn archetype(inputs: &ArchetypeInputs) -> &'static str {
    first_match(ARCHETYPE_RULES, inputs)
        .map(|rule| rule.then)
        .unwrap_or("Technical Fighter")
}

/// Up to two strengths, highest score first.
pub fn strengths(aux: &AuxiliaryStats) -> Vec<String> {
    let mut candidates: Vec<(&'static str, f64)> = Vec::new();

    if aux.striking_accuracy >= 55.0 || aux.total_strikes_landed > 100.0 {
        let name = if aux.striking_accuracy >= 60.0 {
            "Technical Striking"
        } else {
            "Striking Volume"
        };
        candidates.push((name, aux.striking_accuracy));
    }

    if aux.takedown_accuracy >= 40.0 || aux.takedowns_landed > 10.0 {
        let name = if aux.takedown_accuracy >= 50.0 {
            "Technical Grappling"
        } else {
            "Grappling Control"
        };
        candidates.push((name, aux.takedown_accuracy));
    }

    if aux.finish_rate >= 50.0 || aux.knockout_wins() > 3.0 {
        let name = if aux.knockout_wins() > aux.sub_wins {
            "Knockout Power"
        } else {
            "Submission Game"
        };
        candidates.push((name, aux.finish_rate));
    }

    if aux.aggression_ratio >= 1.1 {
        candidates.push(("Fighting Aggression", aux.aggression_ratio * 50.0));
    }

    if aux.dominance_ratio >= 0.6 {
        candidates.push(("Positional Control", aux.dominance_ratio * 100.0));
    }

    if aux.win_rate >= 70.0 && aux.total_fights >= 5.0 {
        candidates.push(("Fight IQ", aux.win_rate));
    }

    // Stable: equal scores keep insertion order.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
        .into_iter()
        .take(2)
        .map(|(name, _)| name.to_string())
        .collect()
}

pub static WEAKNESS_RULES: &[Rule<AuxiliaryStats, &str>] = &[
    Rule {
        name: "striking fundamentals",
        when: |a| a.striking_accuracy < 40.0 && a.total_strikes_landed < 50.0,
        then: "Striking Fundamentals",
    },
    Rule {
        name: "grappling defense",
        when: |a| a.takedown_accuracy < 30.0 && a.takedowns_landed < 5.0,
        then: "Grappling Defense",
    },
    Rule {
        name: "finishing ability",
        when: |a| a.finish_rate < 30.0 && a.total_fights >= 5.0,
        then: "Finishing Ability",
    },
    Rule {
        name: "aggression",
        when: |a| a.aggression_ratio < 0.8,
        then: "Fighting Aggression",
    },
    Rule {
        name: "positional control",
        when: |a| a.dominance_ratio < 0.4,
        then: "Positional Control",
    },
    Rule {
        name: "fight strategy",
        when: |a| a.win_rate < 50.0 && a.total_fights >= 5.0,
        then: "Fight Strategy",
    },
];

/// Exactly one weakness: the first matching rule, else the lowest category.
pub fn weakness(aux: &AuxiliaryStats, categories: &CategoryRatings) -> String {
    if let Some(rule) = first_match(WEAKNESS_RULES, aux) {
        return rule.then.to_string();
    }

    let ranked = [
        ("Striking", categories.striking.as_f64()),
        ("Defense", categories.defense.as_f64()),
        ("Takedowns", categories.takedowns.as_f64()),
        ("Aggression", categories.aggression.value_or(UNSCORED_AGGRESSION)),
        ("Finishes", categories.finishes.as_f64()),
        ("Position", categories.position.as_f64()),
    ];

    let mut lowest = ranked[0];
    for candidate in ranked.iter().skip(1) {
        if candidate.1 < lowest.1 {
            lowest = *candidate;
        }
    }
    lowest.0.to_string()
}

/// Compose the overall rating from precomputed categories.
pub fn compose(
    categories: CategoryRatings,
    aux: &AuxiliaryStats,
) -> OverallRating {
    let style = classify_style(&StyleInputs {
        striking: categories.striking.as_f64(),
        takedowns: categories.takedowns.as_f64(),
        position: categories.position.as_f64(),
        finishes: categories.finishes.as_f64(),
        knockout_wins: aux.knockout_wins(),
        submission_wins: aux.sub_wins,
    });

    let weighted = weighted_rating(&categories, &StyleWeights::for_style(style));
    let bonus = specialist_bonus(style, &categories);
    let rating = Rating::graded(weighted + f64::from(bonus));

    let label = archetype(&ArchetypeInputs {
        rating: rating.as_f64(),
        style,
        win_rate: aux.win_rate,
        decision_wins: aux.decision_wins,
        total_finishes: aux.total_finishes,
        aggression_ratio: aux.aggression_ratio,
        dominance_ratio: aux.dominance_ratio,
    });

    OverallRating {
        rating,
        style,
        archetype: label.to_string(),
        strengths: strengths(aux),
        weaknesses: vec![weakness(aux, &categories)],
        specialist_bonus: bonus,
        categories,
    }
}

/// Full overall rating for a fighter against their class.
pub fn overall_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> OverallRating {
    let categories = category::category_ratings(fighter, baseline, reference);
    let aux = AuxiliaryStats::from_record(fighter, baseline);
    compose(categories, &aux)
}
