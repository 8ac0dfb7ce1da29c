//! Movement ratings: cage positioning, clinch control and ground control.
//!
//! Each sub-rating is 1..=99 and built from the normalizers. The composite
//! grade weights cage, clinch and ground 40/35/35, rescaled by their total so
//! a fighter at parity everywhere lands on 50.

use super::aggregate::{accuracy, or_one};
use super::normalize::{normalize_value, scale_linear, Polarity};
use super::rules::{first_match, Rule};
use crate::config::ReferenceAverages;
use crate::models::{
    CagePosition, FighterRecord, MovementDomain, MovementRating, Rating, WeightClassBaseline,
};

const CAGE_WEIGHT: f64 = 0.40;
const CLINCH_WEIGHT: f64 = 0.35;
const GROUND_WEIGHT: f64 = 0.35;

/// Grade at or above which a fighter counts as positionally good.
pub const GOOD_GRADE: f64 = 65.0;

/// Sub-ratings closer than this are treated as even.
const EVEN_SPREAD: f64 = 5.0;

/// Share of cage time spent center, pushing and pushed back (percent).
#[derive(Debug, Clone, Copy, PartialEq)]
struct CageSplit {
    center: f64,
    pushing: f64,
    pushed_back: f64,
}

impl CageSplit {
    fn of(cage: &CagePosition) -> Option<Self> {
        let total = cage.total();
        if total <= 0.0 {
            return None;
        }
        Some(Self {
            center: cage.center_octagon / total * 100.0,
            pushing: cage.pushing_against_cage / total * 100.0,
            pushed_back: cage.pushed_back_to_cage / total * 100.0,
        })
    }
}

/// Unrounded cage score, or `None` without any cage events.
///
/// Pressure and center control count for the fighter, time pushed back
/// against them. Compared to the class split when one exists.
pub fn cage_score(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> Option<f64> {
    let split = CageSplit::of(&fighter.cage)?;

    let (pushing, center, pushed_back) = match baseline.and_then(|b| CageSplit::of(&b.cage)) {
        Some(class) => (
            normalize_value(split.pushing, class.pushing),
            normalize_value(split.center, class.center),
            99.0 - normalize_value(split.pushed_back, class.pushed_back),
        ),
        None => (
            scale_linear(split.pushing, reference.cage_pushing_pct, Polarity::Positive),
            scale_linear(split.center, reference.cage_center_pct, Polarity::Positive),
            scale_linear(
                split.pushed_back,
                reference.cage_pushed_back_pct,
                Polarity::Negative,
            ),
        ),
    };

    Some(pushing * 0.40 + center * 0.35 + pushed_back * 0.25)
}

pub fn cage_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> Rating {
    cage_score(fighter, baseline, reference)
        .map(Rating::graded)
        .unwrap_or(Rating::NEUTRAL)
}

/// Clinch: control share and clinch striking accuracy.
pub fn clinch_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> Rating {
    let clinch = fighter.clinch();
    let exchanges = clinch.in_clinch + clinch.being_clinched;
    if exchanges == 0.0 && clinch.total_clinch_strikes_thrown == 0.0 {
        return Rating::NEUTRAL;
    }

    let control = control_share(clinch.in_clinch, clinch.being_clinched);
    let class_control = baseline
        .map(|b| control_share(b.clinch.in_clinch, b.clinch.being_clinched))
        .unwrap_or(50.0);
    let control_score = normalize_value(control, class_control);

    let striking_score = if clinch.total_clinch_strikes_thrown > 0.0 {
        let acc = accuracy(
            clinch.total_clinch_strikes_made,
            clinch.total_clinch_strikes_thrown,
        );
        let class_acc = baseline
            .map(|b| {
                accuracy(
                    b.clinch.total_clinch_strikes_made,
                    b.clinch.total_clinch_strikes_thrown,
                )
            })
            .filter(|a| *a > 0.0)
            .unwrap_or(reference.clinch_striking_accuracy);
        normalize_value(acc, class_acc)
    } else {
        50.0
    };

    Rating::graded(control_score * 0.6 + striking_score * 0.4)
}

/// Ground: top-position share, ground striking accuracy and output per round.
pub fn ground_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> Rating {
    let ground = fighter.ground();
    let positions = ground.on_top_ground + ground.on_bottom_ground;
    if positions == 0.0 && ground.total_ground_strikes_thrown == 0.0 {
        return Rating::NEUTRAL;
    }

    let top = control_share(ground.on_top_ground, ground.on_bottom_ground);
    let class_top = baseline
        .map(|b| control_share(b.ground.on_top_ground, b.ground.on_bottom_ground))
        .filter(|t| *t > 0.0)
        .unwrap_or(reference.positional_dominance);
    let control_score = normalize_value(top, class_top);

    let (accuracy_score, output_score) = if ground.total_ground_strikes_thrown > 0.0 {
        let acc = accuracy(
            ground.total_ground_strikes_made,
            ground.total_ground_strikes_thrown,
        );
        let class_acc = baseline
            .map(|b| {
                accuracy(
                    b.ground.total_ground_strikes_made,
                    b.ground.total_ground_strikes_thrown,
                )
            })
            .filter(|a| *a > 0.0)
            .unwrap_or(reference.ground_striking_accuracy);

        let per_round = ground.total_ground_strikes_thrown / or_one(fighter.rounds_tracked);
        let class_per_round = baseline
            .filter(|b| b.rounds > 0.0)
            .map(|b| b.ground.total_ground_strikes_thrown / b.rounds)
            .filter(|r| *r > 0.0)
            .unwrap_or(reference.ground_strikes_per_round);

        (
            normalize_value(acc, class_acc),
            normalize_value(per_round, class_per_round),
        )
    } else {
        (50.0, 50.0)
    };

    Rating::graded(control_score * 0.4 + accuracy_score * 0.3 + output_score * 0.3)
}

/// Percentage of `ours / (ours + theirs)`, 50 when both are zero.
fn control_share(ours: f64, theirs: f64) -> f64 {
    let total = ours + theirs;
    if total > 0.0 {
        ours / total * 100.0
    } else {
        50.0
    }
}

/// Composite movement grade.
pub fn movement_grade(cage: Rating, clinch: Rating, ground: Rating) -> Rating {
    let weighted = cage.as_f64() * CAGE_WEIGHT
        + clinch.as_f64() * CLINCH_WEIGHT
        + ground.as_f64() * GROUND_WEIGHT;
    Rating::graded(weighted / (CAGE_WEIGHT + CLINCH_WEIGHT + GROUND_WEIGHT))
}

/// Leading sub-domain; ties go cage, then clinch, then ground.
pub fn dominant_domain(cage: Rating, clinch: Rating, ground: Rating) -> MovementDomain {
    let scores = [
        (MovementDomain::Cage, cage.as_f64()),
        (MovementDomain::Clinch, clinch.as_f64()),
        (MovementDomain::Ground, ground.as_f64()),
    ];
    let max = scores.iter().map(|s| s.1).fold(f64::MIN, f64::max);
    let min = scores.iter().map(|s| s.1).fold(f64::MAX, f64::min);
    if max - min < EVEN_SPREAD {
        return MovementDomain::Even;
    }
    scores
        .iter()
        .find(|s| s.1 == max)
        .map(|s| s.0)
        .unwrap_or(MovementDomain::Even)
}

/// Inputs to the movement archetype table.
#[derive(Debug, Clone, Copy)]
pub struct MovementInputs {
    pub grade: f64,
    pub cage: f64,
    pub clinch: f64,
    pub ground: f64,
    pub dominant: MovementDomain,
}

impl MovementInputs {
    fn good(&self) -> bool {
        self.grade >= GOOD_GRADE
    }

    fn leads(&self, domain: MovementDomain) -> bool {
        self.dominant == domain
    }
}

pub static MOVEMENT_ARCHETYPES: &[Rule<MovementInputs, &str>] = &[
    Rule {
        name: "complete",
        when: |m| m.good() && m.cage >= 75.0 && m.clinch >= 75.0 && m.ground >= 75.0,
        then: "Complete Positional Master",
    },
    Rule {
        name: "good even",
        when: |m| m.good() && m.leads(MovementDomain::Even),
        then: "Positional All-Rounder",
    },
    Rule {
        name: "cage to mat",
        when: |m| m.good() && m.leads(MovementDomain::Cage) && m.ground >= 65.0,
        then: "Cage-to-Mat Controller",
    },
    Rule {
        name: "pressure clinch",
        when: |m| m.good() && m.leads(MovementDomain::Cage) && m.clinch >= 65.0,
        then: "Pressure Clinch Fighter",
    },
    Rule {
        name: "octagon general",
        when: |m| m.good() && m.leads(MovementDomain::Cage),
        then: "Octagon General",
    },
    Rule {
        name: "clinch to ground",
        when: |m| m.good() && m.leads(MovementDomain::Clinch) && m.ground >= 65.0,
        then: "Clinch-to-Ground Grappler",
    },
    Rule {
        name: "clinch bully",
        when: |m| m.good() && m.leads(MovementDomain::Clinch),
        then: "Clinch Bully",
    },
    Rule {
        name: "top control",
        when: |m| m.good() && m.leads(MovementDomain::Ground) && m.ground >= 80.0,
        then: "Top Control Specialist",
    },
    Rule {
        name: "takedown and control",
        when: |m| m.good() && m.leads(MovementDomain::Ground) && m.cage >= 65.0,
        then: "Takedown-and-Control Wrestler",
    },
    Rule {
        name: "ground controller",
        when: |m| m.good() && m.leads(MovementDomain::Ground),
        then: "Ground Controller",
    },
    Rule {
        name: "overwhelmed",
        when: |m| m.cage < 35.0 && m.clinch < 35.0 && m.ground < 35.0,
        then: "Positionally Overwhelmed",
    },
    Rule {
        name: "neutral",
        when: |m| m.leads(MovementDomain::Even),
        then: "Positionally Neutral",
    },
    Rule {
        name: "developing ring controller",
        when: |m| m.leads(MovementDomain::Cage) && m.cage >= 55.0,
        then: "Developing Ring Controller",
    },
    Rule {
        name: "outside mover",
        when: |m| m.leads(MovementDomain::Cage),
        then: "Outside Mover",
    },
    Rule {
        name: "developing clinch",
        when: |m| m.leads(MovementDomain::Clinch) && m.clinch >= 55.0,
        then: "Developing Clinch Fighter",
    },
    Rule {
        name: "cage-bound clinch",
        when: |m| m.leads(MovementDomain::Clinch) && m.cage < 35.0,
        then: "Cage-Bound Clinch Fighter",
    },
    Rule {
        name: "clinch survivor",
        when: |m| m.leads(MovementDomain::Clinch),
        then: "Clinch Survivor",
    },
    Rule {
        name: "developing grappler",
        when: |m| m.leads(MovementDomain::Ground) && m.ground >= 55.0,
        then: "Developing Grappler",
    },
    Rule {
        name: "bottom position",
        when: |m| m.leads(MovementDomain::Ground) && m.cage < 35.0,
        then: "Bottom-Position Fighter",
    },
    Rule {
        name: "scrambler",
        when: |m| m.leads(MovementDomain::Ground),
        then: "Scrambler",
    },
];

pub fn movement_archetype(inputs: &MovementInputs) -> &'static str {
    first_match(MOVEMENT_ARCHETYPES, inputs)
        .map(|rule| rule.then)
        .unwrap_or("Positionally Neutral")
}

/// All movement ratings for a fighter.
pub fn movement_rating(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
    reference: &ReferenceAverages,
) -> MovementRating {
    let cage = cage_rating(fighter, baseline, reference);
    let clinch = clinch_rating(fighter, baseline, reference);
    let ground = ground_rating(fighter, baseline, reference);
    let grade = movement_grade(cage, clinch, ground);
    let dominant = dominant_domain(cage, clinch, ground);

    let archetype = movement_archetype(&MovementInputs {
        grade: grade.as_f64(),
        cage: cage.as_f64(),
        clinch: clinch.as_f64(),
        ground: ground.as_f64(),
        dominant,
    });

    MovementRating {
        cage,
        clinch,
        ground,
        overall_movement_grade: grade,
        dominant,
        archetype: archetype.to_string(),
    }
}
