//! Profile breakdown: record splits, signature strikes and takedown usage.
//!
//! These figures are descriptive rather than comparative. Nothing here is
//! rated against the class except the optional [`ClassComparison`] block,
//! which reports the class's own splits side by side.

use serde::{Deserialize, Serialize};

use super::aggregate::{accuracy, or_one, rate, StatSource};
use crate::models::{
    FighterRecord, Stance, StanceMatchupStats, StrikeKind, TakedownTechnique, WeightClassBaseline,
};

/// Placeholder label when there is nothing to report.
pub const NO_DATA: &str = "No Data";

const TIE_SEPARATOR: &str = " / ";

/// Absorbed kinds in display order.
const ABSORBED_KINDS: [StrikeKind; 9] = [
    StrikeKind::BodyKick,
    StrikeKind::Cross,
    StrikeKind::HeadKick,
    StrikeKind::Hook,
    StrikeKind::Jab,
    StrikeKind::LegKick,
    StrikeKind::Overhand,
    StrikeKind::Straight,
    StrikeKind::Uppercut,
];

/// KO/TKO, submission and decision shares of wins or losses (percent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodSplit {
    pub ko_tko: f64,
    pub submission: f64,
    pub decision: f64,
}

impl MethodSplit {
    fn of(ko_tko: f64, submission: f64, decision: f64, total: f64) -> Self {
        Self {
            ko_tko: accuracy(ko_tko, total),
            submission: accuracy(submission, total),
            decision: accuracy(decision, total),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StanceRecord {
    pub stance: Stance,
    pub wins: f64,
    pub losses: f64,
    pub fights: f64,
    pub win_rate: f64,
}

impl StanceRecord {
    fn of(stats: &StanceMatchupStats, stance: Stance) -> Self {
        let (wins, losses) = stats.record_vs(stance);
        Self {
            stance,
            wins,
            losses,
            fights: wins + losses,
            win_rate: accuracy(wins, wins + losses),
        }
    }
}

fn stance_records(stats: &StanceMatchupStats) -> Vec<StanceRecord> {
    Stance::ALL
        .iter()
        .map(|stance| StanceRecord::of(stats, *stance))
        .collect()
}

/// The strike with the best accuracy weighted by how often it is thrown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeHighlight {
    pub name: String,
    /// Rounded percent.
    pub accuracy: u32,
    /// Rounded `accuracy * frequency share * 100`.
    pub score: u32,
}

impl StrikeHighlight {
    fn no_data() -> Self {
        Self {
            name: NO_DATA.to_string(),
            accuracy: 0,
            score: 0,
        }
    }
}

/// Strike kind(s) absorbed most often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerableStrikes {
    pub name: String,
    pub absorbed: f64,
}

/// Rounded share of landed strikes by origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffenseOrigin {
    pub stand: u32,
    pub clinch: u32,
    pub ground: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakedownUsage {
    pub technique: TakedownTechnique,
    pub name: String,
    pub attempts: f64,
    pub successes: f64,
    pub success_rate: f64,
    pub per_round: f64,
    pub per_minute: f64,
}

/// Class-wide splits shown next to the fighter's own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassComparison {
    pub weight_class: String,
    pub finish_percentage: f64,
    pub wins_by: MethodSplit,
    pub losses_by: MethodSplit,
    pub stances: Vec<StanceRecord>,
    pub average_fight_duration: f64,
    pub average_rounds_per_fight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FighterBreakdown {
    pub fighter_code: String,
    pub fighter_name: String,
    pub wins: f64,
    pub losses: f64,
    pub draws: f64,
    pub no_contests: f64,
    /// Wins over wins, losses and draws. No contests are excluded.
    pub win_rate: f64,
    pub finish_percentage: f64,
    pub wins_by: MethodSplit,
    pub losses_by: MethodSplit,
    pub stances: Vec<StanceRecord>,
    pub most_common_outcome: String,
    pub most_successful_strike: StrikeHighlight,
    pub most_vulnerable: VulnerableStrikes,
    pub offense_origin: OffenseOrigin,
    pub top_takedowns: Vec<TakedownUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassComparison>,
}

/// Win rate over decided fights plus draws.
pub fn win_rate(fighter: &FighterRecord) -> f64 {
    let o = fighter.outcomes();
    let wins = o.ko_wins + o.tko_wins + o.sub_wins + o.decision_wins();
    let losses = o.ko_losses + o.tko_losses + o.sub_losses + o.decision_losses();
    accuracy(wins, wins + losses + o.draws)
}

/// The outcome label(s) with the highest count, ties joined with `" / "`.
pub fn most_common_outcome(fighter: &FighterRecord) -> String {
    let Some(o) = fighter.fight_outcome_stats else {
        return NO_DATA.to_string();
    };

    let counts = [
        ("KO Win", o.ko_wins),
        ("TKO Win", o.tko_wins),
        ("Submission Win", o.sub_wins),
        ("Unanimous Decision Win", o.unanimous_decision_wins),
        ("Split Decision Win", o.split_decision_wins),
        ("Majority Decision Win", o.majority_decision_wins),
        ("KO Loss", o.ko_losses),
        ("TKO Loss", o.tko_losses),
        ("Submission Loss", o.sub_losses),
        ("Unanimous Decision Loss", o.unanimous_decision_losses),
        ("Split Decision Loss", o.split_decision_losses),
        ("Majority Decision Loss", o.majority_decision_losses),
        ("Draw", o.draws),
        ("No Contest", o.no_contests),
    ];

    join_leaders(&counts).unwrap_or_else(|| NO_DATA.to_string())
}

/// Labels sharing the maximum positive count, in input order.
fn join_leaders(counts: &[(&str, f64)]) -> Option<String> {
    let max = counts.iter().map(|(_, n)| *n).fold(0.0, f64::max);
    if max <= 0.0 {
        return None;
    }
    let leaders: Vec<&str> = counts
        .iter()
        .filter(|(_, n)| *n == max)
        .map(|(label, _)| *label)
        .collect();
    Some(leaders.join(TIE_SEPARATOR))
}

/// Best strike by `accuracy * share of all strikes thrown`. Ties keep the
/// earlier kind.
pub fn most_successful_strike(fighter: &FighterRecord) -> StrikeHighlight {
    let strikes = fighter.total();
    let total_thrown = strikes.thrown_by_kind();
    if total_thrown <= 0.0 {
        return StrikeHighlight::no_data();
    }

    let mut best: Option<(StrikeKind, f64, f64)> = None;
    for kind in StrikeKind::ALL {
        let c = strikes.counter(kind);
        if c.thrown <= 0.0 {
            continue;
        }
        let acc = c.made / c.thrown;
        let score = acc * (c.thrown / total_thrown) * 100.0;
        match best {
            Some((_, _, top)) if score <= top => {}
            _ => best = Some((kind, acc, score)),
        }
    }

    match best {
        Some((kind, acc, score)) => StrikeHighlight {
            name: kind.label().to_string(),
            accuracy: (acc * 100.0).round() as u32,
            score: score.round() as u32,
        },
        None => StrikeHighlight::no_data(),
    }
}

/// Strike kind(s) absorbed most.
pub fn most_vulnerable_strikes(fighter: &FighterRecord) -> VulnerableStrikes {
    let absorbed = fighter.absorbed();
    let counts: Vec<(&str, f64)> = ABSORBED_KINDS
        .iter()
        .map(|kind| (kind.label(), absorbed.absorbed(*kind)))
        .collect();

    match join_leaders(&counts) {
        Some(name) => VulnerableStrikes {
            name,
            absorbed: counts.iter().map(|(_, n)| *n).fold(0.0, f64::max),
        },
        None => VulnerableStrikes {
            name: NO_DATA.to_string(),
            absorbed: 0.0,
        },
    }
}

/// Stand/clinch/ground share of the stored landed total.
pub fn offense_origin(fighter: &FighterRecord) -> OffenseOrigin {
    let landed = fighter.total().total_strikes_landed;
    if landed <= 0.0 {
        return OffenseOrigin::default();
    }

    let share = |made: f64| (made / landed * 100.0).round().max(0.0) as u32;
    let ground = share(fighter.ground().total_ground_strikes_made);
    let clinch = share(fighter.clinch().total_clinch_strikes_made);

    OffenseOrigin {
        stand: 100u32.saturating_sub(ground + clinch),
        clinch,
        ground,
    }
}

/// The three most attempted takedown techniques.
pub fn top_takedowns(fighter: &FighterRecord) -> Vec<TakedownUsage> {
    let td = fighter.takedowns();
    let rounds = or_one(fighter.rounds_tracked);
    let minutes = or_one(fighter.minutes_tracked);

    let mut usage: Vec<TakedownUsage> = TakedownTechnique::ALL
        .iter()
        .filter_map(|technique| {
            let (attempts, successes) = td.technique(*technique);
            (attempts > 0.0).then(|| TakedownUsage {
                technique: *technique,
                name: technique.label().to_string(),
                attempts,
                successes,
                success_rate: accuracy(successes, attempts),
                per_round: attempts / rounds,
                per_minute: attempts / minutes,
            })
        })
        .collect();

    usage.sort_by(|a, b| b.attempts.total_cmp(&a.attempts));
    usage.truncate(3);
    usage
}

/// Splits for the class as a whole.
pub fn class_comparison(baseline: &WeightClassBaseline) -> ClassComparison {
    let o = StatSource::outcomes(baseline);
    ClassComparison {
        weight_class: baseline.name.clone(),
        finish_percentage: accuracy(o.finishes(), o.wins),
        wins_by: MethodSplit::of(o.knockout_wins(), o.sub_wins, o.decision_wins, o.wins),
        losses_by: MethodSplit::of(o.knockout_losses(), o.sub_losses, o.decision_losses, o.losses),
        stances: stance_records(&baseline.stances),
        average_fight_duration: rate(baseline.minutes, baseline.fights),
        average_rounds_per_fight: rate(baseline.rounds, baseline.fights),
    }
}

/// Full profile breakdown for a fighter.
pub fn breakdown(
    fighter: &FighterRecord,
    baseline: Option<&WeightClassBaseline>,
) -> FighterBreakdown {
    let o = StatSource::outcomes(fighter);

    FighterBreakdown {
        fighter_code: fighter.fighter_code.clone(),
        fighter_name: fighter.display_name().to_string(),
        wins: o.wins,
        losses: o.losses,
        draws: o.draws,
        no_contests: o.no_contests,
        win_rate: win_rate(fighter),
        finish_percentage: accuracy(o.finishes(), o.wins),
        wins_by: MethodSplit::of(o.knockout_wins(), o.sub_wins, o.decision_wins, o.wins),
        losses_by: MethodSplit::of(o.knockout_losses(), o.sub_losses, o.decision_losses, o.losses),
        stances: stance_records(&fighter.stances()),
        most_common_outcome: most_common_outcome(fighter),
        most_successful_strike: most_successful_strike(fighter),
        most_vulnerable: most_vulnerable_strikes(fighter),
        offense_origin: offense_origin(fighter),
        top_takedowns: top_takedowns(fighter),
        class: baseline.map(class_comparison),
    }
}
