//! Opponent difficulty per fight and across a career.
//!
//! A fight's score starts from the opponent's overall rating and is scaled
//! by how the fight ended and in which round. Wins by early stoppage score
//! high; early stoppage losses score low.

use serde::{Deserialize, Serialize};

use crate::models::{Fight, FinishMethod, Rating};

/// Label for an empty fight list.
pub const NO_FIGHTS: &str = "No fights";

static BANDS: &[(u8, &str)] = &[
    (85, "Extreme"),
    (75, "Very High"),
    (65, "High"),
    (55, "Moderate"),
    (45, "Low"),
];

/// Band label for a difficulty score.
pub fn describe(score: u8) -> &'static str {
    BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, label)| *label)
        .unwrap_or("Very Low")
}

pub fn method_multiplier(won: bool, method: Option<FinishMethod>) -> f64 {
    use FinishMethod::*;
    match (won, method) {
        (true, Some(Knockout)) => 1.8,
        (true, Some(TechnicalKnockout)) => 1.6,
        (true, Some(Submission)) => 1.4,
        (true, Some(Decision)) => 1.0,
        (true, Some(Disqualification)) => 0.4,
        (true, Some(NoContest)) => 0.2,
        (false, Some(Knockout)) => 0.3,
        (false, Some(TechnicalKnockout)) => 0.4,
        (false, Some(Submission)) => 0.5,
        (false, Some(Decision)) => 1.0,
        (false, Some(Disqualification)) => 1.2,
        (false, Some(NoContest)) => 1.5,
        (_, None) => 1.0,
    }
}

pub fn round_multiplier(won: bool, round: u32) -> f64 {
    const WIN: [f64; 5] = [2.0, 1.7, 1.3, 1.0, 0.8];
    const LOSS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

    let table = if won { &WIN } else { &LOSS };
    match round {
        1..=5 => table[round as usize - 1],
        _ => 1.0,
    }
}

/// Difficulty of a single fight from one fighter's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightDifficulty {
    pub fight_code: String,
    pub opponent_code: String,
    pub won: bool,
    pub method: Option<FinishMethod>,
    pub actual_rounds: u32,
    /// Opponent's overall rating, absent when the opponent has no record.
    pub base_rating: Option<Rating>,
    pub method_multiplier: f64,
    pub round_multiplier: f64,
    /// 1..=100, or 0 when the opponent is unknown.
    pub score: u8,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_archetype: Option<String>,
}

impl FightDifficulty {
    pub fn is_scored(&self) -> bool {
        self.base_rating.is_some()
    }
}

/// Opponent rating and archetype as seen by the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct OpponentRating {
    pub rating: Rating,
    pub archetype: String,
}

/// Score one fight for `fighter_code`. `fighter_a` is the winner.
pub fn score_fight(
    fight: &Fight,
    fighter_code: &str,
    opponent: Option<&OpponentRating>,
) -> FightDifficulty {
    let won = fight.is_winner(fighter_code);
    let opponent_code = fight
        .opponent_of(fighter_code)
        .unwrap_or_default()
        .to_string();
    let method = fight.method();
    let m = method_multiplier(won, method);
    let r = round_multiplier(won, fight.actual_rounds);

    let score = match opponent {
        Some(opp) => Rating::percent(opp.rating.as_f64() * m * r).value(),
        None => 0,
    };

    FightDifficulty {
        fight_code: fight.fight_code.clone(),
        opponent_code,
        won,
        method,
        actual_rounds: fight.actual_rounds,
        base_rating: opponent.map(|o| o.rating),
        method_multiplier: m,
        round_multiplier: r,
        score,
        description: describe(score).to_string(),
        opponent_archetype: opponent.map(|o| o.archetype.clone()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeDifficulty {
    pub count: u32,
    pub average_score: u32,
}

/// Career summary across every scored fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedDifficulty {
    pub total_score: u32,
    pub average_score: u32,
    pub total_fights: u32,
    pub wins: u32,
    pub losses: u32,
    /// Rounded percent.
    pub win_rate: u32,
    pub description: String,
    pub win_breakdown: OutcomeDifficulty,
    pub loss_breakdown: OutcomeDifficulty,
    pub fights: Vec<FightDifficulty>,
}

fn rounded_mean(total: u32, count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    (f64::from(total) / f64::from(count)).round() as u32
}

/// Combine per-fight scores. Fights without an opponent record are listed
/// but do not count toward the totals.
pub fn combine(fights: Vec<FightDifficulty>) -> CombinedDifficulty {
    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut win_total = 0u32;
    let mut loss_total = 0u32;

    for fight in fights.iter().filter(|f| f.is_scored()) {
        let score = u32::from(fight.score);
        if fight.won {
            wins += 1;
            win_total += score;
        } else {
            losses += 1;
            loss_total += score;
        }
    }

    let total_fights = wins + losses;
    let total_score = win_total + loss_total;
    let average_score = rounded_mean(total_score, total_fights);

    let description = if fights.is_empty() {
        NO_FIGHTS.to_string()
    } else {
        describe(average_score.min(100) as u8).to_string()
    };

    CombinedDifficulty {
        total_score,
        average_score,
        total_fights,
        wins,
        losses,
        win_rate: rounded_mean(wins * 100, total_fights),
        description,
        win_breakdown: OutcomeDifficulty {
            count: wins,
            average_score: rounded_mean(win_total, wins),
        },
        loss_breakdown: OutcomeDifficulty {
            count: losses,
            average_score: rounded_mean(loss_total, losses),
        },
        fights,
    }
}
