//! Metric aggregation shared by fighter records and weight-class baselines.
//!
//! Both document shapes implement [`StatSource`], so every per-minute,
//! per-fight and percentage figure is computed by one formula regardless of
//! which side of a comparison it feeds. Missing sections arrive here as
//! all-zero values, and every division guards its denominator.

use crate::models::{
    CagePosition, ClinchStats, FighterRecord, GroundStats, StrikesAbsorbed, TakedownStats,
    TotalStats, WeightClassBaseline,
};

/// Outcome counts normalised across the two document shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OutcomeTotals {
    pub ko_wins: f64,
    pub tko_wins: f64,
    pub sub_wins: f64,
    pub decision_wins: f64,
    pub wins: f64,
    pub ko_losses: f64,
    pub tko_losses: f64,
    pub sub_losses: f64,
    pub decision_losses: f64,
    pub losses: f64,
    pub draws: f64,
    pub no_contests: f64,
}

impl OutcomeTotals {
    pub fn finishes(&self) -> f64 {
        self.ko_wins + self.tko_wins + self.sub_wins
    }

    pub fn knockout_wins(&self) -> f64 {
        self.ko_wins + self.tko_wins
    }

    pub fn knockout_losses(&self) -> f64 {
        self.ko_losses + self.tko_losses
    }
}

/// Anything that carries career counters.
pub trait StatSource {
    fn minutes(&self) -> f64;
    fn fights(&self) -> f64;
    fn rounds(&self) -> f64;
    fn strikes(&self) -> TotalStats;
    fn absorbed(&self) -> StrikesAbsorbed;
    fn ground(&self) -> GroundStats;
    fn clinch(&self) -> ClinchStats;
    fn takedowns(&self) -> TakedownStats;
    fn cage(&self) -> CagePosition;
    fn submission_attempts(&self) -> f64;
    fn outcomes(&self) -> OutcomeTotals;
}

impl StatSource for FighterRecord {
    fn minutes(&self) -> f64 {
        self.minutes_tracked
    }

    fn fights(&self) -> f64 {
        self.fights_tracked
    }

    fn rounds(&self) -> f64 {
        self.rounds_tracked
    }

    fn strikes(&self) -> TotalStats {
        self.total()
    }

    fn absorbed(&self) -> StrikesAbsorbed {
        FighterRecord::absorbed(self)
    }

    fn ground(&self) -> GroundStats {
        FighterRecord::ground(self)
    }

    fn clinch(&self) -> ClinchStats {
        FighterRecord::clinch(self)
    }

    fn takedowns(&self) -> TakedownStats {
        FighterRecord::takedowns(self)
    }

    fn cage(&self) -> CagePosition {
        self.cage
    }

    fn submission_attempts(&self) -> f64 {
        self.submissions().sub_attempts
    }

    fn outcomes(&self) -> OutcomeTotals {
        let o = FighterRecord::outcomes(self);
        let decision_wins = o.decision_wins();
        let decision_losses = o.decision_losses();

        // Older documents only carry the per-method splits.
        let wins = if o.wins > 0.0 {
            o.wins
        } else {
            o.ko_wins + o.tko_wins + o.sub_wins + decision_wins
        };
        let losses = if o.losses > 0.0 {
            o.losses
        } else {
            o.ko_losses + o.tko_losses + o.sub_losses + decision_losses
        };

        OutcomeTotals {
            ko_wins: o.ko_wins,
            tko_wins: o.tko_wins,
            sub_wins: o.sub_wins,
            decision_wins,
            wins,
            ko_losses: o.ko_losses,
            tko_losses: o.tko_losses,
            sub_losses: o.sub_losses,
            decision_losses,
            losses,
            draws: o.draws,
            no_contests: o.no_contests,
        }
    }
}

impl StatSource for WeightClassBaseline {
    fn minutes(&self) -> f64 {
        self.minutes
    }

    fn fights(&self) -> f64 {
        self.fights
    }

    fn rounds(&self) -> f64 {
        self.rounds
    }

    fn strikes(&self) -> TotalStats {
        self.strikes
    }

    fn absorbed(&self) -> StrikesAbsorbed {
        self.absorbed
    }

    fn ground(&self) -> GroundStats {
        self.ground
    }

    fn clinch(&self) -> ClinchStats {
        self.clinch
    }

    fn takedowns(&self) -> TakedownStats {
        self.takedowns
    }

    fn cage(&self) -> CagePosition {
        self.cage
    }

    fn submission_attempts(&self) -> f64 {
        WeightClassBaseline::submission_attempts(self)
    }

    fn outcomes(&self) -> OutcomeTotals {
        let o = self.outcomes;
        OutcomeTotals {
            ko_wins: o.kowins,
            tko_wins: o.tkowins,
            sub_wins: o.subwin,
            decision_wins: o.decwin,
            wins: o.wins(),
            ko_losses: o.koloss,
            tko_losses: o.tkoloss,
            sub_losses: o.subloss,
            decision_losses: o.decloss,
            losses: o.losses(),
            draws: 0.0,
            no_contests: 0.0,
        }
    }
}

/// `value / per`, or 0 when `per` is not positive.
pub fn rate(value: f64, per: f64) -> f64 {
    if per > 0.0 {
        value / per
    } else {
        0.0
    }
}

/// `value` when positive, otherwise 1. Used for per-unit rates that should
/// degrade to raw totals instead of zero.
pub fn or_one(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        1.0
    }
}

/// `made / thrown * 100`, or 0 with nothing thrown.
pub fn accuracy(made: f64, thrown: f64) -> f64 {
    rate(made, thrown) * 100.0
}

/// Landed and thrown strikes per minute split by origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrikesPerMinute {
    pub stand_landed: f64,
    pub clinch_landed: f64,
    pub ground_landed: f64,
    pub stand_thrown: f64,
    pub clinch_thrown: f64,
    pub ground_thrown: f64,
}

impl StrikesPerMinute {
    pub fn landed(&self) -> f64 {
        self.stand_landed + self.clinch_landed + self.ground_landed
    }

    pub fn thrown(&self) -> f64 {
        self.stand_thrown + self.clinch_thrown + self.ground_thrown
    }
}

/// Standing strikes thrown: the stored total, or the per-kind sum.
pub fn standing_thrown<S: StatSource>(src: &S) -> f64 {
    let strikes = src.strikes();
    if strikes.total_strikes_thrown > 0.0 {
        strikes.total_strikes_thrown
    } else {
        strikes.thrown_by_kind()
    }
}

/// Strikes landed: the stored total, or the per-kind sum.
pub fn strikes_landed<S: StatSource>(src: &S) -> f64 {
    let strikes = src.strikes();
    if strikes.total_strikes_landed > 0.0 {
        strikes.total_strikes_landed
    } else {
        crate::models::StrikeKind::ALL
            .iter()
            .map(|k| strikes.counter(*k).made)
            .sum()
    }
}

/// Every strike thrown: standing kinds plus clinch and ground.
pub fn total_strikes_thrown<S: StatSource>(src: &S) -> f64 {
    src.strikes().thrown_by_kind()
        + src.clinch().total_clinch_strikes_thrown
        + src.ground().total_ground_strikes_thrown
}

/// Per-minute strike output split into stand, clinch and ground.
///
/// Stand landed is what remains of the landed total after clinch and ground
/// strikes are removed, floored at zero. Stand thrown is the per-kind sum.
pub fn strikes_per_minute<S: StatSource>(src: &S) -> StrikesPerMinute {
    let minutes = src.minutes();
    if minutes <= 0.0 {
        return StrikesPerMinute::default();
    }

    let clinch = src.clinch();
    let ground = src.ground();

    let landed = strikes_landed(src);
    let stand_landed =
        (landed - ground.total_ground_strikes_made - clinch.total_clinch_strikes_made).max(0.0);
    let stand_thrown = src.strikes().thrown_by_kind();

    StrikesPerMinute {
        stand_landed: stand_landed / minutes,
        clinch_landed: clinch.total_clinch_strikes_made / minutes,
        ground_landed: ground.total_ground_strikes_made / minutes,
        stand_thrown: stand_thrown / minutes,
        clinch_thrown: clinch.total_clinch_strikes_thrown / minutes,
        ground_thrown: ground.total_ground_strikes_thrown / minutes,
    }
}

/// `landed / (landed + missed) * 100` over the standing counters.
pub fn striking_accuracy<S: StatSource>(src: &S) -> f64 {
    let landed = strikes_landed(src);
    let missed = src.strikes().missed_by_kind();
    accuracy(landed, landed + missed)
}

/// Strikes thrown per minute from every position, used for aggression.
pub fn strike_output_per_minute<S: StatSource>(src: &S) -> f64 {
    let strikes = src.strikes();
    let thrown = strikes.punches_thrown()
        + strikes.kicks_thrown()
        + strikes.total_elbows_thrown
        + strikes.total_spin_back_fists_thrown
        + src.clinch().total_clinch_strikes_thrown
        + src.ground().total_ground_strikes_thrown;
    rate(thrown, src.minutes())
}

pub fn takedown_attempts<S: StatSource>(src: &S) -> f64 {
    src.takedowns().attempts()
}

pub fn takedown_successes<S: StatSource>(src: &S) -> f64 {
    src.takedowns().successes()
}

/// Successful takedowns as a percentage of attempts.
pub fn takedown_success_pct<S: StatSource>(src: &S) -> f64 {
    accuracy(takedown_successes(src), takedown_attempts(src))
}

/// Defended takedowns as a percentage of those attempted against.
pub fn takedown_defense_pct<S: StatSource>(src: &S) -> f64 {
    let td = src.takedowns();
    accuracy(td.defended(), td.times_attempted_against())
}

pub fn takedown_attempts_per_fight<S: StatSource>(src: &S) -> f64 {
    takedown_attempts(src) / or_one(src.fights())
}

pub fn absorbed_total<S: StatSource>(src: &S) -> f64 {
    src.absorbed().total()
}

/// Absorbed strikes per minute; zero minutes counts as one.
pub fn absorbed_per_minute<S: StatSource>(src: &S) -> f64 {
    absorbed_total(src) / or_one(src.minutes())
}

/// KO, TKO and submission wins as a percentage of all wins.
pub fn finish_percentage<S: StatSource>(src: &S) -> f64 {
    let o = src.outcomes();
    accuracy(o.finishes(), o.wins)
}

/// KO and TKO wins as a percentage of all wins.
pub fn ko_tko_percentage<S: StatSource>(src: &S) -> f64 {
    let o = src.outcomes();
    accuracy(o.knockout_wins(), o.wins)
}

/// Submission wins as a percentage of attempts.
pub fn submission_success_pct<S: StatSource>(src: &S) -> f64 {
    accuracy(src.outcomes().sub_wins, src.submission_attempts())
}

/// Position counts across the cage, clinch and ground.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionTotals {
    pub center_octagon: f64,
    pub pushing_against_cage: f64,
    pub pushed_back_to_cage: f64,
    pub in_clinch: f64,
    pub being_clinched: f64,
    pub on_top_ground: f64,
    pub on_bottom_ground: f64,
}

impl PositionTotals {
    pub fn total(&self) -> f64 {
        self.center_octagon
            + self.pushing_against_cage
            + self.pushed_back_to_cage
            + self.in_clinch
            + self.being_clinched
            + self.on_top_ground
            + self.on_bottom_ground
    }

    /// Center, cage pressure, clinch control and top position.
    pub fn controlling(&self) -> f64 {
        self.center_octagon + self.pushing_against_cage + self.in_clinch + self.on_top_ground
    }

    /// Control that pins the opponent: cage pressure, clinch control, top.
    pub fn pressuring(&self) -> f64 {
        self.pushing_against_cage + self.in_clinch + self.on_top_ground
    }
}

pub fn positions<S: StatSource>(src: &S) -> PositionTotals {
    let cage = src.cage();
    let clinch = src.clinch();
    let ground = src.ground();
    PositionTotals {
        center_octagon: cage.center_octagon,
        pushing_against_cage: cage.pushing_against_cage,
        pushed_back_to_cage: cage.pushed_back_to_cage,
        in_clinch: clinch.in_clinch,
        being_clinched: clinch.being_clinched,
        on_top_ground: ground.on_top_ground,
        on_bottom_ground: ground.on_bottom_ground,
    }
}

/// Pressuring positions as a percentage of all positional events.
pub fn positional_dominance_pct<S: StatSource>(src: &S) -> f64 {
    let p = positions(src);
    accuracy(p.pressuring(), p.total())
}
