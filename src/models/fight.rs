//! Individual fight results (`fights` collection) with optional per-corner
//! counters.

use serde::{Deserialize, Serialize};

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinishMethod {
    #[serde(rename = "KO")]
    Knockout,
    #[serde(rename = "TKO")]
    TechnicalKnockout,
    #[serde(rename = "SUB")]
    Submission,
    #[serde(rename = "DEC")]
    Decision,
    #[serde(rename = "DQ")]
    Disqualification,
    #[serde(rename = "NC")]
    NoContest,
}

impl FinishMethod {
    /// Parse the stored method string. Unknown methods return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KO" => Some(FinishMethod::Knockout),
            "TKO" => Some(FinishMethod::TechnicalKnockout),
            "SUB" | "SUBMISSION" => Some(FinishMethod::Submission),
            "DEC" | "DECISION" | "UD" | "SD" | "MD" => Some(FinishMethod::Decision),
            "DQ" => Some(FinishMethod::Disqualification),
            "NC" => Some(FinishMethod::NoContest),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FinishMethod::Knockout => "KO",
            FinishMethod::TechnicalKnockout => "TKO",
            FinishMethod::Submission => "SUB",
            FinishMethod::Decision => "DEC",
            FinishMethod::Disqualification => "DQ",
            FinishMethod::NoContest => "NC",
        }
    }
}

impl std::fmt::Display for FinishMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single fight. `fighterA` is the winner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fight {
    #[serde(default)]
    pub fight_code: String,
    #[serde(default)]
    pub event_code: String,
    #[serde(default)]
    pub fighter_a: String,
    #[serde(default)]
    pub fighter_b: String,
    /// Stored as free text; see [`Fight::method`].
    #[serde(default)]
    pub method_of_finish: String,
    #[serde(default)]
    pub actual_rounds: u32,
    #[serde(default)]
    pub scheduled_rounds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_class: Option<String>,
    /// Clock time ("m:ss") at which the last round ended.
    #[serde(default, alias = "Time", skip_serializing_if = "Option::is_none")]
    pub final_round_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_a: Option<CornerStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_b: Option<CornerStats>,
}

/// One corner's landed counters for a single fight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerStats {
    pub jabs: f64,
    pub straights: f64,
    pub cross: f64,
    pub hooks: f64,
    pub uppercuts: f64,
    pub overhands: f64,
    #[serde(rename = "bodykick")]
    pub body_kicks: f64,
    #[serde(rename = "headkick")]
    pub head_kicks: f64,
    #[serde(rename = "legkick")]
    pub leg_kicks: f64,
    pub elbows: f64,
    #[serde(rename = "spinbackfist")]
    pub spin_back_fists: f64,
    #[serde(rename = "tdattempt")]
    pub takedown_attempts: f64,
    #[serde(rename = "tdmake")]
    pub takedowns_landed: f64,
    #[serde(rename = "subattempt")]
    pub sub_attempts: f64,
    #[serde(rename = "numofknockdowns")]
    pub knockdowns: f64,
    #[serde(rename = "numofstuns")]
    pub stuns: f64,
    #[serde(rename = "highImpact")]
    pub high_impact: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stance: Option<String>,
    /// Strikes landed in each round, first round first.
    #[serde(rename = "roundStrikesLanded")]
    pub round_strikes_landed: Vec<f64>,
}

impl CornerStats {
    /// Sum of the per-kind landed counters.
    pub fn strikes_by_kind(&self) -> f64 {
        self.jabs
            + self.straights
            + self.cross
            + self.hooks
            + self.uppercuts
            + self.overhands
            + self.body_kicks
            + self.head_kicks
            + self.leg_kicks
            + self.elbows
            + self.spin_back_fists
    }

    /// Strikes landed over the first `rounds` rounds, falling back to the
    /// per-kind sum when no round figures were recorded.
    pub fn strikes_landed(&self, rounds: u32) -> f64 {
        if self.round_strikes_landed.is_empty() {
            return self.strikes_by_kind();
        }
        self.round_strikes_landed
            .iter()
            .take(rounds as usize)
            .sum()
    }
}

impl Fight {
    pub fn method(&self) -> Option<FinishMethod> {
        FinishMethod::parse(&self.method_of_finish)
    }

    pub fn involves(&self, fighter_code: &str) -> bool {
        self.fighter_a == fighter_code || self.fighter_b == fighter_code
    }

    /// The other corner, if `fighter_code` fought in this bout.
    pub fn opponent_of(&self, fighter_code: &str) -> Option<&str> {
        if self.fighter_a == fighter_code {
            Some(&self.fighter_b)
        } else if self.fighter_b == fighter_code {
            Some(&self.fighter_a)
        } else {
            None
        }
    }

    pub fn is_winner(&self, fighter_code: &str) -> bool {
        self.fighter_a == fighter_code
    }

    /// The fighter's corner stats, if recorded.
    pub fn corner(&self, fighter_code: &str) -> Option<&CornerStats> {
        if self.fighter_a == fighter_code {
            self.stats_a.as_ref()
        } else if self.fighter_b == fighter_code {
            self.stats_b.as_ref()
        } else {
            None
        }
    }

    /// Elapsed fight time: five minutes per completed round plus the final
    /// round clock. A missing or unreadable clock counts as zero.
    pub fn minutes(&self) -> f64 {
        let full_rounds = self.actual_rounds.saturating_sub(1) as f64 * 5.0;
        let last = self
            .final_round_time
            .as_deref()
            .and_then(parse_clock)
            .unwrap_or(0.0);
        full_rounds + last
    }
}

/// "m:ss" to fractional minutes.
fn parse_clock(clock: &str) -> Option<f64> {
    let (minutes, seconds) = clock.trim().split_once(':')?;
    let minutes: f64 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    Some(minutes + seconds / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fight {
        Fight {
            fight_code: "FT1".to_string(),
            event_code: "EV1".to_string(),
            fighter_a: "A".to_string(),
            fighter_b: "B".to_string(),
            method_of_finish: "tko".to_string(),
            actual_rounds: 2,
            scheduled_rounds: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(sample().method(), Some(FinishMethod::TechnicalKnockout));
        assert_eq!(FinishMethod::parse("Decision"), Some(FinishMethod::Decision));
        assert_eq!(FinishMethod::parse("???"), None);
    }

    #[test]
    fn test_opponent_and_winner() {
        let fight = sample();
        assert_eq!(fight.opponent_of("A"), Some("B"));
        assert_eq!(fight.opponent_of("B"), Some("A"));
        assert_eq!(fight.opponent_of("C"), None);
        assert!(fight.is_winner("A"));
        assert!(!fight.is_winner("B"));
    }

    #[test]
    fn test_minutes_from_final_round_clock() {
        let mut fight = sample();
        fight.final_round_time = Some("2:30".to_string());
        assert!((fight.minutes() - 7.5).abs() < 1e-9);

        fight.final_round_time = None;
        assert!((fight.minutes() - 5.0).abs() < 1e-9);

        fight.final_round_time = Some("garbage".to_string());
        assert!((fight.minutes() - 5.0).abs() < 1e-9);

        fight.actual_rounds = 0;
        assert_eq!(fight.minutes(), 0.0);
    }

    #[test]
    fn test_corner_lookup() {
        let mut fight = sample();
        fight.stats_b = Some(CornerStats {
            jabs: 4.0,
            ..Default::default()
        });

        assert!(fight.corner("A").is_none());
        assert_eq!(fight.corner("B").map(|c| c.jabs), Some(4.0));
        assert!(fight.corner("C").is_none());
    }

    #[test]
    fn test_strikes_landed_prefers_rounds() {
        let corner = CornerStats {
            jabs: 10.0,
            hooks: 5.0,
            round_strikes_landed: vec![8.0, 12.0, 30.0],
            ..Default::default()
        };
        assert_eq!(corner.strikes_landed(2), 20.0);
        assert_eq!(corner.strikes_landed(3), 50.0);

        let no_rounds = CornerStats {
            round_strikes_landed: Vec::new(),
            ..corner
        };
        assert_eq!(no_rounds.strikes_landed(3), 15.0);
    }

    #[test]
    fn test_deserialize_corner_stats() {
        let json = r#"{"fightCode":"F","fighterA":"X","fighterB":"Y","actualRounds":2,"Time":"1:15","statsA":{"jabs":3,"headkick":1,"tdattempt":2,"tdmake":1,"roundStrikesLanded":[5,4]}}"#;
        let fight: Fight = serde_json::from_str(json).unwrap();
        assert_eq!(fight.final_round_time.as_deref(), Some("1:15"));

        let a = fight.corner("X").unwrap();
        assert_eq!(a.head_kicks, 1.0);
        assert_eq!(a.takedowns_landed, 1.0);
        assert_eq!(a.strikes_landed(fight.actual_rounds), 9.0);
        assert!(fight.stats_b.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"fightCode":"F","eventCode":"E","fighterA":"X","fighterB":"Y","methodOfFinish":"KO","actualRounds":1,"scheduledRounds":3}"#;
        let fight: Fight = serde_json::from_str(json).unwrap();
        assert_eq!(fight.fighter_b, "Y");
        assert_eq!(fight.method(), Some(FinishMethod::Knockout));
        assert_eq!(fight.actual_rounds, 1);
    }
}
