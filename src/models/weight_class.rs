//! Weight-class accumulator document (`weightClass` collection).
//!
//! The document is flat: the same counters that a fighter record nests under
//! sections sit at the top level here, alongside class outcome totals.

use serde::{Deserialize, Serialize};

use super::fighter::{
    CagePosition, ClinchStats, GroundStats, StanceMatchupStats, StrikesAbsorbed, TakedownStats,
    TotalStats,
};

/// Outcome totals summed across every fighter in the class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct ClassOutcomeTotals {
    pub kowins: f64,
    pub tkowins: f64,
    pub subwin: f64,
    pub decwin: f64,
    pub koloss: f64,
    pub tkoloss: f64,
    pub subloss: f64,
    pub decloss: f64,
}

impl ClassOutcomeTotals {
    pub fn wins(&self) -> f64 {
        self.kowins + self.tkowins + self.subwin + self.decwin
    }

    pub fn losses(&self) -> f64 {
        self.koloss + self.tkoloss + self.subloss + self.decloss
    }

    pub fn finishes(&self) -> f64 {
        self.kowins + self.tkowins + self.subwin
    }
}

/// Aggregate counters for every fighter in one weight class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightClassBaseline {
    #[serde(rename = "weightclassname", default)]
    pub name: String,

    #[serde(default)]
    pub weight: f64,

    #[serde(default)]
    pub minutes: f64,

    #[serde(default)]
    pub fights: f64,

    #[serde(default)]
    pub rounds: f64,

    /// Submission attempts. Older documents use the lowercase `subattempt`.
    #[serde(rename = "SubAttempts", default)]
    pub sub_attempts: f64,

    #[serde(rename = "subattempt", default, skip_serializing_if = "Option::is_none")]
    pub legacy_sub_attempts: Option<f64>,

    #[serde(flatten)]
    pub outcomes: ClassOutcomeTotals,

    #[serde(flatten)]
    pub strikes: TotalStats,

    #[serde(flatten)]
    pub absorbed: StrikesAbsorbed,

    #[serde(flatten)]
    pub ground: GroundStats,

    #[serde(flatten)]
    pub clinch: ClinchStats,

    #[serde(flatten)]
    pub takedowns: TakedownStats,

    #[serde(flatten)]
    pub cage: CagePosition,

    #[serde(flatten)]
    pub stances: StanceMatchupStats,
}

impl WeightClassBaseline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Submission attempts, reading the legacy field when the current one is empty.
    pub fn submission_attempts(&self) -> f64 {
        if self.sub_attempts > 0.0 {
            self.sub_attempts
        } else {
            self.legacy_sub_attempts.unwrap_or(0.0)
        }
    }

    /// Case-insensitive name comparison used for lookups.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flat_document() {
        let json = r#"{
            "weightclassname": "Lightweight",
            "weight": 155,
            "minutes": 1200,
            "fights": 80,
            "rounds": 240,
            "kowins": 12, "tkowins": 18, "subwin": 10, "decwin": 40,
            "TotalJabsThrown": 5000, "TotalJabsMade": 1500,
            "JabsAbsorbed": 1400,
            "TotalGroundStrikesThrown": 900,
            "InClinch": 300,
            "SingleLegTakedownAttempts": 120,
            "CenterOctagon": 800,
            "subattempt": 44
        }"#;

        let baseline: WeightClassBaseline = serde_json::from_str(json).unwrap();

        assert_eq!(baseline.name, "Lightweight");
        assert_eq!(baseline.fights, 80.0);
        assert_eq!(baseline.outcomes.wins(), 80.0);
        assert_eq!(baseline.outcomes.finishes(), 40.0);
        assert_eq!(baseline.strikes.total_jabs_thrown, 5000.0);
        assert_eq!(baseline.absorbed.jabs_absorbed, 1400.0);
        assert_eq!(baseline.ground.total_ground_strikes_thrown, 900.0);
        assert_eq!(baseline.clinch.in_clinch, 300.0);
        assert_eq!(baseline.takedowns.single_leg_takedown_attempts, 120.0);
        assert_eq!(baseline.cage.center_octagon, 800.0);
        assert_eq!(baseline.submission_attempts(), 44.0);
    }

    #[test]
    fn test_submission_attempts_prefers_current_field() {
        let baseline = WeightClassBaseline {
            sub_attempts: 10.0,
            legacy_sub_attempts: Some(3.0),
            ..Default::default()
        };
        assert_eq!(baseline.submission_attempts(), 10.0);
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let baseline = WeightClassBaseline::new("Light Heavyweight");
        assert!(baseline.matches_name("light heavyweight"));
        assert!(baseline.matches_name(" Light Heavyweight "));
        assert!(!baseline.matches_name("Heavyweight"));
    }
}
