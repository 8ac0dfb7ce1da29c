//! Derived rating types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A bounded integer rating.
///
/// Construct through [`Rating::percent`] (1..=100) or [`Rating::graded`]
/// (1..=99); both round half away from zero before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    /// Neutral score used whenever an input is missing.
    pub const NEUTRAL: Rating = Rating(50);

    /// Round and clamp `score` into `min..=max`. NaN maps to neutral.
    pub fn bounded(score: f64, min: u8, max: u8) -> Self {
        if score.is_nan() {
            return Self::NEUTRAL;
        }
        let clamped = score.round().clamp(f64::from(min), f64::from(max));
        Rating(clamped as u8)
    }

    /// Rating on the 1..=100 category scale.
    pub fn percent(score: f64) -> Self {
        Self::bounded(score, 1, 100)
    }

    /// Rating on the 1..=99 scale.
    pub fn graded(score: f64) -> Self {
        Self::bounded(score, 1, 99)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text stored in place of an aggression score for thin records.
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

/// Aggression result. Fighters with too few tracked fights are not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggressionRating {
    Rated(Rating),
    InsufficientData,
}

impl AggressionRating {
    pub fn rating(&self) -> Option<Rating> {
        match self {
            AggressionRating::Rated(r) => Some(*r),
            AggressionRating::InsufficientData => None,
        }
    }

    /// Numeric value, or `fallback` when unscored.
    pub fn value_or(&self, fallback: f64) -> f64 {
        self.rating().map_or(fallback, Rating::as_f64)
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, AggressionRating::InsufficientData)
    }
}

impl std::fmt::Display for AggressionRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggressionRating::Rated(r) => write!(f, "{}", r),
            AggressionRating::InsufficientData => write!(f, "{}", INSUFFICIENT_DATA),
        }
    }
}

impl Serialize for AggressionRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AggressionRating::Rated(r) => serializer.serialize_u8(r.value()),
            AggressionRating::InsufficientData => serializer.serialize_str(INSUFFICIENT_DATA),
        }
    }
}

impl<'de> Deserialize<'de> for AggressionRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Score(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Score(score) => Ok(AggressionRating::Rated(Rating::percent(score))),
            Repr::Text(text) if text == INSUFFICIENT_DATA => Ok(AggressionRating::InsufficientData),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "unexpected aggression value: {text}"
            ))),
        }
    }
}

/// Fighting style used to pick a weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FighterStyle {
    Striker,
    Grappler,
    KnockoutArtist,
    SubmissionSpecialist,
    Mixed,
    Balanced,
}

impl std::fmt::Display for FighterStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FighterStyle::Striker => write!(f, "striker"),
            FighterStyle::Grappler => write!(f, "grappler"),
            FighterStyle::KnockoutArtist => write!(f, "knockout_artist"),
            FighterStyle::SubmissionSpecialist => write!(f, "submission_specialist"),
            FighterStyle::Mixed => write!(f, "mixed"),
            FighterStyle::Balanced => write!(f, "balanced"),
        }
    }
}

/// The six category ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRatings {
    pub striking: Rating,
    pub takedowns: Rating,
    pub defense: Rating,
    pub aggression: AggressionRating,
    pub finishes: Rating,
    pub position: Rating,
}

impl CategoryRatings {
    /// Every category at the neutral score; aggression unscored.
    pub fn neutral() -> Self {
        Self {
            striking: Rating::NEUTRAL,
            takedowns: Rating::NEUTRAL,
            defense: Rating::NEUTRAL,
            aggression: AggressionRating::InsufficientData,
            finishes: Rating::NEUTRAL,
            position: Rating::NEUTRAL,
        }
    }
}

/// Composite rating with style classification and narrative labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallRating {
    pub rating: Rating,
    pub style: FighterStyle,
    pub archetype: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub specialist_bonus: u8,
    pub categories: CategoryRatings,
}

/// Which movement sub-domain leads, or `Even` when all are within 5 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementDomain {
    Cage,
    Clinch,
    Ground,
    Even,
}

impl std::fmt::Display for MovementDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementDomain::Cage => write!(f, "cage"),
            MovementDomain::Clinch => write!(f, "clinch"),
            MovementDomain::Ground => write!(f, "ground"),
            MovementDomain::Even => write!(f, "even"),
        }
    }
}

/// Cage, clinch and ground control sub-ratings plus their composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRating {
    pub cage: Rating,
    pub clinch: Rating,
    pub ground: Rating,
    pub overall_movement_grade: Rating,
    pub dominant: MovementDomain,
    pub archetype: String,
}
