//! Lookups over the snapshot collections.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::jsonl::{JsonlReader, JsonlWriter, SnapshotKind};
use super::{StorageConfig, StorageError};
use crate::models::{CombinationRecord, Fight, FighterRecord, RatingReport, WeightClassBaseline};

/// Read access to fighters, weight classes, fights and combination counters,
/// plus the derived ratings file.
///
/// Files are re-read on every call so edits to the snapshots are picked up
/// without a restart.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    config: StorageConfig,
}

impl SnapshotStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    fn reader<T: serde::de::DeserializeOwned>(&self, kind: SnapshotKind) -> JsonlReader<T> {
        JsonlReader::for_snapshot(&self.config, kind)
    }

    pub fn fighters(&self) -> Result<Vec<FighterRecord>, StorageError> {
        self.reader(SnapshotKind::Fighters).read_all()
    }

    pub fn find_fighter(&self, code: &str) -> Result<Option<FighterRecord>, StorageError> {
        self.reader::<FighterRecord>(SnapshotKind::Fighters)
            .find(|f| f.fighter_code == code)
    }

    pub fn weight_classes(&self) -> Result<Vec<WeightClassBaseline>, StorageError> {
        self.reader(SnapshotKind::WeightClasses).read_all()
    }

    /// Weight class by name, ignoring case and surrounding whitespace.
    pub fn find_weight_class(
        &self,
        name: &str,
    ) -> Result<Option<WeightClassBaseline>, StorageError> {
        self.reader::<WeightClassBaseline>(SnapshotKind::WeightClasses)
            .find(|wc| wc.matches_name(name))
    }

    /// Baseline for the fighter's own weight class, if one is recorded.
    pub fn baseline_for(
        &self,
        fighter: &FighterRecord,
    ) -> Result<Option<WeightClassBaseline>, StorageError> {
        let Some(name) = fighter.weight_class.as_deref() else {
            debug!("Fighter {} has no weight class", fighter.fighter_code);
            return Ok(None);
        };

        let baseline = self.find_weight_class(name)?;
        if baseline.is_none() {
            warn!(
                "No weight class baseline named {:?} for fighter {}",
                name, fighter.fighter_code
            );
        }
        Ok(baseline)
    }

    pub fn fights(&self) -> Result<Vec<Fight>, StorageError> {
        self.reader(SnapshotKind::Fights).read_all()
    }

    pub fn find_fight(&self, code: &str) -> Result<Option<Fight>, StorageError> {
        self.reader::<Fight>(SnapshotKind::Fights)
            .find(|f| f.fight_code == code)
    }

    /// The fighter's combination counters. Only the first document per
    /// fighter is used.
    pub fn combinations_for(
        &self,
        code: &str,
    ) -> Result<Option<CombinationRecord>, StorageError> {
        self.reader::<CombinationRecord>(SnapshotKind::Combinations)
            .find(|c| c.fighter_code == code)
    }

    /// Baseline for a fight: the fight's own weight class, else fighter A's.
    pub fn baseline_for_fight(
        &self,
        fight: &Fight,
        fighter_a: Option<&FighterRecord>,
    ) -> Result<Option<WeightClassBaseline>, StorageError> {
        if let Some(name) = fight.weight_class.as_deref() {
            if let Some(baseline) = self.find_weight_class(name)? {
                return Ok(Some(baseline));
            }
        }
        match fighter_a {
            Some(fighter) => self.baseline_for(fighter),
            None => Ok(None),
        }
    }

    /// Every fight the fighter took part in, in file order.
    pub fn fights_for(&self, code: &str) -> Result<Vec<Fight>, StorageError> {
        self.reader::<Fight>(SnapshotKind::Fights)
            .read_where(|f| f.involves(code))
    }

    /// Records of everyone the fighter faced in `fights`.
    pub fn opponents_of(
        &self,
        code: &str,
        fights: &[Fight],
    ) -> Result<Vec<FighterRecord>, StorageError> {
        let wanted: HashSet<&str> = fights.iter().filter_map(|f| f.opponent_of(code)).collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        self.reader::<FighterRecord>(SnapshotKind::Fighters)
            .read_where(|f| wanted.contains(f.fighter_code.as_str()))
    }

    /// Append computed reports to `derived/ratings.jsonl`.
    pub fn append_reports(&self, reports: &[RatingReport]) -> Result<usize, StorageError> {
        JsonlWriter::new(self.config.ratings_path()).append_batch(reports)
    }

    pub fn reports(&self) -> Result<Vec<RatingReport>, StorageError> {
        JsonlReader::new(self.config.ratings_path()).read_all()
    }
}
