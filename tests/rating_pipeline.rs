use fightstats::calculate::normalize::{normalize_value, scale_tanh};
use fightstats::calculate::RatingEngine;
use fightstats::config::AppConfig;
use fightstats::models::{
    AggressionRating, CagePosition, CategoryRatings, ClassOutcomeTotals, CombinationRecord,
    CornerStats, Fight, FightOutcomeStats, FighterRecord, Rating, StrikesAbsorbed, TakedownStats,
    TotalStats, WeightClassBaseline,
};
use fightstats::storage::{JsonlWriter, SnapshotKind, SnapshotStore, StorageConfig};
use pretty_assertions::assert_eq;
use std::io::Write;

fn lightweight() -> WeightClassBaseline {
    WeightClassBaseline {
        name: "Lightweight".to_string(),
        weight: 155.0,
        minutes: 1000.0,
        fights: 100.0,
        rounds: 250.0,
        sub_attempts: 50.0,
        outcomes: ClassOutcomeTotals {
            kowins: 15.0,
            tkowins: 15.0,
            subwin: 10.0,
            decwin: 60.0,
            ..Default::default()
        },
        strikes: TotalStats {
            total_jabs_thrown: 4000.0,
            total_jabs_made: 2000.0,
            total_jabs_missed: Some(2000.0),
            total_strikes_landed: 2000.0,
            total_strikes_thrown: 4000.0,
            total_punches_thrown: 4000.0,
            ..Default::default()
        },
        absorbed: StrikesAbsorbed {
            jabs_absorbed: 2000.0,
            ..Default::default()
        },
        takedowns: TakedownStats {
            single_leg_takedown_attempts: 200.0,
            single_leg_takedown_success: 76.0,
            ..Default::default()
        },
        cage: CagePosition {
            center_octagon: 500.0,
            pushing_against_cage: 250.0,
            pushed_back_to_cage: 250.0,
        },
        ..Default::default()
    }
}

/// A lightweight whose counters are the class rates multiplied by `scale`.
fn scaled_fighter(code: &str, scale: f64) -> FighterRecord {
    FighterRecord {
        fighter_code: code.to_string(),
        fighter_name: format!("Fighter {code}"),
        weight_class: Some("Lightweight".to_string()),
        fights_tracked: 6.0,
        rounds_tracked: 15.0,
        minutes_tracked: 60.0,
        cage: CagePosition {
            center_octagon: 30.0 * scale,
            pushing_against_cage: 15.0 * scale,
            pushed_back_to_cage: 15.0,
        },
        total_stats: Some(TotalStats {
            total_jabs_thrown: 240.0,
            total_jabs_made: (120.0 * scale).min(240.0),
            total_jabs_missed: Some((240.0 - 120.0 * scale).max(0.0)),
            total_strikes_landed: (120.0 * scale).min(240.0),
            total_strikes_thrown: 240.0,
            total_punches_thrown: 240.0,
            ..Default::default()
        }),
        striking_stats: Some(StrikesAbsorbed {
            jabs_absorbed: 120.0 / scale.max(0.1),
            ..Default::default()
        }),
        takedown_stats: Some(TakedownStats {
            single_leg_takedown_attempts: 12.0 * scale,
            single_leg_takedown_success: 4.56 * scale,
            ..Default::default()
        }),
        fight_outcome_stats: Some(FightOutcomeStats {
            ko_wins: 1.0 * scale,
            tko_wins: 1.0,
            unanimous_decision_wins: 3.0,
            wins: 4.0 + scale,
            losses: 1.0,
            unanimous_decision_losses: 1.0,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn in_percent_range(r: Rating) -> bool {
    (1..=100).contains(&r.value())
}

#[test]
fn test_every_rating_stays_in_range() {
    let engine = RatingEngine::default();
    let class = lightweight();

    for scale in [0.0, 0.25, 1.0, 2.0, 10.0, 1000.0] {
        let f = scaled_fighter("S", scale);
        for baseline in [Some(&class), None] {
            let overall = engine.overall(&f, baseline);
            assert!((1..=99).contains(&overall.rating.value()), "scale {scale}");

            let c = overall.categories;
            assert!(in_percent_range(c.striking));
            assert!(in_percent_range(c.takedowns));
            assert!(in_percent_range(c.defense));
            assert!(in_percent_range(c.finishes));
            assert!(in_percent_range(c.position));
            if let Some(r) = c.aggression.rating() {
                assert!((1..=99).contains(&r.value()));
            }

            let movement = engine.movement(&f, baseline);
            assert!(in_percent_range(movement.cage));
            assert!(in_percent_range(movement.clinch));
            assert!(in_percent_range(movement.ground));
            assert!(in_percent_range(movement.overall_movement_grade));
        }
    }
}

#[test]
fn test_empty_class_never_panics() {
    let engine = RatingEngine::default();
    let empty = WeightClassBaseline::new("Empty");
    let f = scaled_fighter("E", 1.0);

    let overall = engine.overall(&f, Some(&empty));
    assert!((1..=99).contains(&overall.rating.value()));
    assert!(!overall.archetype.is_empty());
    assert_eq!(overall.weaknesses.len(), 1);
}

#[test]
fn test_all_zero_class_falls_back_to_raw_accuracy() {
    let engine = RatingEngine::default();
    let empty = WeightClassBaseline::new("Empty");
    // 180 of 240 jabs landed
    let f = scaled_fighter("Z", 1.5);

    assert_eq!(engine.categories(&f, Some(&empty)).striking.value(), 75);
    assert_eq!(engine.categories(&f, None).striking.value(), 75);
}

#[test]
fn test_empty_record_is_neutral() {
    let engine = RatingEngine::default();
    let f = FighterRecord::new("N", "Newcomer");
    let class = lightweight();

    let c = engine.categories(&f, Some(&class));
    assert_eq!(c, CategoryRatings::neutral());
    assert_eq!(c.striking, Rating::NEUTRAL);
    assert_eq!(c.takedowns, Rating::NEUTRAL);
    assert_eq!(c.defense, Rating::NEUTRAL);
    assert_eq!(c.finishes, Rating::NEUTRAL);
    assert_eq!(c.position, Rating::NEUTRAL);
    assert_eq!(c.aggression, AggressionRating::InsufficientData);
}

#[test]
fn test_same_inputs_same_ratings() {
    let engine = RatingEngine::default();
    let class = lightweight();
    let f = scaled_fighter("I", 1.5);

    assert_eq!(engine.overall(&f, Some(&class)), engine.overall(&f, Some(&class)));
    assert_eq!(engine.movement(&f, Some(&class)), engine.movement(&f, Some(&class)));
}

#[test]
fn test_defense_improves_as_absorption_falls() {
    let engine = RatingEngine::default();
    let class = lightweight();
    let mut f = scaled_fighter("D", 1.0);

    let mut last = 0;
    for absorbed in [400.0, 240.0, 120.0, 60.0, 10.0, 0.0] {
        if let Some(s) = f.striking_stats.as_mut() {
            s.jabs_absorbed = absorbed;
        }
        let defense = engine.categories(&f, Some(&class)).defense.value();
        assert!(defense >= last, "absorbed {absorbed}");
        last = defense;
    }
}

#[test]
fn test_normalizers_are_symmetric_around_parity() {
    assert!((scale_tanh(1.0) - 50.0).abs() < 0.01);
    for d in [0.1, 0.5, 0.9] {
        assert!((scale_tanh(1.0 + d) + scale_tanh(1.0 - d) - 100.0).abs() < 0.01);
    }

    assert!((normalize_value(10.0, 10.0) - 50.0).abs() < 0.01);
    assert!((normalize_value(15.0, 10.0) - 75.0).abs() < 0.01);
    assert!((normalize_value(5.0, 10.0) - 25.0).abs() < 0.01);
}

#[test]
fn test_snapshot_store_to_reports() {
    let tmp = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(tmp.path().to_path_buf());

    let fighters = vec![
        scaled_fighter("A1", 2.0),
        scaled_fighter("B2", 0.5),
        FighterRecord::new("C3", "No Class"),
    ];
    JsonlWriter::new(config.snapshot_path(SnapshotKind::Fighters))
        .write_all(&fighters)
        .unwrap();
    JsonlWriter::new(config.snapshot_path(SnapshotKind::WeightClasses))
        .write_all(&[lightweight()])
        .unwrap();
    JsonlWriter::new(config.snapshot_path(SnapshotKind::Fights))
        .write_all(&[
            Fight {
                fight_code: "F1".to_string(),
                fighter_a: "A1".to_string(),
                fighter_b: "B2".to_string(),
                method_of_finish: "SUB".to_string(),
                actual_rounds: 2,
                scheduled_rounds: 3,
                ..Default::default()
            },
            Fight {
                fight_code: "F2".to_string(),
                fighter_a: "B2".to_string(),
                fighter_b: "C3".to_string(),
                method_of_finish: "UD".to_string(),
                actual_rounds: 3,
                scheduled_rounds: 3,
                ..Default::default()
            },
        ])
        .unwrap();

    let store = SnapshotStore::new(config);
    let engine = RatingEngine::default();

    let loaded = store.fighters().unwrap();
    assert_eq!(loaded.len(), 3);

    let reports: Vec<_> = loaded
        .iter()
        .map(|f| {
            let baseline = store.baseline_for(f).unwrap();
            engine.report(f, baseline.as_ref())
        })
        .collect();
    assert_eq!(
        reports.iter().filter(|r| r.baseline_found).count(),
        2
    );

    assert_eq!(store.append_reports(&reports).unwrap(), 3);
    let read_back = store.reports().unwrap();
    let codes: Vec<_> = read_back.iter().map(|r| r.fighter_code.as_str()).collect();
    assert_eq!(codes, vec!["A1", "B2", "C3"]);
    assert_eq!(read_back[0].overall, reports[0].overall);

    // B2 lost F1 by submission and won F2
    let b2 = store.find_fighter("B2").unwrap().unwrap();
    let fights = store.fights_for("B2").unwrap();
    let opponents = store.opponents_of("B2", &fights).unwrap();
    let baseline = store.baseline_for(&b2).unwrap();
    let combined = engine.difficulty("B2", &fights, &opponents, baseline.as_ref());

    assert_eq!(combined.total_fights, 2);
    assert_eq!(combined.wins, 1);
    assert_eq!(combined.losses, 1);
    assert_eq!(combined.fights.len(), 2);
}

#[test]
fn test_snapshot_fight_and_combos() {
    let tmp = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(tmp.path().to_path_buf());

    JsonlWriter::new(config.snapshot_path(SnapshotKind::Fighters))
        .write_all(&[scaled_fighter("A1", 1.0), scaled_fighter("B2", 1.0)])
        .unwrap();
    JsonlWriter::new(config.snapshot_path(SnapshotKind::WeightClasses))
        .write_all(&[lightweight()])
        .unwrap();
    JsonlWriter::new(config.snapshot_path(SnapshotKind::Fights))
        .write_all(&[Fight {
            fight_code: "F1".to_string(),
            fighter_a: "A1".to_string(),
            fighter_b: "B2".to_string(),
            method_of_finish: "UD".to_string(),
            actual_rounds: 3,
            scheduled_rounds: 3,
            final_round_time: Some("5:00".to_string()),
            // 30 jabs in 15 minutes against a class pace of 2 per minute
            stats_a: Some(CornerStats {
                jabs: 30.0,
                ..Default::default()
            }),
            ..Default::default()
        }])
        .unwrap();
    JsonlWriter::new(config.snapshot_path(SnapshotKind::Combinations))
        .write_all(&[CombinationRecord::new("A1")
            .with("LeftJab_LeftJab_RightCross", 4.0)
            .with("LeftJab_RightCross_LeftHook", 4.0)])
        .unwrap();

    let store = SnapshotStore::new(config);
    let engine = RatingEngine::default();

    let fight = store.find_fight("F1").unwrap().unwrap();
    let a = store.find_fighter("A1").unwrap();
    let b = store.find_fighter("B2").unwrap();
    let baseline = store.baseline_for_fight(&fight, a.as_ref()).unwrap();
    let report = engine.fight_report(&fight, a.as_ref(), b.as_ref(), baseline.as_ref());

    assert!((report.minutes - 15.0).abs() < 1e-9);
    assert!((report.class_strikes_per_minute - 2.0).abs() < 1e-9);
    assert!(report.fighter_a.class_difference_pct.abs() < 1e-9);
    assert_eq!(report.fighter_a.ratings.striking, Rating::NEUTRAL);
    assert!(!report.fighter_b.stats_recorded);

    let record = store.combinations_for("A1").unwrap().unwrap();
    let combos = engine.combos(&record, 0);
    assert_eq!(combos.thrown.distinct, 2);
    assert!((combos.thrown.top[0].percentage - 50.0).abs() < 1e-9);
    assert_eq!(
        combos.thrown.most_common.as_deref(),
        Some("Double Left Jab to Right Cross")
    );

    // "Double Left Jab" counts one punch keyword
    let three_punch = engine.combos(&record, 3);
    assert_eq!(three_punch.thrown.distinct, 1);
    assert_eq!(
        three_punch.thrown.most_common.as_deref(),
        Some("Left Jab to Right Cross to Left Hook")
    );
}

#[test]
fn test_config_file_feeds_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
data_dir = "/tmp/fightstats"

[server]
port = 9100

[reference]
aggression_min_fights = 1
"#
    )
    .unwrap();

    let config = AppConfig::from_file(&file.path().to_path_buf()).unwrap();
    assert_eq!(config.server.port, 9100);

    let engine = RatingEngine::new(config.reference);
    let mut f = FighterRecord::new("X", "Two Fights");
    f.fights_tracked = 2.0;

    // Default threshold is five fights
    assert!(RatingEngine::default()
        .categories(&f, None)
        .aggression
        .is_insufficient());
    assert!(!engine.categories(&f, None).aggression.is_insufficient());
}
