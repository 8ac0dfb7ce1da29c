use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::FightReport;

pub async fn get_fight_stats(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<FightReport>, ApiError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ApiError::BadRequest("fight code is empty".to_string()));
    }

    let fight = state
        .store
        .find_fight(code)?
        .ok_or_else(|| ApiError::NotFound(format!("fight {}", code)))?;

    let fighter_a = state.store.find_fighter(&fight.fighter_a)?;
    let fighter_b = state.store.find_fighter(&fight.fighter_b)?;
    let baseline = state.store.baseline_for_fight(&fight, fighter_a.as_ref())?;
    debug!(
        "Fight {}: {} vs {} (baseline: {})",
        fight.fight_code,
        fight.fighter_a,
        fight.fighter_b,
        baseline.is_some()
    );

    Ok(Json(state.engine.fight_report(
        &fight,
        fighter_a.as_ref(),
        fighter_b.as_ref(),
        baseline.as_ref(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::calculate::RatingEngine;
    use crate::models::{CornerStats, Fight, FighterRecord, TotalStats, WeightClassBaseline};
    use crate::storage::{JsonlWriter, SnapshotKind, SnapshotStore, StorageConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn setup_state(dir: &std::path::Path) -> AppState {
        let config = StorageConfig::new(dir.to_path_buf());

        let mut alpha = FighterRecord::new("A", "Alpha");
        alpha.minutes_tracked = 50.0;
        alpha.total_stats = Some(TotalStats {
            total_jabs_made: 100.0,
            total_hooks_made: 50.0,
            ..Default::default()
        });

        let mut class = WeightClassBaseline::new("Welterweight");
        class.minutes = 100.0;
        class.strikes.total_strikes_landed = 400.0;

        JsonlWriter::new(config.snapshot_path(SnapshotKind::Fighters))
            .write_all(&[alpha, FighterRecord::new("B", "Bravo")])
            .unwrap();
        JsonlWriter::new(config.snapshot_path(SnapshotKind::WeightClasses))
            .write_all(&[class])
            .unwrap();
        JsonlWriter::new(config.snapshot_path(SnapshotKind::Fights))
            .write_all(&[Fight {
                fight_code: "FT1".to_string(),
                fighter_a: "A".to_string(),
                fighter_b: "B".to_string(),
                method_of_finish: "KO".to_string(),
                actual_rounds: 2,
                scheduled_rounds: 3,
                weight_class: Some("Welterweight".to_string()),
                final_round_time: Some("1:00".to_string()),
                stats_a: Some(CornerStats {
                    jabs: 18.0,
                    hooks: 12.0,
                    round_strikes_landed: vec![20.0, 10.0],
                    ..Default::default()
                }),
                stats_b: Some(CornerStats {
                    leg_kicks: 6.0,
                    takedown_attempts: 2.0,
                    round_strikes_landed: vec![4.0, 2.0],
                    ..Default::default()
                }),
                ..Default::default()
            }])
            .unwrap();

        AppState::new(SnapshotStore::new(config), RatingEngine::default())
    }

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_fight_stats() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, json) = get_json(app, "/api/fights/FT1/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["method"], "KO");
        assert_eq!(json["minutes"], 6.0);
        assert_eq!(json["baseline_found"], true);
        assert_eq!(json["class_strikes_per_minute"], 4.0);

        // 30 strikes in 6 minutes against a class pace of 4
        assert_eq!(json["fighter_a"]["strikes_per_minute"], 5.0);
        assert_eq!(json["fighter_a"]["class_difference_pct"], 25.0);
        assert_eq!(json["fighter_a"]["insights"].as_array().unwrap().len(), 5);

        assert_eq!(json["fighter_b"]["won"], false);
        assert_eq!(json["fighter_b"]["takedown_success_pct"], 0.0);
        assert_eq!(json["fighter_b"]["rounds"], serde_json::json!([4.0, 2.0]));
    }

    #[tokio::test]
    async fn test_unknown_fight_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, json) = get_json(app, "/api/fights/NOPE/stats").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_blank_fight_code_is_400() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, _) = get_json(app, "/api/fights/%20/stats").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
