use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::BaselineRates;

#[derive(Debug, Serialize)]
pub struct WeightClassSummary {
    pub name: String,
    pub weight: f64,
    pub fights: f64,
    pub minutes: f64,
}

#[derive(Debug, Serialize)]
pub struct WeightClassListResponse {
    pub weight_classes: Vec<WeightClassSummary>,
}

#[derive(Debug, Serialize)]
pub struct BaselineResponse {
    pub weight_class: String,
    pub fights: f64,
    pub rounds: f64,
    pub minutes: f64,
    pub rates: BaselineRates,
}

pub async fn list_weight_classes(
    State(state): State<AppState>,
) -> Result<Json<WeightClassListResponse>, ApiError> {
    let mut weight_classes: Vec<WeightClassSummary> = state
        .store
        .weight_classes()?
        .into_iter()
        .map(|wc| WeightClassSummary {
            name: wc.name,
            weight: wc.weight,
            fights: wc.fights,
            minutes: wc.minutes,
        })
        .collect();
    weight_classes.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    Ok(Json(WeightClassListResponse { weight_classes }))
}

pub async fn get_baseline(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BaselineResponse>, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::BadRequest("weight class name is empty".to_string()));
    }

    let class = state
        .store
        .find_weight_class(&name)?
        .ok_or_else(|| ApiError::NotFound(format!("weight class {}", name.trim())))?;

    Ok(Json(BaselineResponse {
        rates: state.engine.baseline_rates(Some(&class)),
        weight_class: class.name,
        fights: class.fights,
        rounds: class.rounds,
        minutes: class.minutes,
    }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::calculate::RatingEngine;
    use crate::models::WeightClassBaseline;
    use crate::storage::{JsonlWriter, SnapshotKind, SnapshotStore, StorageConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn setup_state(dir: &std::path::Path) -> AppState {
        let config = StorageConfig::new(dir.to_path_buf());

        let mut lightweight = WeightClassBaseline::new("Lightweight");
        lightweight.weight = 155.0;
        lightweight.minutes = 100.0;
        lightweight.fights = 10.0;
        lightweight.strikes.total_jabs_thrown = 200.0;
        lightweight.strikes.total_jabs_made = 50.0;
        lightweight.strikes.total_strikes_landed = 50.0;

        let mut flyweight = WeightClassBaseline::new("Flyweight");
        flyweight.weight = 125.0;

        JsonlWriter::new(config.snapshot_path(SnapshotKind::WeightClasses))
            .write_all(&[lightweight, flyweight])
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
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_list_sorted_by_weight() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, json) = get_json(app, "/api/weight-classes").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["weight_classes"][0]["name"], "Flyweight");
        assert_eq!(json["weight_classes"][1]["name"], "Lightweight");
    }

    #[tokio::test]
    async fn test_baseline_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, json) = get_json(app, "/api/weight-classes/lightweight/baseline").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["weight_class"], "Lightweight");

        let accuracy = json["rates"]["striking_accuracy"].as_f64().unwrap();
        assert!((accuracy - 25.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_unknown_baseline_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let app = build_router(setup_state(tmp.path()));

        let (status, json) = get_json(app, "/api/weight-classes/Heavyweight/baseline").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }
}
