use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{BaselineRates, ComboAnalysis, CombinedDifficulty, FighterBreakdown};
use crate::models::{
    CategoryRatings, CombinationRecord, FighterRecord, MovementRating, OverallRating,
    WeightClassBaseline,
};

#[derive(Debug, Serialize)]
pub struct FighterSummary {
    pub fighter_code: String,
    pub fighter_name: String,
    pub weight_class: Option<String>,
    pub fights_tracked: f64,
}

#[derive(Debug, Serialize)]
pub struct FighterListResponse {
    pub fighters: Vec<FighterSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RatingsResponse {
    pub fighter_code: String,
    pub weight_class: Option<String>,
    pub baseline_found: bool,
    pub categories: CategoryRatings,
    pub fighter_rates: BaselineRates,
    pub class_rates: BaselineRates,
}

#[derive(Debug, Default, Deserialize)]
pub struct ComboParams {
    /// Keep only combinations with at least this many punches.
    pub min_punches: Option<usize>,
}

/// Fighter plus their class baseline, or a 404.
fn load(
    state: &AppState,
    code: &str,
) -> Result<(FighterRecord, Option<WeightClassBaseline>), ApiError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(ApiError::BadRequest("fighter code is empty".to_string()));
    }

    let fighter = state
        .store
        .find_fighter(code)?
        .ok_or_else(|| ApiError::NotFound(format!("fighter {}", code)))?;
    let baseline = state.store.baseline_for(&fighter)?;

    debug!(
        "Loaded fighter {} (baseline: {})",
        fighter.fighter_code,
        baseline.is_some()
    );
    Ok((fighter, baseline))
}

pub async fn list_fighters(
    State(state): State<AppState>,
) -> Result<Json<FighterListResponse>, ApiError> {
    let mut fighters: Vec<FighterSummary> = state
        .store
        .fighters()?
        .into_iter()
        .map(|f| FighterSummary {
            fighter_name: f.display_name().to_string(),
            fighter_code: f.fighter_code,
            weight_class: f.weight_class,
            fights_tracked: f.fights_tracked,
        })
        .collect();
    fighters.sort_by(|a, b| a.fighter_name.cmp(&b.fighter_name));

    Ok(Json(FighterListResponse {
        total: fighters.len(),
        fighters,
    }))
}

pub async fn get_fighter(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<FighterRecord>, ApiError> {
    let (fighter, _) = load(&state, &code)?;
    Ok(Json(fighter))
}

pub async fn get_ratings(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RatingsResponse>, ApiError> {
    let (fighter, baseline) = load(&state, &code)?;
    let baseline = baseline.as_ref();

    Ok(Json(RatingsResponse {
        categories: state.engine.categories(&fighter, baseline),
        fighter_rates: BaselineRates::from_source(&fighter),
        class_rates: state.engine.baseline_rates(baseline),
        baseline_found: baseline.is_some(),
        weight_class: fighter.weight_class,
        fighter_code: fighter.fighter_code,
    }))
}

pub async fn get_overall(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<OverallRating>, ApiError> {
    let (fighter, baseline) = load(&state, &code)?;
    Ok(Json(state.engine.overall(&fighter, baseline.as_ref())))
}

pub async fn get_movement(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MovementRating>, ApiError> {
    let (fighter, baseline) = load(&state, &code)?;
    Ok(Json(state.engine.movement(&fighter, baseline.as_ref())))
}

pub async fn get_breakdown(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<FighterBreakdown>, ApiError> {
    let (fighter, baseline) = load(&state, &code)?;
    Ok(Json(state.engine.breakdown(&fighter, baseline.as_ref())))
}

pub async fn get_difficulty(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<CombinedDifficulty>, ApiError> {
    let (fighter, baseline) = load(&state, &code)?;
    let fights = state.store.fights_for(&fighter.fighter_code)?;
    let opponents = state.store.opponents_of(&fighter.fighter_code, &fights)?;

    Ok(Json(state.engine.difficulty(
        &fighter.fighter_code,
        &fights,
        &opponents,
        baseline.as_ref(),
    )))
}

/// Ranked combinations. A fighter without combination counters gets empty
/// lists.
pub async fn get_combos(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<ComboParams>,
) -> Result<Json<ComboAnalysis>, ApiError> {
    let (fighter, _) = load(&state, &code)?;
    let record = state
        .store
        .combinations_for(&fighter.fighter_code)?
        .unwrap_or_else(|| CombinationRecord::new(&fighter.fighter_code));

    Ok(Json(
        state
            .engine
            .combos(&record, params.min_punches.unwrap_or(0)),
    ))
}
