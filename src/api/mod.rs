//! REST API endpoints.
//!
//! Read-only Axum API serving computed ratings for the fighters in the
//! snapshot store.

pub mod routes;
pub mod state;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::storage::StorageError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// CORS for GET requests from `origin`, or any origin for `"*"`.
fn cors_layer(origin: &str) -> CorsLayer {
    if origin.trim() == "*" {
        return CorsLayer::permissive();
    }

    match HeaderValue::from_str(origin.trim()) {
        Ok(value) => CorsLayer::new()
            .allow_origin(value)
            .allow_methods([Method::GET]),
        Err(e) => {
            warn!("Invalid CORS origin {:?} ({}), allowing any origin", origin, e);
            CorsLayer::permissive()
        }
    }
}

/// All API routes with tracing and CORS layers.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origin);

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/fighters", get(routes::fighters::list_fighters))
        .route("/api/fighters/:code", get(routes::fighters::get_fighter))
        .route(
            "/api/fighters/:code/ratings",
            get(routes::fighters::get_ratings),
        )
        .route(
            "/api/fighters/:code/overall",
            get(routes::fighters::get_overall),
        )
        .route(
            "/api/fighters/:code/movement",
            get(routes::fighters::get_movement),
        )
        .route(
            "/api/fighters/:code/breakdown",
            get(routes::fighters::get_breakdown),
        )
        .route(
            "/api/fighters/:code/difficulty",
            get(routes::fighters::get_difficulty),
        )
        .route(
            "/api/fighters/:code/combos",
            get(routes::fighters::get_combos),
        )
        .route(
            "/api/fights/:code/stats",
            get(routes::fights::get_fight_stats),
        )
        .route(
            "/api/weight-classes",
            get(routes::weight_classes::list_weight_classes),
        )
        .route(
            "/api/weight-classes/:name/baseline",
            get(routes::weight_classes::get_baseline),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err: ApiError = StorageError::PathNotFound("/missing".into()).into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn test_error_message_prefix() {
        let err = ApiError::NotFound("fighter F1".to_string());
        assert_eq!(err.to_string(), "Not found: fighter F1");
    }
}
