use crate::domain::model::{ApiInfo, HealthResponse, PredictRequest, PredictionResponse};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use std::io::ErrorKind;

pub async fn index(State(state): State<AppState>) -> Result<Html<Vec<u8>>, ApiError> {
    let path = state.index_path();
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(Html(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Index page not found at {}", path.display());
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::Internal(e.into())),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

pub async fn info(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(state.api_info().clone())
}

/// Validation happens in the extractor, so a bad body never reaches the model.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.service().predict(&request.text).await?;
    Ok(Json(response))
}
