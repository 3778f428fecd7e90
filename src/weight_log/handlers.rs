use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    extractors::AppJson,
    food_log::services::today,
    state::AppState,
    weight_log::{
        dto::{LogWeightRequest, WeightLogList},
        repo_types::WeightLogEntry,
    },
};

pub fn weight_log_routes() -> Router<AppState> {
    Router::new().route("/weight-log", get(list_weights).post(log_weight))
}

#[instrument(skip(state))]
pub async fn list_weights(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<WeightLogList>> {
    let weights = state.weights.list_for_user(user_id).await?;
    Ok(Json(WeightLogList { weights }))
}

/// The entry is dated today; the date is not part of the form.
#[instrument(skip(state, payload))]
pub async fn log_weight(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<LogWeightRequest>,
) -> AppResult<(StatusCode, Json<WeightLogEntry>)> {
    payload.validate()?;
    let entry = state.weights.create(user_id, payload.weight, today()).await?;
    info!(%user_id, weight = entry.weight, "weight logged");
    Ok((StatusCode::CREATED, Json(entry)))
}
