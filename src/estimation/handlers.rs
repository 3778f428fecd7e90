use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    extractors::AppJson,
    estimation::{
        dto::{EstimateRequest, EstimateResponse},
        error::EstimationError,
        extract::ExtractionStrategy,
        services::estimate_description,
    },
    state::AppState,
};

pub fn estimator_routes() -> Router<AppState> {
    Router::new().route("/calorie-estimator", post(estimate))
}

#[instrument(skip(state, payload))]
pub async fn estimate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(mut payload): AppJson<EstimateRequest>,
) -> AppResult<Json<EstimateResponse>> {
    payload.food_input = payload.food_input.trim().to_string();
    payload.validate()?;
    let food_input = payload.food_input;

    let answer = estimate_description(state.estimator.as_ref(), &food_input)
        .await
        .map_err(EstimationError::from)?;
    let calories = ExtractionStrategy::FirstNumber.extract(&answer).ok();
    info!(%user_id, parsed = calories.is_some(), "calorie estimate served");

    Ok(Json(EstimateResponse {
        food_input,
        estimated_calories: answer,
        calories,
    }))
}
