use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    extractors::{AppJson, AppQuery},
    estimation::extract::ExtractionStrategy,
    food_log::{
        dto::{FoodList, FoodLogList, FoodSearch, LogFoodRequest, LoggedFoodResponse},
        services::log_food,
    },
    state::AppState,
};

pub fn food_log_routes() -> Router<AppState> {
    Router::new()
        .route("/food-log", get(list_food_log).post(create_food_log))
        .route("/foods", get(search_foods))
}

/// Full history, newest first.
#[instrument(skip(state))]
pub async fn list_food_log(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<FoodLogList>> {
    let logs = state.food_logs.list_for_user(user_id, None).await?;
    Ok(Json(FoodLogList { logs }))
}

#[instrument(skip(state, payload))]
pub async fn create_food_log(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<LogFoodRequest>,
) -> AppResult<(StatusCode, Json<LoggedFoodResponse>)> {
    let logged = log_food(&state, user_id, &payload, ExtractionStrategy::DigitFilter).await?;
    Ok((StatusCode::CREATED, Json(logged)))
}

#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    AuthUser(_user_id): AuthUser,
    AppQuery(q): AppQuery<FoodSearch>,
) -> AppResult<Json<FoodList>> {
    let limit = q.limit.clamp(1, 100);
    let foods = state.foods.search(q.search.trim(), limit).await?;
    Ok(Json(FoodList { foods }))
}
