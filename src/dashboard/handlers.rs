use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    dashboard::{
        dto::{DashboardEntryResponse, DashboardQuery, DashboardSummary},
        services::{build_summary, parse_duration, parse_duration_value},
    },
    error::AppResult,
    extractors::{AppJson, AppQuery},
    estimation::extract::ExtractionStrategy,
    food_log::{dto::LogFoodRequest, services::log_food},
    state::AppState,
};

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(get_dashboard).post(post_dashboard_entry))
}

#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppQuery(q): AppQuery<DashboardQuery>,
) -> AppResult<Json<DashboardSummary>> {
    let duration_days = parse_duration(q.duration_days.as_deref(), state.config.goal_duration_days);
    Ok(Json(build_summary(&state, user_id, duration_days).await?))
}

/// Dashboard quick-add: the model answer is read with the first-number
/// strategy, unlike the food log page.
#[instrument(skip(state, payload))]
pub async fn post_dashboard_entry(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<LogFoodRequest>,
) -> AppResult<(StatusCode, Json<DashboardEntryResponse>)> {
    let logged = log_food(&state, user_id, &payload, ExtractionStrategy::FirstNumber).await?;
    let duration_days = parse_duration_value(
        payload.duration_days.as_ref(),
        state.config.goal_duration_days,
    );
    let dashboard = build_summary(&state, user_id, duration_days).await?;
    Ok((
        StatusCode::CREATED,
        Json(DashboardEntryResponse {
            entry: logged.entry,
            message: logged.message,
            dashboard,
        }),
    ))
}
