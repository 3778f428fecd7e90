use axum::{extract::State, routing::get, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    extractors::AppJson,
    goals::{compute_duration_adjusted_goal, compute_flat_adjusted_goal, GoalInputs},
    profiles::{
        dto::{ProfileResponse, UpdateProfileRequest, UpdatedProfileResponse},
        repo_types::Profile,
        services::get_or_create,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let profile = get_or_create(
        state.profiles.as_ref(),
        user_id,
        &state.config.profile_defaults.first_visit,
    )
    .await?;
    let daily_calorie_goal = compute_flat_adjusted_goal(&GoalInputs::from(&profile)).goal;
    Ok(Json(ProfileResponse {
        profile,
        daily_calorie_goal,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<UpdatedProfileResponse>> {
    if let Err(e) = payload.validate() {
        warn!(%user_id, error = %e, "invalid profile form");
        return Err(e.into());
    }

    let profile = Profile {
        user_id,
        age: payload.age,
        gender: payload.gender,
        height: payload.height,
        current_weight: payload.current_weight,
        target_weight: payload.target_weight,
        activity_level: payload.activity_level,
        goal: payload.goal,
        updated_at: OffsetDateTime::now_utc(),
    };
    let saved = state.profiles.save(&profile).await?;
    info!(%user_id, "profile updated");

    let inputs = GoalInputs::from(&saved);
    Ok(Json(UpdatedProfileResponse {
        daily_calorie_goal: compute_flat_adjusted_goal(&inputs).goal,
        plan: compute_duration_adjusted_goal(&inputs, payload.duration_days),
        duration_days: payload.duration_days,
        profile: saved,
    }))
}
