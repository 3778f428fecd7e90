use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        password::{hash_password, verify_password},
        repo_types::User,
    },
    error::{AppError, AppResult},
    extractors::AppJson,
    profiles::services::get_or_create,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn issue_tokens(state: &AppState, user: User) -> AppResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(state);
    Ok(Json(AuthResponse {
        access_token: keys.sign_access(user.id)?,
        refresh_token: keys.sign_refresh(user.id)?,
        user: PublicUser {
            id: user.id,
            username: user.username,
        },
    }))
}

/// Creates the account and its default profile, then logs the user in.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.username = payload.username.trim().to_string();
    payload.validate()?;
    if !payload.passwords_match() {
        warn!("password confirmation mismatch");
        return Err(AppError::Validation("passwords do not match".into()));
    }

    if state.users.find_by_username(&payload.username).await?.is_some() {
        warn!(username = %payload.username, "username already registered");
        return Err(AppError::Conflict("Username already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    let Some(user) = state.users.create(&payload.username, &hash).await? else {
        warn!(username = %payload.username, "username taken concurrently");
        return Err(AppError::Conflict("Username already registered".into()));
    };
    get_or_create(
        state.profiles.as_ref(),
        user.id,
        &state.config.profile_defaults.registration,
    )
    .await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    let tokens = issue_tokens(&state, user)?;
    Ok((StatusCode::CREATED, tokens))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = payload.username.trim();
    let Some(user) = state.users.find_by_username(username).await? else {
        warn!(%username, "login unknown username");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    info!(user_id = %user.id, "user logged in");
    issue_tokens(&state, user)
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;

    let user = state
        .users
        .find_by_id(claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    issue_tokens(&state, user)
}

/// Tokens are stateless; the client drops them.
#[instrument(skip_all)]
pub async fn logout(AuthUser(user_id): AuthUser) -> StatusCode {
    info!(%user_id, "user logged out");
    StatusCode::NO_CONTENT
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PublicUser>> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    Ok(Json(PublicUser {
        id: user.id,
        username: user.username,
    }))
}
