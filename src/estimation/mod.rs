mod dto;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::estimator_routes()
}
