use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    FromRequest, FromRequestParts,
};
use tracing::warn;

use crate::error::AppError;

/// `axum::Json` whose rejections come back as `AppError` bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` with the same rejection handling.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "rejected json body");
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let message = err.body_text();
                match missing_field(&message) {
                    Some(field) => AppError::Validation(format!("missing required field: {field}")),
                    None => AppError::Validation(message),
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                AppError::Validation(format!("malformed json: {}", err.body_text()))
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation("expected `Content-Type: application/json`".into())
            }
            JsonRejection::BytesRejection(_) => {
                AppError::Internal(anyhow::anyhow!("failed to read request body"))
            }
            other => AppError::Validation(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection, "rejected query string");
        AppError::Validation(rejection.body_text())
    }
}

fn missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let rest = message.get(start..)?;
    let end = rest.find('`')?;
    rest.get(..end)
}
