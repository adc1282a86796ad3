//! Handlers for short URL expansion and redirect.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use validator::Validate;

use crate::api::dto::{ExpandRequest, ExpandResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short reference to its original URL.
///
/// # Endpoint
///
/// `POST /api/expand`
///
/// Accepts either a bare short code or a fully-qualified short URL.
///
/// # Errors
///
/// Returns 404 Not Found when the code has no mapping, 500 on store failure.
pub async fn expand_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpandRequest>,
) -> Result<Json<ExpandResponse>, AppError> {
    payload.validate()?;

    let pair = state.expander.expand(&payload.shorted_url).await?;

    Ok(Json(ExpandResponse {
        original_url: pair.original,
    }))
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let pair = state.expander.expand(&code).await?;

    Ok(Redirect::temporary(&pair.original))
}
