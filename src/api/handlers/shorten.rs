//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short URL for the submitted original URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// Shortening the same URL twice returns the same short URL both times.
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed URL and 500 on store failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let pair = state.shortener.shorten(&payload.original_url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.shortener.short_url(&pair.short_code),
    }))
}
