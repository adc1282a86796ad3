//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create (or reuse) a short URL
//! - `POST /api/expand`  - Resolve a short reference to its original URL
//! - `GET  /{code}`      - Redirect a short code to its original URL

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::api::handlers::{expand_handler, redirect_handler, shorten_handler};
use crate::api::middleware::access_log_mw;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/expand", post(expand_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(middleware::from_fn(access_log_mw))
}
