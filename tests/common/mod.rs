#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;

use link_shortener::application::services::{ExpanderService, ShortenerService};
use link_shortener::infrastructure::persistence::MemoryUrlRepository;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use link_shortener::utils::code_generator::RandomCodeGenerator;

pub const PREFIX: &str = "https://sho.rt/";
pub const CODE_LENGTH: usize = 10;

/// Builds the full application router over a fresh in-memory store.
pub fn test_app() -> Router {
    app_with_repository(Arc::new(MemoryUrlRepository::new()))
}

/// Builds the application router over the given store, so tests can
/// pre-populate mappings.
pub fn app_with_repository(repository: Arc<MemoryUrlRepository>) -> Router {
    let generator = Arc::new(RandomCodeGenerator::new());
    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        generator,
        PREFIX,
        CODE_LENGTH,
    ));
    let expander = Arc::new(ExpanderService::new(repository));

    app_router(AppState::new(shortener, expander))
}
