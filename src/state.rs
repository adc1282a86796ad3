//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ExpanderService, ShortenerService};

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub expander: Arc<ExpanderService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>, expander: Arc<ExpanderService>) -> Self {
        Self {
            shortener,
            expander,
        }
    }
}
