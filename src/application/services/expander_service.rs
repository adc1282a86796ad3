//! Expansion resolver: short reference normalization and reverse lookup.

use regex::Regex;
use std::sync::{Arc, LazyLock};

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{SHORTED_URL_KEY, StoreError, UrlRepository};

/// Matches a leading `scheme://authority/` so callers may submit either a
/// bare code or a fully-qualified short URL.
static SHORT_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^/]+/").unwrap());

/// Failures surfaced by [`ExpanderService::expand`].
///
/// Distinguishes "the code does not resolve to anything" from "the store
/// could not be checked".
#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("URL pair not found: {0}")]
    NotFound(String),

    #[error("failed to retrieve URL pair")]
    Retrieval(#[source] StoreError),
}

/// Resolves a short reference back to its original URL.
pub struct ExpanderService {
    repository: Arc<dyn UrlRepository>,
}

impl ExpanderService {
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Resolves `short_ref` — a bare code or a full short URL — to its
    /// stored pair. Single synchronous lookup, no retries.
    ///
    /// # Errors
    ///
    /// - [`ExpandError::NotFound`] if the code has no mapping
    /// - [`ExpandError::Retrieval`] on store infrastructure failure
    pub async fn expand(&self, short_ref: &str) -> Result<UrlPair, ExpandError> {
        let code = strip_short_url_prefix(short_ref);

        match self.repository.get_by_url(SHORTED_URL_KEY, code).await {
            Ok(pair) => Ok(pair),
            Err(StoreError::NotFound) => Err(ExpandError::NotFound(short_ref.to_string())),
            Err(e) => Err(ExpandError::Retrieval(e)),
        }
    }
}

/// Strips a leading `scheme://host[:port]/` from a short reference, leaving
/// the bare code.
fn strip_short_url_prefix(short_ref: &str) -> &str {
    match SHORT_URL_PREFIX.find(short_ref) {
        Some(m) => &short_ref[m.end()..],
        None => short_ref,
    }
}
