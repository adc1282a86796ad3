//! Shortening coordinator: candidate generation and conflict resolution.

use std::sync::Arc;

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{PutOutcome, StoreError, UrlRepository};
use crate::utils::code_generator::CodeGenerator;

/// Failures surfaced by [`ShortenerService::shorten`].
///
/// Key conflicts never appear here: a short-code collision is retried and a
/// known original URL resolves to its existing pair.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    #[error("failed to get short URL pair")]
    Retrieval(#[source] StoreError),
}

/// Coordinates short code generation against the store's reservation
/// protocol.
///
/// Owns the retry loop that turns candidate codes and store outcomes into a
/// single final mapping. Exactly one successful store mutation happens per
/// call, or zero when the URL was already known.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn CodeGenerator>,
    short_url_prefix: String,
    code_length: usize,
}

impl ShortenerService {
    /// Creates a new shortening coordinator.
    ///
    /// `short_url_prefix` is prepended verbatim to codes by
    /// [`Self::short_url`]; `code_length` is the exact length of every
    /// generated candidate.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn CodeGenerator>,
        short_url_prefix: impl Into<String>,
        code_length: usize,
    ) -> Self {
        Self {
            repository,
            generator,
            short_url_prefix: short_url_prefix.into(),
            code_length,
        }
    }

    /// Maps `original` to a short code, reusing the code on record if the
    /// URL was shortened before.
    ///
    /// Generates candidates until one is reserved. Collisions in a
    /// 64^length codespace are rare, so the loop is unbounded with no
    /// backoff; the caller's request timeout is the backstop.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Retrieval`] on any store infrastructure
    /// failure, without retrying.
    pub async fn shorten(&self, original: &str) -> Result<UrlPair, ShortenError> {
        loop {
            let candidate = self.generator.generate(self.code_length);

            match self
                .repository
                .put_if_absent(UrlPair::new(original, candidate))
                .await
            {
                Ok(PutOutcome::Inserted(pair)) => return Ok(pair),
                Ok(PutOutcome::OriginalExists(existing)) => return Ok(existing),
                Ok(PutOutcome::ShortCodeExists) => {
                    tracing::debug!(original, "short code collision, retrying");
                }
                Err(e) => return Err(ShortenError::Retrieval(e)),
            }
        }
    }

    /// Renders a short code as a fully-qualified short URL.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}{}", self.short_url_prefix, code)
    }
}
