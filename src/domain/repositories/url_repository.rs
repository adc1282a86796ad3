//! Repository trait for the dual-key URL store.

use crate::domain::entities::UrlPair;
use async_trait::async_trait;

/// Column name for lookups by original URL.
pub const ORIGINAL_URL_KEY: &str = "original_url";
/// Column name for lookups by short code.
pub const SHORTED_URL_KEY: &str = "shorted_url";

/// Which of the two unique keys a lookup or conflict refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    Original,
    Shorted,
}

impl UrlKind {
    /// The column name this key maps to in the relational backend.
    pub fn column(self) -> &'static str {
        match self {
            UrlKind::Original => ORIGINAL_URL_KEY,
            UrlKind::Shorted => SHORTED_URL_KEY,
        }
    }

    /// Parses a caller-supplied key name into a known key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownUrlKind`] for anything other than the two
    /// known column names, distinct from a not-found lookup result.
    pub fn from_key(key: &str) -> Result<Self, StoreError> {
        match key {
            ORIGINAL_URL_KEY => Ok(UrlKind::Original),
            SHORTED_URL_KEY => Ok(UrlKind::Shorted),
            other => Err(StoreError::UnknownUrlKind(other.to_string())),
        }
    }
}

/// Result of an atomic put-if-absent reservation.
///
/// Domain conflicts are outcomes, not errors: the coordinator resolves them
/// (retry on a code collision, reuse on a known original URL) without ever
/// surfacing them to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    /// Neither key existed; the pair was persisted as given.
    Inserted(UrlPair),
    /// The original URL was already mapped. Carries the stored pair with the
    /// short code on record, regardless of the requested one. Storage is not
    /// mutated.
    OriginalExists(UrlPair),
    /// The short code was already claimed by a different original URL.
    /// Storage is not mutated and no usable pair is returned.
    ShortCodeExists,
}

/// Store-level failures, surfaced distinctly from [`PutOutcome`] conflicts.
///
/// The infrastructure variants (`QueryBuild`, `QueryExecute`, `RowDecode`)
/// indicate backend problems, carry the failing query stage, and propagate
/// unchanged through the services to the boundary. They are never retried by
/// the store layer itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to build SQL query: {0}")]
    QueryBuild(String),

    #[error("failed to execute query")]
    QueryExecute(#[source] sqlx::Error),

    #[error("failed to decode result row")]
    RowDecode(#[source] sqlx::Error),

    #[error("URL not found")]
    NotFound,

    #[error("got unexpected URL key: {0}")]
    UnknownUrlKind(String),

    #[error("unique constraint {0} is missing from the urls schema")]
    SchemaMismatch(String),

    /// The original URL was already mapped, but reading the stored pair back
    /// failed. Wraps both the conflict and the read error.
    #[error("original URL already exists, reading stored pair back failed: {conflict}")]
    ConflictReadBack {
        conflict: String,
        #[source]
        source: Box<StoreError>,
    },
}

/// Dual-key URL store with atomic insert-if-absent semantics.
///
/// Both keys (`original_url` and `shorted_url`) are unique across all pairs
/// ever stored. `put_if_absent` must be indivisible with respect to
/// concurrent callers: two concurrent reservations of the same short code
/// must not both observe [`PutOutcome::Inserted`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - two maps
///   under a single reader/writer lock
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - one table with
///   two unique constraints
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Atomically reserves the pair unless one of its keys already exists.
    ///
    /// # Errors
    ///
    /// Returns an infrastructure [`StoreError`] on backend failure. Key
    /// conflicts are reported through [`PutOutcome`], not as errors.
    async fn put_if_absent(&self, pair: UrlPair) -> Result<PutOutcome, StoreError>;

    /// Looks up the stored pair holding `value` under the given key name
    /// (`original_url` or `shorted_url`).
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if no pair holds `value` under that key
    /// - [`StoreError::UnknownUrlKind`] for an unrecognized key name
    /// - an infrastructure [`StoreError`] on backend failure
    async fn get_by_url(&self, key: &str, value: &str) -> Result<UrlPair, StoreError>;
}
