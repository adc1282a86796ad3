//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{
    ORIGINAL_URL_KEY, PutOutcome, SHORTED_URL_KEY, StoreError, UrlKind, UrlRepository,
};

const INSERT_PAIR: &str = "INSERT INTO urls (original_url, shorted_url) VALUES ($1, $2)";
const SELECT_BY_ORIGINAL: &str =
    "SELECT original_url, shorted_url FROM urls WHERE original_url = $1";
const SELECT_BY_SHORTED: &str =
    "SELECT original_url, shorted_url FROM urls WHERE shorted_url = $1";

/// Explicit mapping from unique-constraint names to conflict kinds.
///
/// The relational backend classifies an insert conflict by which constraint
/// fired. The names here must match the migration that creates the `urls`
/// table; [`ConstraintMap::verify`] checks that against the live schema at
/// startup instead of trusting string matching at call time.
#[derive(Debug, Clone)]
pub struct ConstraintMap {
    original: String,
    shorted: String,
}

impl Default for ConstraintMap {
    fn default() -> Self {
        Self {
            original: "urls_original_url_key".to_string(),
            shorted: "urls_shorted_url_key".to_string(),
        }
    }
}

impl ConstraintMap {
    /// Maps a backend-reported constraint name to the key it guards.
    pub fn classify(&self, constraint: &str) -> Option<UrlKind> {
        if constraint == self.original {
            Some(UrlKind::Original)
        } else if constraint == self.shorted {
            Some(UrlKind::Shorted)
        } else {
            None
        }
    }

    /// Checks that both mapped unique constraints exist on the `urls` table.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SchemaMismatch`] naming the first missing
    /// constraint, or [`StoreError::QueryExecute`] if the catalog query
    /// fails.
    pub async fn verify(&self, pool: &PgPool) -> Result<(), StoreError> {
        let known: Vec<String> = sqlx::query_scalar(
            "SELECT conname FROM pg_constraint WHERE conrelid = 'urls'::regclass AND contype = 'u'",
        )
        .fetch_all(pool)
        .await
        .map_err(StoreError::QueryExecute)?;

        for name in [&self.original, &self.shorted] {
            if !known.iter().any(|c| c == name) {
                return Err(StoreError::SchemaMismatch(name.clone()));
            }
        }

        Ok(())
    }
}

/// PostgreSQL repository for URL pair storage and retrieval.
///
/// Insertion is optimistic: the pair is written without a prior existence
/// check and the two unique constraints on the `urls` table serialize
/// concurrent reservations. A unique violation is classified through the
/// [`ConstraintMap`] into the same outcomes the in-memory store reports.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
    constraints: ConstraintMap,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool and the
    /// default constraint mapping.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            pool,
            constraints: ConstraintMap::default(),
        }
    }

    /// Validates the constraint mapping against the live schema.
    ///
    /// Call once at startup, after migrations have run.
    pub async fn verify_constraints(&self) -> Result<(), StoreError> {
        self.constraints.verify(&self.pool).await
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn put_if_absent(&self, pair: UrlPair) -> Result<PutOutcome, StoreError> {
        let result = sqlx::query(INSERT_PAIR)
            .bind(&pair.original)
            .bind(&pair.short_code)
            .execute(self.pool.as_ref())
            .await;

        let err = match result {
            Ok(_) => return Ok(PutOutcome::Inserted(pair)),
            Err(e) => e,
        };

        let conflict = match err.as_database_error() {
            Some(db) if db.is_unique_violation() => {
                db.constraint().and_then(|c| self.constraints.classify(c))
            }
            _ => None,
        };

        match conflict {
            Some(UrlKind::Original) => {
                // The original URL is already mapped; recover the short code
                // on record for it.
                match self.get_by_url(ORIGINAL_URL_KEY, &pair.original).await {
                    Ok(stored) => Ok(PutOutcome::OriginalExists(stored)),
                    Err(read_err) => Err(StoreError::ConflictReadBack {
                        conflict: err.to_string(),
                        source: Box::new(read_err),
                    }),
                }
            }
            Some(UrlKind::Shorted) => Ok(PutOutcome::ShortCodeExists),
            None => Err(StoreError::QueryExecute(err)),
        }
    }

    async fn get_by_url(&self, key: &str, value: &str) -> Result<UrlPair, StoreError> {
        let sql = match UrlKind::from_key(key)? {
            UrlKind::Original => SELECT_BY_ORIGINAL,
            UrlKind::Shorted => SELECT_BY_SHORTED,
        };

        let row = sqlx::query(sql)
            .bind(value)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(StoreError::QueryExecute)?
            .ok_or(StoreError::NotFound)?;

        let original: String = row.try_get(ORIGINAL_URL_KEY).map_err(StoreError::RowDecode)?;
        let shorted: String = row.try_get(SHORTED_URL_KEY).map_err(StoreError::RowDecode)?;

        Ok(UrlPair::new(original, shorted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_constraints() {
        let map = ConstraintMap::default();
        assert_eq!(
            map.classify("urls_original_url_key"),
            Some(UrlKind::Original)
        );
        assert_eq!(map.classify("urls_shorted_url_key"), Some(UrlKind::Shorted));
    }

    #[test]
    fn test_classify_unknown_constraint() {
        let map = ConstraintMap::default();
        assert_eq!(map.classify("urls_pkey"), None);
        assert_eq!(map.classify(""), None);
    }
}
