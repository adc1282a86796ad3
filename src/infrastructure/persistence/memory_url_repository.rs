//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::UrlPair;
use crate::domain::repositories::{PutOutcome, StoreError, UrlKind, UrlRepository};

#[derive(Debug, Default)]
struct Maps {
    original_to_short: HashMap<String, String>,
    short_to_original: HashMap<String, String>,
}

/// Process-local URL store backed by two synchronized maps.
///
/// A single reader/writer lock guards both directions of the mapping.
/// `put_if_absent` holds the write lock for the whole check-then-insert
/// sequence, which makes the reservation atomic with respect to concurrent
/// callers. The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    maps: RwLock<Maps>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn put_if_absent(&self, pair: UrlPair) -> Result<PutOutcome, StoreError> {
        let mut maps = self.maps.write().unwrap_or_else(|e| e.into_inner());

        if let Some(existing_code) = maps.original_to_short.get(&pair.original) {
            return Ok(PutOutcome::OriginalExists(UrlPair::new(
                pair.original,
                existing_code.clone(),
            )));
        }

        if maps.short_to_original.contains_key(&pair.short_code) {
            return Ok(PutOutcome::ShortCodeExists);
        }

        maps.original_to_short
            .insert(pair.original.clone(), pair.short_code.clone());
        maps.short_to_original
            .insert(pair.short_code.clone(), pair.original.clone());

        Ok(PutOutcome::Inserted(pair))
    }

    async fn get_by_url(&self, key: &str, value: &str) -> Result<UrlPair, StoreError> {
        let kind = UrlKind::from_key(key)?;
        let maps = self.maps.read().unwrap_or_else(|e| e.into_inner());

        match kind {
            UrlKind::Original => maps
                .original_to_short
                .get(value)
                .map(|code| UrlPair::new(value, code.clone()))
                .ok_or(StoreError::NotFound),
            UrlKind::Shorted => maps
                .short_to_original
                .get(value)
                .map(|original| UrlPair::new(original.clone(), value))
                .ok_or(StoreError::NotFound),
        }
    }
}
