//! In-memory implementation of the URL store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StoreError, UrlRepository};

/// `DashMap`-backed store.
///
/// The map's `entry` API holds the shard lock across the occupancy check and
/// the insert, which gives the same atomic insert-or-conflict signal as a
/// database unique constraint. Ids come from a counter that only grows, so a
/// deleted record's id is never handed out again.
#[derive(Debug)]
pub struct InMemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Returns a copy of the record for `alias`, if any.
    pub fn find(&self, alias: &str) -> Option<UrlRecord> {
        self.records.get(alias).map(|r| r.value().clone())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        match self.records.entry(alias.to_owned()) {
            Entry::Occupied(_) => Err(StoreError::AliasExists(alias.to_string())),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                slot.insert(UrlRecord::new(
                    id,
                    alias.to_string(),
                    url.to_string(),
                    Utc::now(),
                ));
                Ok(id)
            }
        }
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        self.records
            .get(alias)
            .map(|r| r.url.clone())
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        self.records
            .remove(alias)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(alias.to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
