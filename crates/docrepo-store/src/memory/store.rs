//! In-memory document store using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use docrepo_core::result::AppResult;
use docrepo_core::traits::Store;
use docrepo_core::types::{Document, StoreQuery};

/// In-process document store.
///
/// Each collection is an insertion-ordered `Vec` behind a dashmap shard
/// lock. Clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<DashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every document in a collection, soft-deleted ones
    /// included, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .get(collection)
            .map(|docs| docs.value().clone())
            .unwrap_or_default()
    }

    /// Number of stored documents in a collection, soft-deleted ones
    /// included.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    /// Whether a collection holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Drop every collection.
    pub fn clear(&self) {
        self.collections.clear();
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn count(&self, collection: &str, query: &StoreQuery) -> AppResult<u64> {
        let count = self
            .collections
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| query.matches(doc)).count())
            .unwrap_or(0);
        Ok(count as u64)
    }

    async fn exists(&self, collection: &str, query: &StoreQuery) -> AppResult<bool> {
        Ok(self
            .collections
            .get(collection)
            .is_some_and(|docs| docs.iter().any(|doc| query.matches(doc))))
    }

    async fn find_one(&self, collection: &str, query: &StoreQuery) -> AppResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| query.matches(doc)).cloned()))
    }

    async fn find(
        &self,
        collection: &str,
        query: &StoreQuery,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| query.matches(doc))
                    .skip(skip)
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, collection: &str, document: Document) -> AppResult<()> {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &StoreQuery,
        document: Document,
    ) -> AppResult<()> {
        let updated = self
            .collections
            .get_mut(collection)
            .and_then(|mut docs| {
                let slot = docs.iter_mut().find(|doc| query.matches(doc))?;
                *slot = document;
                Some(())
            })
            .is_some();

        if !updated {
            debug!(collection, "update_one matched no document");
        }
        Ok(())
    }
}
