//! Document store capability trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::document::Document;
use crate::types::query::StoreQuery;

/// Trait for document store backends (in-memory, PostgreSQL).
///
/// Stores know nothing about entities, validation, or soft deletion;
/// repositories express all of that through the [`StoreQuery`]. Results
/// come back in a stable store order.
#[async_trait]
pub trait Store: Send + Sync + std::fmt::Debug + 'static {
    /// Count documents matching the query.
    async fn count(&self, collection: &str, query: &StoreQuery) -> AppResult<u64>;

    /// Whether any document matches, without fetching it.
    async fn exists(&self, collection: &str, query: &StoreQuery) -> AppResult<bool> {
        Ok(self.count(collection, query).await? > 0)
    }

    /// Fetch the first matching document.
    async fn find_one(&self, collection: &str, query: &StoreQuery) -> AppResult<Option<Document>>;

    /// Fetch up to `limit` matching documents after skipping `skip`.
    async fn find(
        &self,
        collection: &str,
        query: &StoreQuery,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>>;

    /// Insert a new document.
    async fn create(&self, collection: &str, document: Document) -> AppResult<()>;

    /// Replace the first document matching the query.
    async fn update_one(
        &self,
        collection: &str,
        query: &StoreQuery,
        document: Document,
    ) -> AppResult<()>;

    /// Check store connectivity.
    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
