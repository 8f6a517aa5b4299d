//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use docrepo_core::config::{DatabaseConfig, StoreConfig};
use docrepo_core::error::AppError;
use docrepo_core::result::AppResult;
use docrepo_core::traits::Store;
use docrepo_core::types::{Document, StoreQuery};

/// Store manager that wraps the configured store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn Store>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    #[allow(unused_variables)]
    pub async fn new(config: &StoreConfig, database: &DatabaseConfig) -> AppResult<Self> {
        let inner: Arc<dyn Store> = match config.provider.as_str() {
            #[cfg(feature = "postgres")]
            "postgres" => {
                info!("Initializing PostgreSQL document store");
                let store =
                    crate::postgres::PgStore::connect(database, config.run_migrations).await?;
                Arc::new(store)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                Arc::new(crate::memory::MemoryStore::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, postgres"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Shared handle to the inner store.
    pub fn store(&self) -> Arc<dyn Store> {
        Arc::clone(&self.inner)
    }
}

#[async_trait]
impl Store for StoreManager {
    async fn count(&self, collection: &str, query: &StoreQuery) -> AppResult<u64> {
        self.inner.count(collection, query).await
    }

    async fn exists(&self, collection: &str, query: &StoreQuery) -> AppResult<bool> {
        self.inner.exists(collection, query).await
    }

    async fn find_one(&self, collection: &str, query: &StoreQuery) -> AppResult<Option<Document>> {
        self.inner.find_one(collection, query).await
    }

    async fn find(
        &self,
        collection: &str,
        query: &StoreQuery,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        self.inner.find(collection, query, skip, limit).await
    }

    async fn create(&self, collection: &str, document: Document) -> AppResult<()> {
        self.inner.create(collection, document).await
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &StoreQuery,
        document: Document,
    ) -> AppResult<()> {
        self.inner.update_one(collection, query, document).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
