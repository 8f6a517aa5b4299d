//! PostgreSQL-backed [`Store`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::{debug, info};

use docrepo_core::config::DatabaseConfig;
use docrepo_core::error::{AppError, ErrorKind};
use docrepo_core::result::AppResult;
use docrepo_core::traits::Store;
use docrepo_core::types::{Document, StoreQuery};

use super::sql::{self, SqlBind, SqlStatement};

/// Binds every parameter of a [`SqlStatement`] onto a sqlx query builder.
macro_rules! bind_all {
    ($query:expr, $binds:expr) => {{
        let mut query = $query;
        for bind in $binds {
            query = match bind {
                SqlBind::Text(text) => query.bind(text.as_str()),
                SqlBind::Json(value) => query.bind(Json(value)),
                SqlBind::BigInt(n) => query.bind(*n),
            };
        }
        query
    }};
}

/// Document store on a single JSONB table.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool. The `documents` table must already exist.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration and, when `migrate` is set, bring
    /// the `documents` table up to date.
    pub async fn connect(config: &DatabaseConfig, migrate: bool) -> AppResult<Self> {
        info!(
            host = %database_host(&config.url),
            max_connections = config.max_connections,
            "Opening PostgreSQL document store"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(store_error("Failed to open document store pool"))?;

        let store = Self::new(pool);
        if migrate {
            store.migrate().await?;
        }
        info!("PostgreSQL document store ready");
        Ok(store)
    }

    /// Apply pending migrations from the workspace `migrations/` directory.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Store,
                    format!("Failed to migrate documents table: {e}"),
                    e,
                )
            })?;
        debug!("Documents table migrated");
        Ok(())
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Host, port, and database of a connection URL, without credentials.
fn database_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.rsplit_once('@').map_or(rest, |(_, host)| host)
}

fn store_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Store, format!("{context}: {e}"), e)
}

#[async_trait]
impl Store for PgStore {
    async fn count(&self, collection: &str, query: &StoreQuery) -> AppResult<u64> {
        let SqlStatement { sql, binds } = sql::count(collection, query);
        debug!(collection, %sql, "count");
        let total: i64 = bind_all!(sqlx::query_scalar::<_, i64>(&sql), &binds)
            .fetch_one(self.pool())
            .await
            .map_err(store_error("Failed to count documents"))?;
        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn exists(&self, collection: &str, query: &StoreQuery) -> AppResult<bool> {
        let SqlStatement { sql, binds } = sql::exists(collection, query);
        debug!(collection, %sql, "exists");
        bind_all!(sqlx::query_scalar::<_, bool>(&sql), &binds)
            .fetch_one(self.pool())
            .await
            .map_err(store_error("Failed to check document existence"))
    }

    async fn find_one(&self, collection: &str, query: &StoreQuery) -> AppResult<Option<Document>> {
        let SqlStatement { sql, binds } = sql::find_one(collection, query);
        debug!(collection, %sql, "find_one");
        let row = bind_all!(sqlx::query_scalar::<_, Json<Document>>(&sql), &binds)
            .fetch_optional(self.pool())
            .await
            .map_err(store_error("Failed to find document"))?;
        Ok(row.map(|Json(doc)| doc))
    }

    async fn find(
        &self,
        collection: &str,
        query: &StoreQuery,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Document>> {
        let SqlStatement { sql, binds } = sql::find(collection, query, skip, limit);
        debug!(collection, %sql, skip, limit, "find");
        let rows = bind_all!(sqlx::query_scalar::<_, Json<Document>>(&sql), &binds)
            .fetch_all(self.pool())
            .await
            .map_err(store_error("Failed to list documents"))?;
        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn create(&self, collection: &str, document: Document) -> AppResult<()> {
        let SqlStatement { sql, binds } = sql::insert(collection, document);
        bind_all!(sqlx::query(&sql), &binds)
            .execute(self.pool())
            .await
            .map_err(store_error("Failed to insert document"))?;
        debug!(collection, "Document inserted");
        Ok(())
    }

    async fn update_one(
        &self,
        collection: &str,
        query: &StoreQuery,
        document: Document,
    ) -> AppResult<()> {
        let SqlStatement { sql, binds } = sql::update_one(collection, query, document);
        let result = bind_all!(sqlx::query(&sql), &binds)
            .execute(self.pool())
            .await
            .map_err(store_error("Failed to update document"))?;
        debug!(collection, rows = result.rows_affected(), "Document updated");
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT to_regclass('documents') IS NOT NULL")
            .fetch_one(self.pool())
            .await
            .map_err(store_error("Document store health check failed"))
    }
}
