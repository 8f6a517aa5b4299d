//! Store-backed repository.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use docrepo_core::config::RepositoryConfig;
use docrepo_core::error::AppError;
use docrepo_core::result::AppResult;
use docrepo_core::traits::{Entity, ID_FIELD, Repository, SOFT_DELETE_FIELD, Store};
use docrepo_core::types::{
    Filter, FilterField, Pagination, StoreQuery, from_document, to_document,
};

/// Repository that reads and writes entities of type `E` through a
/// [`Store`].
///
/// Every read adds `isDeleted == false` to the caller's filter and, when a
/// non-empty search value is given, an OR of case-insensitive substring
/// matches across the searchable fields.
pub struct BaseRepository<E> {
    store: Arc<dyn Store>,
    searchables: Vec<String>,
    limit: u64,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> BaseRepository<E> {
    /// Create a repository over `store`.
    pub fn new<S>(
        store: Arc<dyn Store>,
        searchables: impl IntoIterator<Item = S>,
        config: &RepositoryConfig,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            store,
            searchables: searchables.into_iter().map(Into::into).collect(),
            limit: config.page_size.max(1),
            _entity: PhantomData,
        }
    }

    /// Build the store query for a read.
    ///
    /// The soft-delete condition is appended after the caller's filter, so
    /// a filter asking for deleted entities matches nothing.
    pub fn query_for(&self, filter: &Filter, search: Option<&str>) -> StoreQuery {
        let mut query = StoreQuery {
            all_of: filter.to_conditions(),
            any_of: Vec::new(),
        };
        query.all_of.push(FilterField::eq(SOFT_DELETE_FIELD, false));

        if let Some(needle) = search.filter(|s| !s.is_empty()) {
            query.any_of = self
                .searchables
                .iter()
                .map(|field| FilterField::ilike(field.as_str(), needle))
                .collect();
        }
        query
    }

    fn by_id(entity: &E) -> AppResult<StoreQuery> {
        let id = serde_json::to_value(entity.id())?;
        Ok(StoreQuery::new().must(FilterField::eq(ID_FIELD, id)))
    }

    fn skip_for(&self, page: Option<i64>) -> u64 {
        page_index(page).saturating_mul(self.limit)
    }
}

fn page_index(page: Option<i64>) -> u64 {
    u64::try_from(page.unwrap_or(0)).unwrap_or(0)
}

impl<E> fmt::Debug for BaseRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseRepository")
            .field("store", &self.store)
            .field("searchables", &self.searchables)
            .field("limit", &self.limit)
            .finish()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for BaseRepository<E> {
    async fn count(&self, filter: &Filter, search: Option<&str>) -> AppResult<u64> {
        let query = self.query_for(filter, search);
        debug!(collection = E::COLLECTION, "count");
        self.store.count(E::COLLECTION, &query).await
    }

    async fn exists(&self, filter: &Filter, search: Option<&str>) -> AppResult<bool> {
        let query = self.query_for(filter, search);
        debug!(collection = E::COLLECTION, "exists");
        self.store.exists(E::COLLECTION, &query).await
    }

    async fn save(&self, entity: &E) -> AppResult<()> {
        let document = to_document(entity)?;
        let by_id = Self::by_id(entity)?;

        if entity.is_deleted() {
            debug!(collection = E::COLLECTION, id = %entity.id(), "Saving soft-deleted entity");
        }

        if self.store.exists(E::COLLECTION, &by_id).await? {
            self.store
                .update_one(E::COLLECTION, &by_id, document)
                .await?;
            info!(collection = E::COLLECTION, id = %entity.id(), "Entity updated");
        } else {
            self.store.create(E::COLLECTION, document).await?;
            info!(collection = E::COLLECTION, id = %entity.id(), "Entity created");
        }
        Ok(())
    }

    async fn find_one(&self, filter: &Filter, search: Option<&str>) -> AppResult<E> {
        let query = self.query_for(filter, search);
        debug!(collection = E::COLLECTION, "find_one");
        match self.store.find_one(E::COLLECTION, &query).await? {
            Some(document) => from_document(document),
            None => Err(AppError::not_found(format!(
                "No {} entity matches the filter",
                E::COLLECTION
            ))),
        }
    }

    async fn find_many(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Vec<E>> {
        let query = self.query_for(filter, search);
        let skip = self.skip_for(page);
        debug!(collection = E::COLLECTION, skip, limit = self.limit, "find_many");
        self.store
            .find(E::COLLECTION, &query, skip, self.limit)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    async fn paginate(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Pagination> {
        let total_docs = self.count(filter, search).await?;
        Ok(Pagination::new(page_index(page), self.limit, total_docs))
    }
}
