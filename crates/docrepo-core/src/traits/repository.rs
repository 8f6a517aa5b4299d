//! Generic repository trait for document access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::entity::Entity;
use crate::types::filter::Filter;
use crate::types::pagination::Pagination;

/// Uniform CRUD, search, and pagination contract over one entity type.
///
/// Every read excludes soft-deleted entities. `search` is a free-text
/// value matched case-insensitively against the repository's searchable
/// fields; `None` or an empty string does not narrow the result. `page`
/// defaults to 0.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync + 'static {
    /// Count matching entities.
    async fn count(&self, filter: &Filter, search: Option<&str>) -> AppResult<u64>;

    /// Whether at least one entity matches.
    async fn exists(&self, filter: &Filter, search: Option<&str>) -> AppResult<bool>;

    /// Insert the entity, or update the stored entity with the same id.
    async fn save(&self, entity: &E) -> AppResult<()>;

    /// Return the first matching entity.
    ///
    /// Fails with [`ErrorKind::NotFound`](crate::error::ErrorKind::NotFound)
    /// when nothing matches.
    async fn find_one(&self, filter: &Filter, search: Option<&str>) -> AppResult<E>;

    /// Return one page of matching entities.
    async fn find_many(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Vec<E>>;

    /// Compute page metadata for the query.
    async fn paginate(
        &self,
        filter: &Filter,
        page: Option<i64>,
        search: Option<&str>,
    ) -> AppResult<Pagination>;
}
