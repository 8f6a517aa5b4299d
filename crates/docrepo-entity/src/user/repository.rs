//! Validated user repository.

use std::sync::Arc;

use docrepo_core::config::RepositoryConfig;
use docrepo_core::traits::Store;
use docrepo_repository::{BaseRepository, ValidatedRepository};

use super::model::User;
use super::schema::{USER_SEARCHABLES, user_schema};

/// User repository with schema validation in front of the store.
pub type UserRepository = ValidatedRepository<User, BaseRepository<User>>;

/// Build a [`UserRepository`] over `store`.
pub fn user_repository(store: Arc<dyn Store>, config: &RepositoryConfig) -> UserRepository {
    let base = BaseRepository::new(store, USER_SEARCHABLES.iter().copied(), config);
    ValidatedRepository::new(base, user_schema())
}
