//! # docrepo-repository
//!
//! Implementations of the [`Repository`](docrepo_core::traits::Repository)
//! contract:
//!
//! - [`BaseRepository`]: talks to a [`Store`](docrepo_core::traits::Store),
//!   adding soft-delete exclusion, free-text search, and paging.
//! - [`ValidatedRepository`]: a decorator that validates inputs against a
//!   [`ValidationSchema`](docrepo_validation::ValidationSchema) and enforces
//!   required and unique fields before delegating to the repository it wraps.

pub mod base;
pub mod validated;

pub use base::BaseRepository;
pub use validated::ValidatedRepository;
