//! Core traits defined in `docrepo-core` and implemented by other crates.

pub mod entity;
pub mod repository;
pub mod store;

pub use entity::{Entity, ID_FIELD, SOFT_DELETE_FIELD};
pub use repository::Repository;
pub use store::Store;
