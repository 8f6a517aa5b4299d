//! # docrepo-core
//!
//! Core crate for docrepo. Contains the entity, repository, and store
//! traits, configuration schemas, typed identifiers, filter/query and
//! pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other docrepo crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
