//! # docrepo-store
//!
//! Document store implementations for docrepo. Supports two providers:
//!
//! - **memory**: in-process collections backed by [dashmap](https://crates.io/crates/dashmap)
//! - **postgres**: a single JSONB `documents` table accessed through
//!   [sqlx](https://crates.io/crates/sqlx)
//!
//! The provider is selected at runtime based on configuration.

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod provider;

pub use provider::StoreManager;
