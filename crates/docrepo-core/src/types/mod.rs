//! Core type definitions used across the docrepo workspace.

pub mod document;
pub mod filter;
pub mod id;
pub mod pagination;
pub mod query;

pub use document::{Document, from_document, is_empty_value, to_document, values_equal};
pub use filter::{Filter, FilterField, FilterOp};
pub use id::*;
pub use pagination::Pagination;
pub use query::StoreQuery;
