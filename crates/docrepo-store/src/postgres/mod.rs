//! PostgreSQL JSONB document store.
//!
//! All collections share one `documents` table. Scalar equalities use JSONB
//! containment, container equalities compare the extracted value, and
//! search uses `ILIKE` on extracted text.

pub mod sql;
mod store;

pub use store::PgStore;
