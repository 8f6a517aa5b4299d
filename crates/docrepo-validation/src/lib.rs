//! # docrepo-validation
//!
//! Declarative validation for docrepo entities: the [`ValidationResult`]
//! accumulation type, the per-entity [`ValidationSchema`] rule table, and
//! reusable field validators.

pub mod result;
pub mod schema;
pub mod validators;

pub use result::ValidationResult;
pub use schema::{FieldRule, ValidationSchema, ValidationSchemaBuilder, Validator};
