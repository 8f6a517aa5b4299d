//! # docrepo-entity
//!
//! Entity models for docrepo. Each entity module carries the model, its
//! field validators, its validation schema, and a constructor for its
//! validated repository.

pub mod user;
