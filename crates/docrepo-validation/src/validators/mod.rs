//! Reusable field validators.
//!
//! Every validator accepts `null`: whether a value must be present is
//! decided by the schema's `required` flag, not by the validator.

mod base;

pub use base::{accept_any, validate_boolean, validate_date, validate_string, validate_uuid};
