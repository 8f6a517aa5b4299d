//! Validation schema for users.

use docrepo_validation::validators::{validate_boolean, validate_date, validate_uuid};
use docrepo_validation::{FieldRule, ValidationSchema};

use super::model::User;
use super::validator::UserValidator;

/// Fields matched by free-text search.
pub const USER_SEARCHABLES: &[&str] = &["email"];

/// Build the user validation schema.
pub fn user_schema() -> ValidationSchema<User> {
    ValidationSchema::builder()
        .field(FieldRule::new("id", validate_uuid).unique())
        .field(
            FieldRule::new("email", UserValidator::validate_email)
                .required()
                .unique(),
        )
        .field(FieldRule::new("password", UserValidator::validate_password).required())
        .field(FieldRule::new("createdAt", validate_date).required())
        .field(FieldRule::new("updatedAt", validate_date).required())
        .field(FieldRule::new("deletedAt", validate_date))
        .field(FieldRule::new("isDeleted", validate_boolean).required())
        .build()
}
