//! Field validators specific to users.

use serde_json::Value;
use validator::ValidateEmail;

use docrepo_validation::ValidationResult;
use docrepo_validation::validators::validate_string;

/// Minimum password length in characters.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Validates user fields that need more than a type check.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl UserValidator {
    /// Require a syntactically valid email address.
    pub fn validate_email(value: &Value) -> ValidationResult {
        match value {
            Value::String(s) if s.is_empty() => ValidationResult::ok(),
            Value::String(s) if !s.validate_email() => {
                ValidationResult::error(format!("'{s}' is not a valid email address"))
            }
            other => validate_string(other),
        }
    }

    /// Require a password of at least [`PASSWORD_MIN_LENGTH`] characters
    /// with enough entropy.
    pub fn validate_password(value: &Value) -> ValidationResult {
        let password = match value {
            Value::String(s) if !s.is_empty() => s,
            other => return validate_string(other),
        };

        if password.chars().count() < PASSWORD_MIN_LENGTH {
            return ValidationResult::error(format!(
                "must be at least {PASSWORD_MIN_LENGTH} characters long"
            ));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return ValidationResult::error("is too weak");
        }

        ValidationResult::ok()
    }
}
