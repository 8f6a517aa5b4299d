//! Error-accumulating validation outcome.

use docrepo_core::error::AppError;
use docrepo_core::result::AppResult;

/// Outcome of one or more validation checks.
///
/// Either ok (no messages) or a non-empty list of messages. Results are
/// combined without short-circuiting so that every failure is reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// A failing result with one message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Combine results: ok iff every input is ok, otherwise every message
    /// of every failing input in input order, duplicates preserved.
    pub fn combine(results: impl IntoIterator<Item = ValidationResult>) -> Self {
        let errors = results
            .into_iter()
            .flat_map(|result| result.errors)
            .collect();
        Self { errors }
    }

    /// Whether any check failed.
    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether every check passed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure messages, in order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Prefix every message, e.g. with the field it belongs to.
    pub fn with_prefix(self, prefix: &str) -> Self {
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|message| format!("{prefix}: {message}"))
                .collect(),
        }
    }

    /// Convert into an [`AppResult`], failing with a validation error that
    /// carries every message as a detail.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(AppError::validation_errors(self.errors))
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        Self::combine(iter)
    }
}
